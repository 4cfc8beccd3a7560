/// Fraction removed from each channel for the hover shade.
pub const HOVER_DARKEN: f64 = 0.1;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb` or `rrggbb`. Anything else is `None`.
    pub fn parse_hex(color: &str) -> Option<Self> {
        let hex = color.strip_prefix('#').unwrap_or(color);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Multiply every channel by `factor`, truncating toward zero.
    pub fn scale(self, factor: f64) -> Self {
        let scale = |c: u8| (f64::from(c) * factor).clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Darken a hex color by `amount` (0.1 = 10% darker).
///
/// A string that is not a six-digit hex color comes back unchanged.
pub fn darken_color(color: &str, amount: f64) -> String {
    match Rgb::parse_hex(color) {
        Some(rgb) => rgb.scale(1.0 - amount).to_hex(),
        None => color.to_string(),
    }
}
