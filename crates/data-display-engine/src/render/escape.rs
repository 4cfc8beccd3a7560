/// Escape text for an HTML body or attribute context.
///
/// Exactly five characters are replaced: `&`, `<`, `>`, `"` and `'`. Working
/// one character at a time means an ampersand introduced by a replacement
/// is never escaped again.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
