pub mod color;
pub mod error_page;
pub mod escape;
pub mod template;

use crate::models::{DisplayOptions, Section};

pub use color::{HOVER_DARKEN, darken_color};
pub use error_page::render_error_page;
pub use escape::escape_html;

/// Render sections into a complete, self-contained HTML document.
///
/// Pure and deterministic: the same sections and options always give the
/// same bytes. All user-supplied text is escaped.
pub fn render_page(sections: &[Section], options: &DisplayOptions) -> String {
    let title = escape_html(&options.title);
    let hover_color = darken_color(&options.theme_color, HOVER_DARKEN);
    let content_len: usize = sections.iter().map(|s| s.content.len()).sum();

    let mut html = String::with_capacity(16 * 1024 + content_len * 2);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!(
        "    <meta name=\"generator\" content=\"data-display template {}\">\n",
        template::TEMPLATE_VERSION
    ));
    html.push_str(&format!("    <title>{title}</title>\n"));
    html.push_str("    <style>");
    html.push_str(template::BASE_STYLE);
    html.push_str(&template::themed_style(&options.theme_color, &hover_color));
    html.push_str("    </style>\n</head>\n<body>\n");

    html.push_str("    <div class=\"container\">\n");
    push_header(&mut html, &title, options.back_link.as_deref());

    html.push_str("        <div class=\"sections-container\">");
    for (index, section) in sections.iter().enumerate() {
        html.push_str(&template::section_card(
            index,
            &escape_html(&section.title),
            &escape_html(&section.content),
            options.collapsed_by_default,
        ));
    }
    html.push_str("        </div>\n    </div>\n\n");

    html.push_str(&format!(
        "    <div class=\"toast\" id=\"toast\">{}</div>\n\n",
        template::TOAST_MESSAGE
    ));
    html.push_str("    <script>");
    html.push_str(template::SCRIPT);
    html.push_str("    </script>\n</body>\n</html>\n");

    html
}

fn push_header(html: &mut String, escaped_title: &str, back_link: Option<&str>) {
    html.push_str("        <div class=\"header\">\n");
    html.push_str(&format!("            <h1>{escaped_title}</h1>\n"));
    html.push_str(&format!("            <p>{}</p>\n", template::HEADER_HINT));
    if let Some(href) = back_link {
        html.push_str(&format!(
            "            <a href=\"{}\" class=\"back-link\">{}</a>\n",
            escape_html(href),
            template::BACK_LINK_LABEL
        ));
    }
    html.push_str("        </div>\n\n");
}
