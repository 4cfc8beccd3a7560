use super::escape::escape_html;

/// How much of the offending input is echoed back, in characters.
pub const INPUT_PREVIEW_CHARS: usize = 500;

/// Minimal page shown in place of a display when generation fails.
///
/// Shows the error message and the start of the input that caused it, both
/// escaped.
pub fn render_error_page(message: &str, raw_input: &str) -> String {
    let preview: String = raw_input.chars().take(INPUT_PREVIEW_CHARS).collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Error</title>
    <style>
        body {{ font-family: Arial, sans-serif; padding: 40px; background: #fee; }}
        .error {{ background: white; padding: 20px; border-radius: 8px; border-left: 4px solid #dc2626; }}
        h2 {{ color: #dc2626; }}
        pre {{ background: #f5f5f5; padding: 10px; border-radius: 4px; overflow-x: auto; }}
    </style>
</head>
<body>
    <div class="error">
        <h2>Error Processing Data</h2>
        <p><strong>Error:</strong> {message}</p>
        <p><strong>Input received:</strong></p>
        <pre>{preview}</pre>
    </div>
</body>
</html>
"#,
        message = escape_html(message),
        preview = escape_html(&preview),
    )
}
