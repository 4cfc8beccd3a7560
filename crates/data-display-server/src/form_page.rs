use data_display_engine::DisplayOptions;
use data_display_engine::render::escape_html;

const SAMPLE_INPUT: &str = r#"{"summary": "Paste model output here", "next_steps": ["Review", "Share"]}"#;

/// The input form served at `/`, prefilled with the configured defaults.
pub fn render_form_page(defaults: &DisplayOptions) -> String {
    let collapsed = if defaults.collapsed_by_default {
        " checked"
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Input</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 20px;
            color: #1f2937;
        }}
        .container {{ max-width: 900px; margin: 0 auto; }}
        h1 {{ color: white; text-align: center; font-size: 2.5rem; margin-bottom: 10px; }}
        .subtitle {{ color: rgba(255,255,255,0.9); text-align: center; margin-bottom: 30px; }}
        form {{
            background: white;
            border-radius: 12px;
            box-shadow: 0 4px 6px rgba(0,0,0,0.1);
            padding: 30px;
            display: flex;
            flex-direction: column;
            gap: 20px;
        }}
        label {{ font-weight: 600; display: block; margin-bottom: 8px; }}
        textarea {{
            width: 100%;
            min-height: 320px;
            padding: 15px;
            border: 2px solid #e5e7eb;
            border-radius: 8px;
            font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', monospace;
            font-size: 0.95rem;
        }}
        input[type="text"] {{ width: 100%; padding: 10px; border: 2px solid #e5e7eb; border-radius: 8px; }}
        .row {{ display: flex; gap: 20px; align-items: flex-end; flex-wrap: wrap; }}
        .row > div {{ flex: 1; min-width: 180px; }}
        button {{
            background: #4F46E5;
            color: white;
            border: none;
            padding: 14px;
            border-radius: 8px;
            font-size: 1.1rem;
            font-weight: 600;
            cursor: pointer;
        }}
        button:hover {{ background: #473fce; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        <p class="subtitle">Paste text or JSON to turn it into collapsible, copyable sections</p>
        <form method="post" action="/display">
            <div>
                <label for="data">Data</label>
                <textarea id="data" name="data" placeholder="{sample}" required></textarea>
            </div>
            <div class="row">
                <div>
                    <label for="title">Page title</label>
                    <input type="text" id="title" name="title" value="{title}">
                </div>
                <div>
                    <label for="theme_color">Theme color</label>
                    <input type="color" id="theme_color" name="theme_color" value="{theme_color}">
                </div>
                <div>
                    <label><input type="checkbox" name="collapsed"{collapsed}> Start collapsed</label>
                </div>
            </div>
            <button type="submit">Generate Display</button>
        </form>
    </div>
</body>
</html>
"#,
        title = escape_html(&defaults.title),
        theme_color = escape_html(&defaults.theme_color),
        sample = escape_html(SAMPLE_INPUT),
    )
}
