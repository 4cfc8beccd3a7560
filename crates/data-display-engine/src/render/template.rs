//! Fixed page fragments.
//!
//! The stylesheet and script are emitted byte-for-byte on every page; only
//! the themed rules and the per-card markup take parameters. Bump
//! [`TEMPLATE_VERSION`] whenever the client-side behavior changes.

use super::escape::escape_html;

pub const TEMPLATE_VERSION: &str = "1";

pub const TOGGLE_GLYPH: &str = "\u{25BC}";

pub const HEADER_HINT: &str =
    "Click on sections to expand/collapse \u{2022} Click copy to copy text";

pub const BACK_LINK_LABEL: &str = "\u{2190} Enter New Data";

pub const TOAST_MESSAGE: &str = "Copied to clipboard!";

const COPY_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect>
                    <path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"></path>
                </svg>"#;

pub const BASE_STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 20px;
            color: #1f2937;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
        }

        .header {
            text-align: center;
            margin-bottom: 40px;
            animation: fadeInDown 0.6s ease-out;
        }

        .header h1 {
            color: white;
            font-size: 2.5rem;
            font-weight: 700;
            text-shadow: 0 2px 4px rgba(0,0,0,0.1);
            margin-bottom: 10px;
        }

        .header p {
            color: rgba(255,255,255,0.9);
            font-size: 1.1rem;
        }

        .back-link {
            display: inline-block;
            background: rgba(255,255,255,0.2);
            color: white;
            padding: 10px 20px;
            border-radius: 8px;
            text-decoration: none;
            margin-top: 20px;
            transition: all 0.3s ease;
        }

        .back-link:hover {
            background: rgba(255,255,255,0.3);
            transform: translateY(-2px);
        }

        .sections-container {
            display: flex;
            flex-direction: column;
            gap: 20px;
        }

        .section-card {
            background: white;
            border-radius: 12px;
            box-shadow: 0 4px 6px rgba(0,0,0,0.1);
            overflow: hidden;
            transition: all 0.3s ease;
            animation: fadeInUp 0.6s ease-out;
            animation-fill-mode: both;
        }

        .section-card:hover {
            box-shadow: 0 10px 20px rgba(0,0,0,0.15);
            transform: translateY(-2px);
        }

        .section-header {
            color: white;
            padding: 20px;
            cursor: pointer;
            display: flex;
            justify-content: space-between;
            align-items: center;
            transition: background 0.3s ease;
        }

        .section-title {
            display: flex;
            align-items: center;
            gap: 15px;
            flex: 1;
        }

        .section-title h3 {
            font-size: 1.3rem;
            font-weight: 600;
        }

        .toggle-icon {
            font-size: 1.2rem;
            transition: transform 0.3s ease;
            display: inline-block;
        }

        .section-card.collapsed .toggle-icon {
            transform: rotate(-90deg);
        }

        .copy-btn {
            background: rgba(255,255,255,0.2);
            border: 1px solid rgba(255,255,255,0.3);
            color: white;
            padding: 8px 16px;
            border-radius: 6px;
            cursor: pointer;
            font-size: 0.9rem;
            display: flex;
            align-items: center;
            gap: 6px;
            transition: all 0.3s ease;
            font-weight: 500;
        }

        .copy-btn:hover {
            background: rgba(255,255,255,0.3);
            transform: scale(1.05);
        }

        .copy-btn:active {
            transform: scale(0.95);
        }

        .copy-btn.copied {
            background: #10b981;
            border-color: #10b981;
        }

        .section-content {
            max-height: 1000px;
            overflow: hidden;
            transition: max-height 0.4s ease, padding 0.4s ease;
        }

        .section-card.collapsed .section-content {
            max-height: 0;
            padding: 0;
        }

        .content-text {
            padding: 25px;
            background: #f9fafb;
            margin: 0;
            white-space: pre-wrap;
            word-wrap: break-word;
            font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', monospace;
            font-size: 0.95rem;
            line-height: 1.6;
            color: #374151;
            overflow-x: auto;
        }

        .toast {
            position: fixed;
            bottom: 30px;
            right: 30px;
            background: #10b981;
            color: white;
            padding: 15px 25px;
            border-radius: 8px;
            box-shadow: 0 4px 12px rgba(0,0,0,0.15);
            opacity: 0;
            transform: translateY(20px);
            transition: all 0.3s ease;
            pointer-events: none;
            font-weight: 500;
            z-index: 1000;
        }

        .toast.error {
            background: #dc2626;
        }

        .toast.show {
            opacity: 1;
            transform: translateY(0);
        }

        @keyframes fadeInDown {
            from {
                opacity: 0;
                transform: translateY(-30px);
            }
            to {
                opacity: 1;
                transform: translateY(0);
            }
        }

        @keyframes fadeInUp {
            from {
                opacity: 0;
                transform: translateY(30px);
            }
            to {
                opacity: 1;
                transform: translateY(0);
            }
        }

        @media (max-width: 768px) {
            .header h1 {
                font-size: 2rem;
            }

            .section-header {
                padding: 15px;
            }

            .section-title h3 {
                font-size: 1.1rem;
            }

            .content-text {
                padding: 15px;
                font-size: 0.85rem;
            }

            .copy-btn {
                padding: 6px 12px;
                font-size: 0.8rem;
            }
        }
"#;

/// Toggle, copy and toast behavior. Runs in the browser, not here.
pub const SCRIPT: &str = r#"
        function toggleSection(sectionId) {
            const section = document.getElementById(sectionId).closest('.section-card');
            section.classList.toggle('collapsed');
        }

        function copyText(sectionId, event) {
            event.stopPropagation();

            const btn = event.currentTarget;
            const contentElement = document.getElementById(sectionId).querySelector('.content-text');
            const text = contentElement.textContent;

            navigator.clipboard.writeText(text).then(() => {
                showToast('Copied to clipboard!', false);

                const originalText = btn.innerHTML;
                btn.innerHTML = '<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><polyline points="20 6 9 17 4 12"></polyline></svg> Copied!';
                btn.classList.add('copied');

                setTimeout(() => {
                    btn.innerHTML = originalText;
                    btn.classList.remove('copied');
                }, 2000);
            }).catch(err => {
                console.error('Failed to copy:', err);
                showToast('Failed to copy!', true);
            });
        }

        function showToast(message, isError) {
            const toast = document.getElementById('toast');
            toast.textContent = message;
            toast.classList.toggle('error', isError);
            toast.classList.add('show');

            setTimeout(() => {
                toast.classList.remove('show');
            }, 3000);
        }

        document.querySelectorAll('.section-card').forEach((card, index) => {
            card.style.animationDelay = `${index * 0.1}s`;
        });
"#;

/// Rules that depend on the theme color. Both inputs are escaped so a
/// hostile value cannot close the `<style>` element.
pub fn themed_style(theme_color: &str, hover_color: &str) -> String {
    let theme = escape_html(theme_color);
    let hover = escape_html(hover_color);
    format!(
        r#"
        .section-header {{
            background: {theme};
        }}

        .section-header:hover {{
            background: {hover};
        }}

        .content-text {{
            border-left: 4px solid {theme};
        }}
"#
    )
}

/// Markup for one card. `title` and `content` must already be escaped.
pub fn section_card(index: usize, title: &str, content: &str, collapsed: bool) -> String {
    let section_id = format!("section-{index}");
    let card_class = if collapsed {
        "section-card collapsed"
    } else {
        "section-card"
    };
    // HTML parsers drop one newline right after `<pre>`; feed them a spare.
    let pre_break = if content.starts_with('\n') { "\n" } else { "" };

    format!(
        r#"
        <div class="{card_class}">
            <div class="section-header" onclick="toggleSection('{section_id}')">
                <div class="section-title">
                    <span class="toggle-icon">{glyph}</span>
                    <h3>{title}</h3>
                </div>
                <button class="copy-btn" onclick="copyText('{section_id}', event)" title="Copy to clipboard">
                {icon}
                Copy
                </button>
            </div>
            <div class="section-content" id="{section_id}">
                <pre class="content-text">{pre_break}{content}</pre>
            </div>
        </div>
"#,
        glyph = TOGGLE_GLYPH,
        icon = COPY_ICON,
    )
}
