//! Standalone preview page: the styled textbox plus, optionally, the
//! generated stylesheet in a read-only text area.

use crate::model::StyleConfiguration;

use super::escape_html;
use super::preview::Preview;

/// Base look of the preview page itself, not part of any generated output.
const PAGE_CSS: &str = r#"  * { box-sizing: border-box; }
  body { margin: 0; padding: 32px; background: #f4f4f4; color: #222;
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; }
  h1 { font-size: 18px; margin: 0 0 16px; }
  .preview-content { max-width: 720px; }
  .textbox { border-radius: 1.5em; overflow: hidden; }
  .textbox__header { padding: 16px 20px; border-radius: 1.5em 1.5em 0 0; }
  .textbox__header h2 { margin: 0; font-size: 20px; }
  .scss-output { max-width: 720px; margin-top: 24px; }
  .scss-output textarea { width: 100%; font-family: monospace; font-size: 1rem; }"#;

/// Render a self-contained HTML document previewing `config`.
pub fn preview_page(config: &StyleConfiguration, stylesheet: Option<&str>) -> String {
    let preview = Preview::from_config(config);
    let textbox = preview.to_html(&config.title, &config.content);
    let output = match stylesheet {
        Some(css) => format!(
            r#"<div class="scss-output">
  <h2>Generated SCSS</h2>
  <textarea readonly rows="10">{}</textarea>
</div>"#,
            escape_html(css)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} — Textbox Preview</title>
<style>
{PAGE_CSS}
</style>
</head>
<body>
<h1>Preview</h1>
<div class="preview-content">
{textbox}
</div>
{output}
</body>
</html>
"#,
        title = escape_html(&config.title),
    )
}
