use super::css::build_css;
use super::inline_js::build_inline_js;
use super::panels::{build_controls, build_output_panel};
use crate::runtime::escape_html;
use crate::session::EditorSession;

/// Full editor page: controls on the left, output and live preview on the right.
pub(super) fn build_editor_page(session: &EditorSession, snapshot_json: &str) -> String {
    let css = build_css();
    let controls = build_controls(session.config());
    let output_panel = build_output_panel();
    let preview = session
        .preview()
        .to_html(&session.config().title, &session.config().content);
    // `</` inside the JSON would close the script block early.
    let inline_js = build_inline_js(&snapshot_json.replace("</", "<\\/"));

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Pressbooks Textbox Styler</title>
<style>
{css}
</style>
</head>
<body>
<div class="textbox-styler">
<h1>Pressbooks Textbox Styler</h1>
{controls}
<div class="right">
{output_panel}
<div class="preview">
  <h2 class="preview-header">Preview</h2>
  <div class="preview-content" id="preview">
{preview}
  </div>
</div>
</div>
</div>
{inline_js}
</body>
</html>"##
    )
}

pub(super) fn build_error_page(error: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Textbox Styler — Error</title>
<style>
  body {{ font-family: system-ui, sans-serif; background: #fafafa; }}
  .error-container {{
    max-width: 640px; margin: 80px auto; padding: 24px;
    border: 1px solid #e0b4b4; border-radius: 8px; background: #fff6f6;
  }}
  .error-message {{ color: #b3272d; white-space: pre-wrap; }}
</style>
</head>
<body>
<div class="error-container">
  <h1>Textbox Styler</h1>
  <div class="error-message">{}</div>
</div>
</body>
</html>"##,
        escape_html(error)
    )
}
