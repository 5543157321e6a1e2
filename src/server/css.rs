/// Styles for the editor page chrome. Never part of generated output.
pub(super) fn build_css() -> String {
    r#"* { box-sizing: border-box; }
html, body { margin: 0; background: #fafafa; color: #222;
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; font-size: 14px; }
.textbox-styler { max-width: 1100px; margin: 0 auto; padding: 24px;
  display: grid; grid-template-columns: 360px 1fr; gap: 24px; }
.textbox-styler h1 { grid-column: 1 / -1; font-size: 22px; margin: 0; }

/* ── Controls ────────────────────────────────────── */
.controls { display: flex; flex-direction: column; gap: 12px; }
.controls label { display: flex; flex-direction: column; gap: 4px; font-weight: 600; }
.controls label.inline { flex-direction: row; align-items: center; }
.controls input[type=text], .controls textarea, .controls select {
  font: inherit; padding: 6px 8px; border: 1px solid #ccc; border-radius: 4px;
}
.controls textarea { min-height: 80px; resize: vertical; }
.controls .group { display: flex; flex-direction: column; gap: 12px; }
.controls fieldset.group { border: 1px solid #ddd; border-radius: 6px; padding: 10px; }
[hidden] { display: none !important; }
.generate-btn { padding: 8px 14px; border: none; border-radius: 4px;
  background: #0b6396; color: #fff; font: inherit; cursor: pointer; }
.generate-btn:hover { background: #094f78; }
.error-message { color: #b3272d; margin: 0; min-height: 1.2em; }

/* ── Output ──────────────────────────────────────── */
.scss-output textarea { width: 100%; font-family: monospace; font-size: 1rem; }
.output-header { display: flex; align-items: center; justify-content: space-between; }
.output-header button { font: inherit; padding: 3px 10px; cursor: pointer; }
.output-header button.copied { color: #22863a; border-color: #22863a; }

/* ── Preview ─────────────────────────────────────── */
.preview-header { font-size: 16px; }
.textbox { border-radius: 1.5em; overflow: hidden; }
.textbox__header { padding: 16px 20px; border-radius: 1.5em 1.5em 0 0; }
.textbox__header h2 { margin: 0; font-size: 20px; }
"#
    .to_string()
}
