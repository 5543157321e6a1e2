use serde::Serialize;

use crate::model::{BackgroundMode, GradientDirection, StyleConfiguration, TextboxType};
use crate::runtime::escape_html;

/// Which control groups the form shows for a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Visibility {
    pub image: bool,
    pub solid_color: bool,
    pub gradient: bool,
    pub palette: bool,
}

impl Visibility {
    pub(crate) fn of(config: &StyleConfiguration) -> Self {
        let mode = config.background_mode;
        Self {
            image: mode.uses_image(),
            solid_color: mode.uses_image() || mode == BackgroundMode::Solid,
            gradient: mode.uses_gradient(),
            palette: config.palette.is_some(),
        }
    }
}

fn hidden(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " hidden"
    }
}

fn select<T: Copy + PartialEq>(
    field: &str,
    options: &[T],
    current: T,
    value: impl Fn(T) -> String,
    label: impl Fn(T) -> String,
) -> String {
    let mut html = format!(r#"<select data-field="{field}">"#);
    for &opt in options {
        let selected = if opt == current { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{}"{selected}>{}</option>"#,
            escape_html(&value(opt)),
            escape_html(&label(opt)),
        ));
    }
    html.push_str("</select>");
    html
}

fn color_input(field: &str, value: &str, extra: &str) -> String {
    format!(
        r#"<input type="color" data-field="{field}"{extra} value="{}">"#,
        escape_html(value)
    )
}

/// The form controls, in display order.
pub(super) fn build_controls(config: &StyleConfiguration) -> String {
    let vis = Visibility::of(config);

    let type_select = select(
        "textboxType",
        &TextboxType::ALL,
        config.textbox_type,
        |t: TextboxType| t.as_str().to_string(),
        TextboxType::label,
    );

    // The header-only variant has no solid mode.
    let modes: Vec<BackgroundMode> = BackgroundMode::ALL
        .into_iter()
        .filter(|m| *m != BackgroundMode::Solid || !config.is_simple())
        .collect();
    let mode_select = select(
        "backgroundMode",
        &modes,
        config.background_mode,
        |m: BackgroundMode| m.as_str().to_string(),
        |m: BackgroundMode| m.label().to_string(),
    );

    let direction_select = select(
        "gradientDirection",
        &GradientDirection::ALL,
        config.gradient_direction,
        |d: GradientDirection| d.as_str().to_string(),
        |d: GradientDirection| d.as_str().to_string(),
    );

    let palette_group = match &config.palette {
        Some(p) => format!(
            r#"<fieldset class="group" data-group="palette"{hide}>
  <legend>Colors</legend>
  <label>Header Text Color: {header}</label>
  <label>Body Background Color: {body_bg}</label>
  <label>Body Text Color: {body_text}</label>
  <label class="inline"><input type="checkbox" data-field="borderEnabled"{checked}> Border</label>
  <label>Border Color: {border}</label>
</fieldset>"#,
            hide = hidden(vis.palette),
            header = color_input("headerTextColor", &p.header_text_color, ""),
            body_bg = color_input("bodyBackgroundColor", &p.body_background_color, ""),
            body_text = color_input("bodyTextColor", &p.body_text_color, ""),
            checked = if p.border_enabled { " checked" } else { "" },
            border = color_input("borderColor", &p.border_color, ""),
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="controls">
  <label>Title:
    <input type="text" data-field="title" value="{title}" placeholder="Enter textbox title">
  </label>
  <label>Content:
    <textarea data-field="content" placeholder="Enter textbox content">{content}</textarea>
  </label>
  <label>Textbox Type: {type_select}</label>
  <label>Background Type: {mode_select}</label>
  <div class="group" data-group="image"{hide_image}>
    <label>Image URL:
      <input type="text" data-field="imageUrl" value="{image_url}" placeholder="Enter image URL">
    </label>
  </div>
  <div class="group" data-group="solidColor"{hide_solid}>
    <label>Solid Background Color: {solid}</label>
  </div>
  <div class="group" data-group="gradient"{hide_gradient}>
    <label>Gradient Direction: {direction_select}</label>
    <label>Gradient Colors: {stop0} {stop1}</label>
  </div>
  {palette_group}
  <button class="generate-btn" id="generate-btn">Generate SCSS</button>
  <p class="error-message" id="error"></p>
</div>"#,
        title = escape_html(&config.title),
        content = escape_html(&config.content),
        image_url = escape_html(&config.image_url),
        hide_image = hidden(vis.image),
        hide_solid = hidden(vis.solid_color),
        hide_gradient = hidden(vis.gradient),
        solid = color_input("solidColor", &config.solid_color, ""),
        stop0 = color_input("gradientColor", &config.gradient_colors[0], r#" data-index="0""#),
        stop1 = color_input("gradientColor", &config.gradient_colors[1], r#" data-index="1""#),
    )
}

/// Read-only stylesheet output, hidden until something is generated.
pub(super) fn build_output_panel() -> String {
    r#"<div class="scss-output" id="output-panel" hidden>
  <div class="output-header">
    <h2>Generated SCSS</h2>
    <button id="copy-btn" title="Copy to clipboard">Copy</button>
  </div>
  <textarea id="output" readonly rows="10"></textarea>
</div>"#
        .to_string()
}
