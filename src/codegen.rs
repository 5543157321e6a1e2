use crate::model::{BackgroundMode, StyleConfiguration};

// ── Selectors ──────────────────────────────────────────────────────────
// Every rule is emitted twice-scoped: the generic `.textbox` class and the
// `.bcc-box` alias Pressbooks uses for the same block.

const SELECTOR_PREFIXES: [&str; 2] = [".textbox", ".bcc-box"];

/// One CSS rule: a selector suffix shared by both prefixes plus its
/// declarations in output order.
struct Rule<'a> {
    suffix: &'a str,
    declarations: Vec<(&'a str, String)>,
}

impl Rule<'_> {
    fn write(&self, textbox_type: &str, out: &mut String) {
        let selectors: Vec<String> = SELECTOR_PREFIXES
            .iter()
            .map(|prefix| format!("{prefix}.textbox--{textbox_type}{}", self.suffix))
            .collect();
        out.push_str(&selectors.join(",\n"));
        out.push_str(" {\n");
        for (property, value) in &self.declarations {
            out.push_str(&format!("  {property}: {value};\n"));
        }
        out.push_str("}\n");
    }
}

// ── Public API ─────────────────────────────────────────────────────────

/// The header `background` shorthand value for the configured mode.
///
/// For `both`, the image layer comes first so it paints over the gradient.
pub fn resolve_background(config: &StyleConfiguration) -> String {
    match config.background_mode {
        BackgroundMode::Image => format!("{} url({})", config.solid_color, config.image_url),
        BackgroundMode::Gradient => gradient(config),
        BackgroundMode::Both => format!("url({}), {}", config.image_url, gradient(config)),
        BackgroundMode::Solid => config.solid_color.clone(),
    }
}

/// `linear-gradient(<direction>, <stop0>, <stop1>)`.
pub fn gradient(config: &StyleConfiguration) -> String {
    let [from, to] = &config.gradient_colors;
    format!("linear-gradient({}, {from}, {to})", config.gradient_direction)
}

/// Render the stylesheet for an already validated configuration.
///
/// Output is deterministic. The simple variant (no palette) produces the
/// header rule only; the richer one adds header text, content and
/// container rules.
pub fn generate_stylesheet(config: &StyleConfiguration) -> String {
    let mut rules = vec![Rule {
        suffix: " .textbox__header",
        declarations: vec![
            ("background", resolve_background(config)),
            ("background-size", "cover".to_string()),
            ("background-repeat", "no-repeat".to_string()),
            ("background-position", "center".to_string()),
        ],
    }];

    if let Some(palette) = &config.palette {
        rules.push(Rule {
            suffix: " .textbox__header *",
            declarations: vec![(
                "color",
                format!("{} !important", palette.header_text_color),
            )],
        });
        rules.push(Rule {
            suffix: " .textbox__content",
            declarations: vec![
                ("background-color", palette.body_background_color.clone()),
                ("padding", "20px".to_string()),
                ("border-radius", "0 0 1.5em 1.5em".to_string()),
                ("color", palette.body_text_color.clone()),
            ],
        });
        rules.push(Rule {
            suffix: "",
            declarations: vec![
                (
                    "border",
                    format!("1px solid {}", palette.border().unwrap_or("none")),
                ),
                ("padding-bottom", "0.5em".to_string()),
                ("background-color", palette.body_background_color.clone()),
            ],
        });
    }

    let textbox_type = config.textbox_type.as_str();
    let mut out = String::from("\n");
    for (i, rule) in rules.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        rule.write(textbox_type, &mut out);
    }

    tracing::debug!(
        textbox_type,
        mode = %config.background_mode,
        rules = rules.len(),
        bytes = out.len(),
        "generated stylesheet"
    );
    out
}
