//! Inline presentation properties for the live preview.
//!
//! Independent of the stylesheet text, but resolves backgrounds the same
//! way: image over underlay color, gradient on a transparent base, image
//! layered over gradient for `both`.

use crate::codegen::gradient;
use crate::model::{BackgroundMode, StyleConfiguration, TextboxType};

use super::escape_html;

/// Ordered `property: value` pairs for one element's `style` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle(Vec<(&'static str, String)>);

impl InlineStyle {
    fn set(&mut self, property: &'static str, value: impl Into<String>) {
        self.0.push((property, value.into()));
    }

    /// Value of `property`, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `style` attribute text, e.g. `color: #fff; padding: 20px`.
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Preview of one textbox: header, content and container styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub textbox_type: TextboxType,
    pub header: InlineStyle,
    pub content: InlineStyle,
    pub container: InlineStyle,
}

impl Preview {
    pub fn from_config(config: &StyleConfiguration) -> Self {
        let mode = config.background_mode;

        let mut header = InlineStyle::default();
        header.set(
            "background-image",
            match mode {
                BackgroundMode::Image => format!("url({})", config.image_url),
                BackgroundMode::Gradient => gradient(config),
                BackgroundMode::Both => format!("url({}), {}", config.image_url, gradient(config)),
                BackgroundMode::Solid => "none".to_string(),
            },
        );
        header.set(
            "background-color",
            match mode {
                BackgroundMode::Gradient => "transparent".to_string(),
                _ => config.solid_color.clone(),
            },
        );
        header.set("background-size", "cover");
        header.set("background-repeat", "no-repeat");
        header.set("background-position", "center");

        let mut content = InlineStyle::default();
        let mut container = InlineStyle::default();
        if let Some(palette) = &config.palette {
            header.set("color", palette.header_text_color.clone());

            content.set("background-color", palette.body_background_color.clone());
            content.set("color", palette.body_text_color.clone());
            content.set("padding", "20px");
            content.set("border-radius", "0 0 1.5em 1.5em");

            container.set(
                "border",
                match palette.border() {
                    Some(color) => format!("1px solid {color}"),
                    None => "none".to_string(),
                },
            );
            container.set("padding-bottom", "0.5em");
            container.set("background-color", palette.body_background_color.clone());
        }

        Self {
            textbox_type: config.textbox_type,
            header,
            content,
            container,
        }
    }

    /// Textbox markup with the inline styles applied. `title` and `content`
    /// are escaped.
    pub fn to_html(&self, title: &str, content: &str) -> String {
        format!(
            r#"<div class="textbox-preview textbox textbox--{ty}"{container}>
  <header class="textbox__header"{header}>
    <h2>{title}</h2>
  </header>
  <div class="textbox__content"{content_style}>{content}</div>
</div>"#,
            ty = self.textbox_type,
            container = style_attr(&self.container),
            header = style_attr(&self.header),
            content_style = style_attr(&self.content),
            title = escape_html(title),
            content = escape_html(content),
        )
    }
}

fn style_attr(style: &InlineStyle) -> String {
    if style.is_empty() {
        String::new()
    } else {
        format!(r#" style="{}""#, escape_html(&style.to_css()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::resolve_background;
    use crate::model::Palette;

    fn config(mode: BackgroundMode) -> StyleConfiguration {
        StyleConfiguration {
            background_mode: mode,
            image_url: "https://x.test/a.png".to_string(),
            solid_color: "#4f446d".to_string(),
            ..StyleConfiguration::default()
        }
    }

    #[test]
    fn header_layers_per_mode() {
        let image = Preview::from_config(&config(BackgroundMode::Image));
        assert_eq!(image.header.get("background-image"), Some("url(https://x.test/a.png)"));
        assert_eq!(image.header.get("background-color"), Some("#4f446d"));

        let gradient = Preview::from_config(&config(BackgroundMode::Gradient));
        assert_eq!(
            gradient.header.get("background-image"),
            Some("linear-gradient(to right, #b3272d, #646469)")
        );
        assert_eq!(gradient.header.get("background-color"), Some("transparent"));

        let both = Preview::from_config(&config(BackgroundMode::Both));
        assert_eq!(both.header.get("background-color"), Some("#4f446d"));

        let solid = Preview::from_config(&config(BackgroundMode::Solid));
        assert_eq!(solid.header.get("background-image"), Some("none"));
        assert_eq!(solid.header.get("background-color"), Some("#4f446d"));
    }

    #[test]
    fn agrees_with_stylesheet_resolution() {
        for mode in [BackgroundMode::Gradient, BackgroundMode::Both] {
            let c = config(mode);
            let preview = Preview::from_config(&c);
            assert_eq!(preview.header.get("background-image").unwrap(), resolve_background(&c));
        }
    }

    #[test]
    fn simple_variant_has_no_body_styles() {
        let c = StyleConfiguration {
            palette: None,
            ..config(BackgroundMode::Image)
        };
        let preview = Preview::from_config(&c);
        assert!(preview.content.is_empty());
        assert!(preview.container.is_empty());
        assert_eq!(preview.header.get("color"), None);
        assert!(!preview.to_html("T", "C").contains(r#"class="textbox__content" style"#));
    }

    #[test]
    fn border_preview() {
        let mut c = config(BackgroundMode::Solid);
        assert_eq!(Preview::from_config(&c).container.get("border"), Some("none"));
        c.palette = Some(Palette {
            border_enabled: true,
            border_color: "#abcdef".to_string(),
            ..Palette::default()
        });
        assert_eq!(
            Preview::from_config(&c).container.get("border"),
            Some("1px solid #abcdef")
        );
    }

    #[test]
    fn markup_escapes_text() {
        let preview = Preview::from_config(&config(BackgroundMode::Solid));
        let html = preview.to_html("<b>Title</b>", "a & b");
        assert!(html.contains("<h2>&lt;b&gt;Title&lt;/b&gt;</h2>"));
        assert!(html.contains(">a &amp; b</div>"));
        assert!(html.contains(r#"class="textbox-preview textbox textbox--examples""#));
    }

    #[test]
    fn inline_style_text() {
        let preview = Preview::from_config(&config(BackgroundMode::Solid));
        assert_eq!(
            preview.content.to_css(),
            "background-color: #ffffff; color: #000000; padding: 20px; border-radius: 0 0 1.5em 1.5em"
        );
    }
}
