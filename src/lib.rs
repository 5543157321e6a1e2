pub mod codegen;
pub mod config;
pub mod error;
pub mod model;
pub mod runtime;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
pub mod session;
pub mod url;
pub mod validate;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use codegen::{generate_stylesheet, resolve_background};
pub use model::{BackgroundMode, GradientDirection, Palette, StyleConfiguration, TextboxType};
pub use session::{derive_defaults, EditorSession, FieldEdit};
pub use validate::validate;

use error::Result;

/// The generate action: validate `config`, then render its stylesheet.
/// Nothing is produced when validation fails.
pub fn export_stylesheet(config: &StyleConfiguration) -> Result<String> {
    validate(config)?;
    Ok(generate_stylesheet(config))
}

/// Validate and render a standalone HTML preview page with the stylesheet.
pub fn export_preview_page(config: &StyleConfiguration) -> Result<String> {
    let css = export_stylesheet(config)?;
    Ok(runtime::preview_page(config, Some(&css)))
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn end_to_end_default_needs_image_url() {
        let config = StyleConfiguration::default();
        assert_eq!(
            export_stylesheet(&config),
            Err(ValidationError::MissingImageUrl)
        );
    }

    #[test]
    fn end_to_end_image_header() {
        let config = StyleConfiguration {
            image_url: "https://x.test/a.png".to_string(),
            ..StyleConfiguration::default()
        };
        let css = export_stylesheet(&config).expect("export should succeed");
        assert!(css.contains("  background: #4f446d url(https://x.test/a.png);\n"));
        assert!(css.contains(".bcc-box.textbox--examples .textbox__header {"));
    }

    #[test]
    fn end_to_end_session_flow() {
        let mut session = EditorSession::default();
        session
            .apply(FieldEdit::BackgroundMode(BackgroundMode::Gradient))
            .unwrap();
        session
            .apply(FieldEdit::TextboxType(TextboxType::Exercises))
            .unwrap();
        session
            .apply(FieldEdit::GradientDirection(GradientDirection::ToBottomRight))
            .unwrap();

        let css = session.generate().expect("gradient config is valid").to_string();
        assert!(css.contains("linear-gradient(to bottom right, #b3272d, #646469)"));
        assert!(css.contains(".textbox.textbox--exercises .textbox__header,"));
        // Gradient mode never touches the solid color.
        assert_eq!(session.config().solid_color, "#4f446d");

        session
            .apply(FieldEdit::BackgroundMode(BackgroundMode::Solid))
            .unwrap();
        assert_eq!(session.output(), None);
        assert_eq!(session.config().solid_color, "#0b6396");
    }

    #[test]
    fn end_to_end_preview_page_requires_valid_config() {
        let mut config = StyleConfiguration::default();
        assert!(export_preview_page(&config).is_err());
        config.background_mode = BackgroundMode::Solid;
        let page = export_preview_page(&config).unwrap();
        assert!(page.contains("Generated SCSS"));
    }
}
