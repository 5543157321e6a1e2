//! Editing session: field-by-field mutation of one configuration, the
//! reactive type-default rule, and the generate action.
//!
//! Every edit invalidates whatever was generated before, so the output and
//! the error message only ever describe the configuration as it is now.

use serde::{Deserialize, Serialize};

use crate::codegen::generate_stylesheet;
use crate::error::SessionError;
use crate::model::{BackgroundMode, GradientDirection, StyleConfiguration, TextboxType};
use crate::runtime::Preview;
use crate::validate::validate;

/// Re-derive computed fields after a mutation from `previous` to `next`.
///
/// When the textbox type or background mode changed and the new mode paints
/// a type-colored flat color (image underlay, or solid in the richer
/// variant), the solid color snaps to the new type's default. A pure
/// gradient leaves it alone.
pub fn derive_defaults(
    previous: &StyleConfiguration,
    next: StyleConfiguration,
) -> StyleConfiguration {
    let type_changed = previous.textbox_type != next.textbox_type;
    let mode_changed = previous.background_mode != next.background_mode;
    if !(type_changed || mode_changed) || !next.solid_follows_type() {
        return next;
    }

    let default = next.textbox_type.default_solid_color();
    if next.solid_color == default {
        return next;
    }
    tracing::debug!(
        textbox_type = %next.textbox_type,
        from = %next.solid_color,
        to = default,
        "reset solid color to type default"
    );
    StyleConfiguration {
        solid_color: default.to_string(),
        ..next
    }
}

/// A single form-control change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldEdit {
    Title(String),
    Content(String),
    TextboxType(TextboxType),
    BackgroundMode(BackgroundMode),
    ImageUrl(String),
    SolidColor(String),
    GradientDirection(GradientDirection),
    GradientColor { index: usize, color: String },
    HeaderTextColor(String),
    BodyBackgroundColor(String),
    BodyTextColor(String),
    BorderEnabled(bool),
    BorderColor(String),
}

impl FieldEdit {
    fn apply_to(self, config: &mut StyleConfiguration) -> Result<(), SessionError> {
        match self {
            FieldEdit::Title(v) => config.title = v,
            FieldEdit::Content(v) => config.content = v,
            FieldEdit::TextboxType(v) => config.textbox_type = v,
            FieldEdit::BackgroundMode(v) => config.background_mode = v,
            FieldEdit::ImageUrl(v) => config.image_url = v,
            FieldEdit::SolidColor(v) => config.solid_color = v,
            FieldEdit::GradientDirection(v) => config.gradient_direction = v,
            FieldEdit::GradientColor { index, color } => {
                let slot = config
                    .gradient_colors
                    .get_mut(index)
                    .ok_or(SessionError::GradientIndex(index))?;
                *slot = color;
            }
            FieldEdit::HeaderTextColor(v) => palette(config)?.header_text_color = v,
            FieldEdit::BodyBackgroundColor(v) => palette(config)?.body_background_color = v,
            FieldEdit::BodyTextColor(v) => palette(config)?.body_text_color = v,
            FieldEdit::BorderEnabled(v) => palette(config)?.border_enabled = v,
            FieldEdit::BorderColor(v) => palette(config)?.border_color = v,
        }
        Ok(())
    }
}

fn palette(config: &mut StyleConfiguration) -> Result<&mut crate::model::Palette, SessionError> {
    config.palette.as_mut().ok_or(SessionError::NoPalette)
}

/// One user's editing state: the configuration plus the result of the last
/// generate action.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    config: StyleConfiguration,
    output: Option<String>,
    error: Option<String>,
}

impl EditorSession {
    /// Start from `config`, with derived fields brought up to date.
    pub fn new(config: StyleConfiguration) -> Self {
        let mut config = config;
        if config.solid_follows_type() {
            config.solid_color = config.textbox_type.default_solid_color().to_string();
        }
        Self {
            config,
            output: None,
            error: None,
        }
    }

    /// Start from a configuration loaded verbatim, keeping its solid color.
    pub fn from_saved(config: StyleConfiguration) -> Self {
        Self {
            config,
            output: None,
            error: None,
        }
    }

    pub fn config(&self) -> &StyleConfiguration {
        &self.config
    }

    /// Last generated stylesheet, if it is still current.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Message from the last failed generate action.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn preview(&self) -> Preview {
        Preview::from_config(&self.config)
    }

    /// Apply one edit. Derived fields are recomputed and the previous
    /// output and error are cleared. A rejected edit changes nothing.
    pub fn apply(&mut self, edit: FieldEdit) -> Result<(), SessionError> {
        let mut next = self.config.clone();
        edit.apply_to(&mut next)?;
        self.config = derive_defaults(&self.config, next);
        self.output = None;
        self.error = None;
        Ok(())
    }

    /// The generate action: validate, then either store the stylesheet or
    /// the error message. Never both.
    pub fn generate(&mut self) -> Option<&str> {
        match validate(&self.config) {
            Ok(()) => {
                self.error = None;
                self.output = Some(generate_stylesheet(&self.config));
            }
            Err(e) => {
                tracing::debug!(error = %e, "generate rejected");
                self.error = Some(e.to_string());
                self.output = None;
            }
        }
        self.output.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(mode: BackgroundMode) -> StyleConfiguration {
        StyleConfiguration {
            background_mode: mode,
            image_url: "https://x.test/a.png".to_string(),
            ..StyleConfiguration::default()
        }
    }

    #[test]
    fn type_change_in_image_mode_resets_solid_color() {
        let prev = with(BackgroundMode::Image);
        let next = StyleConfiguration {
            textbox_type: TextboxType::Exercises,
            ..prev.clone()
        };
        assert_eq!(derive_defaults(&prev, next).solid_color, "#0b6396");
    }

    #[test]
    fn type_change_in_solid_mode_resets_solid_color() {
        let prev = with(BackgroundMode::Solid);
        let next = StyleConfiguration {
            textbox_type: TextboxType::KeyTakeaways,
            ..prev.clone()
        };
        assert_eq!(derive_defaults(&prev, next).solid_color, "#c25700");
    }

    #[test]
    fn type_change_in_gradient_mode_keeps_solid_color() {
        let prev = StyleConfiguration {
            solid_color: "#abcdef".to_string(),
            ..with(BackgroundMode::Gradient)
        };
        let next = StyleConfiguration {
            textbox_type: TextboxType::Exercises,
            ..prev.clone()
        };
        assert_eq!(derive_defaults(&prev, next).solid_color, "#abcdef");
    }

    #[test]
    fn type_change_in_simple_solid_mode_keeps_solid_color() {
        let prev = StyleConfiguration {
            background_mode: BackgroundMode::Solid,
            solid_color: "#abcdef".to_string(),
            ..StyleConfiguration::simple()
        };
        let next = StyleConfiguration {
            textbox_type: TextboxType::Exercises,
            ..prev.clone()
        };
        assert_eq!(derive_defaults(&prev, next).solid_color, "#abcdef");

        let mut session = EditorSession::new(prev);
        assert_eq!(session.config().solid_color, "#abcdef");
        session
            .apply(FieldEdit::TextboxType(TextboxType::Exercises))
            .unwrap();
        assert_eq!(session.config().solid_color, "#abcdef");
    }

    #[test]
    fn unrelated_edit_keeps_custom_solid_color() {
        let prev = StyleConfiguration {
            solid_color: "#abcdef".to_string(),
            ..with(BackgroundMode::Image)
        };
        let next = StyleConfiguration {
            title: "Renamed".to_string(),
            ..prev.clone()
        };
        assert_eq!(derive_defaults(&prev, next).solid_color, "#abcdef");
    }

    #[test]
    fn session_switching_type_resets_only_outside_gradient() {
        let mut session = EditorSession::new(with(BackgroundMode::Image));
        session
            .apply(FieldEdit::TextboxType(TextboxType::Exercises))
            .unwrap();
        assert_eq!(session.config().solid_color, "#0b6396");

        let mut session = EditorSession::new(with(BackgroundMode::Gradient));
        let before = session.config().solid_color.clone();
        session
            .apply(FieldEdit::TextboxType(TextboxType::Exercises))
            .unwrap();
        assert_eq!(session.config().solid_color, before);
    }

    #[test]
    fn switching_mode_preserves_gradient_colors() {
        let mut session = EditorSession::new(with(BackgroundMode::Gradient));
        session
            .apply(FieldEdit::GradientColor {
                index: 1,
                color: "#00ff00".to_string(),
            })
            .unwrap();
        session
            .apply(FieldEdit::BackgroundMode(BackgroundMode::Image))
            .unwrap();
        session
            .apply(FieldEdit::BackgroundMode(BackgroundMode::Gradient))
            .unwrap();
        assert_eq!(session.config().gradient_colors, ["#b3272d", "#00ff00"]);
    }

    #[test]
    fn generate_success_then_any_edit_clears_output() {
        let edits = vec![
            FieldEdit::Title("T".to_string()),
            FieldEdit::Content("C".to_string()),
            FieldEdit::TextboxType(TextboxType::Exercises),
            FieldEdit::BackgroundMode(BackgroundMode::Both),
            FieldEdit::ImageUrl("https://x.test/b.png".to_string()),
            FieldEdit::SolidColor("#111111".to_string()),
            FieldEdit::GradientDirection(GradientDirection::ToTop),
            FieldEdit::GradientColor {
                index: 0,
                color: "#222222".to_string(),
            },
            FieldEdit::HeaderTextColor("#333333".to_string()),
            FieldEdit::BodyBackgroundColor("#444444".to_string()),
            FieldEdit::BodyTextColor("#555555".to_string()),
            FieldEdit::BorderEnabled(true),
            FieldEdit::BorderColor("#666666".to_string()),
        ];
        for edit in edits {
            let mut session = EditorSession::new(with(BackgroundMode::Image));
            assert!(session.generate().is_some());
            session.apply(edit.clone()).unwrap();
            assert_eq!(session.output(), None, "{edit:?}");
        }
    }

    #[test]
    fn failed_generate_sets_error_and_clears_output() {
        let mut session = EditorSession::new(with(BackgroundMode::Image));
        assert!(session.generate().is_some());

        session
            .apply(FieldEdit::ImageUrl("not a url".to_string()))
            .unwrap();
        assert_eq!(session.generate(), None);
        assert_eq!(session.error(), Some("Invalid image URL format."));
        assert_eq!(session.output(), None);

        session
            .apply(FieldEdit::ImageUrl("https://x.test/a.png".to_string()))
            .unwrap();
        assert_eq!(session.error(), None);
        assert!(session.generate().is_some());
        assert_eq!(session.error(), None);
    }

    #[test]
    fn bad_gradient_index_is_rejected_without_side_effects() {
        let mut session = EditorSession::new(with(BackgroundMode::Gradient));
        session.generate();
        let err = session
            .apply(FieldEdit::GradientColor {
                index: 2,
                color: "#000000".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, SessionError::GradientIndex(2));
        assert!(session.output().is_some());
    }

    #[test]
    fn palette_edits_need_rich_variant() {
        let mut session = EditorSession::new(StyleConfiguration::simple());
        assert_eq!(
            session.apply(FieldEdit::BorderEnabled(true)),
            Err(SessionError::NoPalette)
        );
    }

    #[test]
    fn field_edit_json_shape() {
        let edit: FieldEdit =
            serde_json::from_str(r#"{"field":"textboxType","value":"key-takeaways"}"#).unwrap();
        assert_eq!(edit, FieldEdit::TextboxType(TextboxType::KeyTakeaways));

        let edit: FieldEdit = serde_json::from_str(
            r##"{"field":"gradientColor","value":{"index":1,"color":"#fff000"}}"##,
        )
        .unwrap();
        assert_eq!(
            edit,
            FieldEdit::GradientColor {
                index: 1,
                color: "#fff000".to_string()
            }
        );
    }
}
