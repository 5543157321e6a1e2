//! Configuration model for a styled textbox.
//!
//! A [`StyleConfiguration`] is the single piece of state the whole tool
//! works on: the validator, the stylesheet generator, the preview and the
//! editor session all take it by reference. Field names serialize in
//! camelCase so the same JSON works for config files, the editor server and
//! the WASM bindings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Semantic category of the textbox. Drives the default accent color and the
/// `textbox--<type>` selector suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextboxType {
    Examples,
    Exercises,
    KeyTakeaways,
    LearningObjectives,
}

impl TextboxType {
    pub const ALL: [TextboxType; 4] = [
        TextboxType::Examples,
        TextboxType::Exercises,
        TextboxType::KeyTakeaways,
        TextboxType::LearningObjectives,
    ];

    /// Identifier used in selectors and serialized configs.
    pub fn as_str(self) -> &'static str {
        match self {
            TextboxType::Examples => "examples",
            TextboxType::Exercises => "exercises",
            TextboxType::KeyTakeaways => "key-takeaways",
            TextboxType::LearningObjectives => "learning-objectives",
        }
    }

    /// Flat header color Pressbooks ships for this type.
    pub fn default_solid_color(self) -> &'static str {
        match self {
            TextboxType::Examples => "#4f446d",
            TextboxType::Exercises => "#0b6396",
            TextboxType::KeyTakeaways => "#c25700",
            TextboxType::LearningObjectives => "#5a7613",
        }
    }

    /// Option label: first dash becomes a space, then uppercased.
    pub fn label(self) -> String {
        self.as_str().replacen('-', " ", 1).to_uppercase()
    }
}

impl fmt::Display for TextboxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextboxType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextboxType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownValue {
                field: "textboxType",
                value: s.to_string(),
            })
    }
}

/// Which kind of paint the header region uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundMode {
    Solid,
    Image,
    Gradient,
    Both,
}

impl BackgroundMode {
    pub const ALL: [BackgroundMode; 4] = [
        BackgroundMode::Solid,
        BackgroundMode::Image,
        BackgroundMode::Gradient,
        BackgroundMode::Both,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundMode::Solid => "solid",
            BackgroundMode::Image => "image",
            BackgroundMode::Gradient => "gradient",
            BackgroundMode::Both => "both",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BackgroundMode::Solid => "Solid Color",
            BackgroundMode::Image => "Image",
            BackgroundMode::Gradient => "Gradient",
            BackgroundMode::Both => "Image & Gradient",
        }
    }

    /// Image and both need an image URL.
    pub fn uses_image(self) -> bool {
        matches!(self, BackgroundMode::Image | BackgroundMode::Both)
    }

    /// Gradient and both need two gradient colors.
    pub fn uses_gradient(self) -> bool {
        matches!(self, BackgroundMode::Gradient | BackgroundMode::Both)
    }
}

impl fmt::Display for BackgroundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackgroundMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BackgroundMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownValue {
                field: "backgroundMode",
                value: s.to_string(),
            })
    }
}

/// CSS `linear-gradient` direction keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradientDirection {
    #[serde(rename = "to top")]
    ToTop,
    #[serde(rename = "to bottom")]
    ToBottom,
    #[serde(rename = "to left")]
    ToLeft,
    #[serde(rename = "to right")]
    ToRight,
    #[serde(rename = "to top right")]
    ToTopRight,
    #[serde(rename = "to top left")]
    ToTopLeft,
    #[serde(rename = "to bottom right")]
    ToBottomRight,
    #[serde(rename = "to bottom left")]
    ToBottomLeft,
}

impl GradientDirection {
    pub const ALL: [GradientDirection; 8] = [
        GradientDirection::ToTop,
        GradientDirection::ToBottom,
        GradientDirection::ToLeft,
        GradientDirection::ToRight,
        GradientDirection::ToTopRight,
        GradientDirection::ToTopLeft,
        GradientDirection::ToBottomRight,
        GradientDirection::ToBottomLeft,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GradientDirection::ToTop => "to top",
            GradientDirection::ToBottom => "to bottom",
            GradientDirection::ToLeft => "to left",
            GradientDirection::ToRight => "to right",
            GradientDirection::ToTopRight => "to top right",
            GradientDirection::ToTopLeft => "to top left",
            GradientDirection::ToBottomRight => "to bottom right",
            GradientDirection::ToBottomLeft => "to bottom left",
        }
    }
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradientDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradientDirection::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownValue {
                field: "gradientDirection",
                value: s.to_string(),
            })
    }
}

/// Text, body and border colors of the richer stylesheet variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub header_text_color: String,
    pub body_background_color: String,
    pub body_text_color: String,
    /// Border checkbox; independent of the picker value below.
    pub border_enabled: bool,
    pub border_color: String,
}

impl Palette {
    /// The border color that ends up in output, if the border is switched on.
    pub fn border(&self) -> Option<&str> {
        self.border_enabled.then_some(self.border_color.as_str())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            header_text_color: "#ffffff".to_string(),
            body_background_color: "#ffffff".to_string(),
            body_text_color: "#000000".to_string(),
            border_enabled: false,
            border_color: "#000000".to_string(),
        }
    }
}

/// Complete, transient editing state of one textbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfiguration {
    pub textbox_type: TextboxType,
    pub title: String,
    pub content: String,
    pub background_mode: BackgroundMode,
    pub image_url: String,
    pub solid_color: String,
    pub gradient_direction: GradientDirection,
    /// Always exactly two stops.
    pub gradient_colors: [String; 2],
    /// `None` selects the simpler, header-only variant.
    pub palette: Option<Palette>,
}

impl StyleConfiguration {
    /// Starting state of the header-only variant.
    pub fn simple() -> Self {
        Self {
            palette: None,
            ..Self::default()
        }
    }

    pub fn is_simple(&self) -> bool {
        self.palette.is_none()
    }

    /// Whether the solid color tracks the textbox type's default. Image mode
    /// always does; solid mode only in the richer variant.
    pub fn solid_follows_type(&self) -> bool {
        match self.background_mode {
            BackgroundMode::Image => true,
            BackgroundMode::Solid => !self.is_simple(),
            BackgroundMode::Gradient | BackgroundMode::Both => false,
        }
    }
}

impl Default for StyleConfiguration {
    fn default() -> Self {
        let textbox_type = TextboxType::Examples;
        Self {
            textbox_type,
            title: "Custom Textbox".to_string(),
            content: "This is a preview of your styled textbox.".to_string(),
            background_mode: BackgroundMode::Image,
            image_url: String::new(),
            // The type-default rule has already applied to the initial image mode.
            solid_color: textbox_type.default_solid_color().to_string(),
            gradient_direction: GradientDirection::ToRight,
            gradient_colors: ["#b3272d".to_string(), "#646469".to_string()],
            palette: Some(Palette::default()),
        }
    }
}
