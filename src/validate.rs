//! Completeness checks run before a stylesheet is generated.

use crate::error::{Result, ValidationError};
use crate::model::StyleConfiguration;
use crate::url::is_valid_url;

/// Check `config` rule by rule and report the first violation.
///
/// Order: title, content, image URL (presence, then format) for image
/// modes, gradient stops for gradient modes.
pub fn validate(config: &StyleConfiguration) -> Result<()> {
    if config.title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if config.content.trim().is_empty() {
        return Err(ValidationError::MissingContent);
    }

    let mode = config.background_mode;
    if mode.uses_image() {
        if config.image_url.trim().is_empty() {
            return Err(ValidationError::MissingImageUrl);
        }
        if !is_valid_url(&config.image_url) {
            return Err(ValidationError::InvalidImageUrl);
        }
    }
    if mode.uses_gradient() && config.gradient_colors.iter().any(|c| c.is_empty()) {
        return Err(ValidationError::MissingGradientColors);
    }

    Ok(())
}

/// Like [`validate`], but as the message the form displays (empty when valid).
pub fn validation_message(config: &StyleConfiguration) -> String {
    match validate(config) {
        Ok(()) => String::new(),
        Err(e) => e.to_string(),
    }
}
