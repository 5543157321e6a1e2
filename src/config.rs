//! Loading configurations from JSON files.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::model::StyleConfiguration;

/// Read a [`StyleConfiguration`] from a JSON file. Missing fields take
/// their default values.
pub fn load_config(path: &Path) -> Result<StyleConfiguration, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), textbox_type = %config.textbox_type, "loaded config");
    Ok(config)
}

/// Parse a configuration from JSON text.
pub fn parse_config(text: &str) -> Result<StyleConfiguration, serde_json::Error> {
    serde_json::from_str(text)
}

/// Pretty JSON for `config`, as written by `textbox-styler defaults`.
pub fn to_json(config: &StyleConfiguration) -> String {
    // Plain data with string keys; serialization cannot fail.
    serde_json::to_string_pretty(config).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BackgroundMode;

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/textbox.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/textbox.json"));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(parse_config(r#"{"backgroundMode": "video"}"#).is_err());
    }

    #[test]
    fn json_round_trip() {
        let config = StyleConfiguration {
            background_mode: BackgroundMode::Both,
            image_url: "https://x.test/a.png".to_string(),
            ..StyleConfiguration::default()
        };
        let json = to_json(&config);
        assert!(json.contains(r#""backgroundMode": "both""#));
        assert!(json.contains(r#""gradientDirection": "to right""#));
        assert_eq!(parse_config(&json).unwrap(), config);
    }
}
