use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SETTINGS_ELEMENT_ID: &str = "note-list-settings";
pub const SEED_ELEMENT_ID: &str = "note-list-seed";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    UnknownLevel(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Routes {
    pub new_note: String,
    pub note_prefix: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            new_note: "/new".to_string(),
            note_prefix: "/".to_string(),
        }
    }
}

impl Routes {
    pub fn note_href(&self, note_id: &str) -> String {
        format!("{}{}", self.note_prefix, note_id)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub routes: Routes,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            routes: Routes::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn log_filter(&self) -> Result<LevelFilter, ConfigError> {
        parse_level(&self.log_level)
    }
}

pub fn parse_level(raw: &str) -> Result<LevelFilter, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(ConfigError::UnknownLevel(raw.to_string())),
    }
}

pub fn load_page_json(element_id: &str) -> Option<String> {
    leptos::prelude::document()
        .get_element_by_id(element_id)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_fields() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.routes.new_note, "/new");
        assert_eq!(settings.routes.note_href("42"), "/42");
    }

    #[test]
    fn routes_are_configurable() {
        let settings =
            Settings::from_json(r#"{"routes":{"note_prefix":"/notes/"},"log_level":"debug"}"#)
                .unwrap();
        assert_eq!(settings.routes.note_href("abc"), "/notes/abc");
        assert_eq!(settings.routes.new_note, "/new");
        assert_eq!(settings.log_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn level_parsing_ignores_case_and_whitespace() {
        assert_eq!(parse_level(" WARN ").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_level("Trace").unwrap(), LevelFilter::Trace);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
    }

    #[test]
    fn rejects_unknown_level() {
        let err = parse_level("verbose").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLevel(ref level) if level == "verbose"));
        assert_eq!(err.to_string(), "unknown log level `verbose`");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{\"log_level\": 3}"),
            Err(ConfigError::Json(_))
        ));
    }
}
