#![forbid(unsafe_code)]

//! Page wiring configuration.
//!
//! Every field has a default matching the board templates, so an empty JSON
//! object (or no config at all) installs against the stock markup.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which dimensions bound the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportSource {
    /// `window.innerWidth` / `window.innerHeight`.
    #[default]
    Window,
    /// `window.screen.width` / `window.screen.height`.
    Screen,
}

/// Maximum log verbosity forwarded to the browser console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// The form element that floats.
    pub form_id: String,
    /// Drag handle (the form header).
    pub header_id: String,
    /// Close control inside the header.
    pub close_id: String,
    /// Control that pops the form out.
    pub open_id: String,
    /// Reply textarea receiving quotes.
    pub comment_id: String,
    /// Class toggled for floating mode.
    pub floating_class: String,
    pub viewport: ViewportSource,
    pub log_level: LogLevel,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            form_id: "postForm".to_owned(),
            header_id: "pfheader".to_owned(),
            close_id: "pfclose".to_owned(),
            open_id: "pfopen".to_owned(),
            comment_id: "comment".to_owned(),
            floating_class: "floating".to_owned(),
            viewport: ViewportSource::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl PanelConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("form_id", &self.form_id),
            ("header_id", &self.header_id),
            ("close_id", &self.close_id),
            ("open_id", &self.open_id),
            ("comment_id", &self.comment_id),
            ("floating_class", &self.floating_class),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ConfigError::EmptyField { field: *field }),
            None => Ok(()),
        }
    }
}
