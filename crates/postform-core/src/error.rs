use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config field `{field}` must not be empty")]
    EmptyField { field: &'static str },
}
