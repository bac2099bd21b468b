use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid plugin config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("plugin config key `{key}` must not be empty")]
    EmptyModule { key: &'static str },
}
