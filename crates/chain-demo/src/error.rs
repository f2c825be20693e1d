use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("I/O failure reading config {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Layer at position {index} has an empty name")]
    EmptyLayerName { index: usize },

    #[error("Layer at position {index} has an empty message")]
    EmptyLayerMessage { index: usize },

    #[error("Root failure message must not be empty")]
    EmptyRootMessage,

    #[error("No layer named {0:?} in the call stack")]
    UnknownLayer(String),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;
