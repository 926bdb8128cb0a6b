use salvo_sim::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("game loop thread panicked")]
    LoopPanicked,
}
