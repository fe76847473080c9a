use thiserror::Error;

#[derive(Debug, Error)]
pub enum SamadError {
    #[error("unknown stemming mode `{0}`, expected `standard` or `dialect`")]
    UnknownMode(String),

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
