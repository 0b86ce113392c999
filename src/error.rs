use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoveilError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Container too small: {len} bytes, need at least {need}")]
    ContainerTooSmall { len: usize, need: usize },

    #[error("Container payload is empty")]
    EmptyPayload,

    #[error("Wrong password or corrupted data")]
    WrongPasswordOrCorrupted,

    #[error("Unrecognized format: {0}")]
    UnrecognizedFormat(String),

    #[error("Filename carries no decodable metadata: {0}")]
    FilenameDecodeFailure(String),
}

pub type Result<T> = std::result::Result<T, PhotoveilError>;
