use thiserror::Error;

#[derive(Error, Debug)]
pub enum BagError {
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BagResult<T> = Result<T, BagError>;
