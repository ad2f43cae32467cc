use thiserror::Error;

#[derive(Error, Debug)]
pub enum EllintError {
    #[error("Parameter m = {m} outside the domain [0, 1]")]
    Domain { m: f64 },

    #[error("Reference table error: {0}")]
    Reference(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type EllintResult<T> = Result<T, EllintError>;
