use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    pub fn required(field: &str) -> Self {
        Self::Validation(format!("{} is required", field))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
