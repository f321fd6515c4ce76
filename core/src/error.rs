use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No suitable indices available")]
    NoSuitableCandidate,
}

pub type SimResult<T> = Result<T, SimError>;
