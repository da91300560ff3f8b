use thiserror::Error;

pub type Result<T> = std::result::Result<T, RaffleError>;

#[derive(Error, Debug)]
pub enum RaffleError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name can only contain letters and spaces: '{0}'")]
    InvalidName(String),

    #[error("Name is already registered: '{0}'")]
    AlreadyRegistered(String),

    #[error("No participants to draw from")]
    NoParticipants,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RaffleError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
