use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("Form error: {0}")]
    Form(#[from] crate::form::FormError),
    #[error("Transport error: {0}")]
    Transport(#[from] crate::submit::TransportError),
    #[error("Submission error: {0}")]
    Submit(#[from] crate::submit::SubmitError),
}

pub type ClientResult<T> = Result<T, ClientError>;
