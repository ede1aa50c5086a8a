use consts::OUTSIDE_PROVIDER_MSG;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModalError {
    #[error("{}", OUTSIDE_PROVIDER_MSG)]
    OutsideProvider,
    #[error("invalid modal options: {0}")]
    InvalidOptions(String),
}

impl From<serde_json::Error> for ModalError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidOptions(e.to_string())
    }
}
