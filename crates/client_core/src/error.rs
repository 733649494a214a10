use reqwest::StatusCode;
use shared::error::ProtocolError;
use thiserror::Error;

/// Why a single exchange with the records service failed.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend responded with status {0}")]
    Status(StatusCode),
    #[error(transparent)]
    Decode(#[from] ProtocolError),
}

/// User-facing outcome of a failed operation. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("All fields are required.")]
    FieldsRequired,
    #[error("Roll number is required for search.")]
    RollNoRequired,
    #[error("Error fetching students. Please check the server.")]
    Fetch(#[source] BackendError),
    #[error("Error adding student. Please try again.")]
    Add(#[source] BackendError),
    #[error("Error updating student. Please try again.")]
    Update(#[source] BackendError),
    #[error("Error deleting student. Please try again.")]
    Delete(#[source] BackendError),
    #[error("Student not found. Please try another roll number.")]
    NotFound(#[source] BackendError),
}

impl ClientError {
    /// Validation failures never reach the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::FieldsRequired | Self::RollNoRequired)
    }

    pub fn backend_error(&self) -> Option<&BackendError> {
        match self {
            Self::FieldsRequired | Self::RollNoRequired => None,
            Self::Fetch(err)
            | Self::Add(err)
            | Self::Update(err)
            | Self::Delete(err)
            | Self::NotFound(err) => Some(err),
        }
    }
}
