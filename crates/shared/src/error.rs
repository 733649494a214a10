use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected an object or array of students, got {0}")]
    UnexpectedShape(&'static str),
}
