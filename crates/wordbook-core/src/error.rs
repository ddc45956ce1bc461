use wordbook_types::UnknownLanguage;

use crate::document::DocumentError;
use crate::fetch::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Word not found: {0}")]
    NotFound(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[source] FetchError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UnknownLanguage> for LookupError {
    fn from(err: UnknownLanguage) -> Self {
        LookupError::InvalidArgument(err.to_string())
    }
}

impl From<DocumentError> for LookupError {
    fn from(err: DocumentError) -> Self {
        LookupError::Internal(err.to_string())
    }
}
