use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("admin '{0}' already exists")]
    AlreadyExists(String),
    #[error("admin '{0}' not found")]
    NotFound(String),
    #[error("you cannot remove yourself as an administrator")]
    SelfRemoval,
    #[error("request failed: {0}")]
    TransientFailure(String),
    #[error("clipboard unavailable: {0}")]
    ClipboardFailure(String),
}

impl PanelError {
    /// Maps a non-success HTTP status from the directory backend.
    ///
    /// `identity` is the record the request targeted; it fills the message for
    /// conflict and not-found errors when the backend body does not.
    pub fn from_status(status: u16, identity: &str, body: Option<ApiError>) -> Self {
        let message = body.map(|err| err.error);
        match status {
            400 | 422 => Self::InvalidInput(
                message.unwrap_or_else(|| "identifier is required".to_string()),
            ),
            401 | 403 => Self::PermissionDenied(
                message.unwrap_or_else(|| "super-admin role required".to_string()),
            ),
            404 => Self::NotFound(identity.to_string()),
            409 => Self::AlreadyExists(identity.to_string()),
            other => Self::TransientFailure(
                message.unwrap_or_else(|| format!("unexpected status {}", other)),
            ),
        }
    }

    /// Maps a non-success status from the directory listing. The listing
    /// targets no single record, so only auth failures keep their own variant.
    pub fn from_list_status(status: u16, body: Option<ApiError>) -> Self {
        match status {
            401 | 403 => Self::from_status(status, "", body),
            other => Self::TransientFailure(
                body.map(|err| err.error)
                    .unwrap_or_else(|| format!("unexpected status {}", other)),
            ),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::NotFound(_) => "NOT_FOUND",
            Self::SelfRemoval => "SELF_REMOVAL",
            Self::TransientFailure(_) => "TRANSIENT_FAILURE",
            Self::ClipboardFailure(_) => "CLIPBOARD_FAILURE",
        }
    }
}
