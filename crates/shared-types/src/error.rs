use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown while the case request is in flight.
pub const CASE_LOADING_MESSAGE: &str = "Cargando detalles del caso...";

/// Text shown for any failed case request, whatever the underlying fault.
pub const CASE_LOAD_ERROR_MESSAGE: &str = "No se pudo cargar la información del caso.";

/// Text shown when the request succeeded but carried no case.
pub const CASE_NOT_FOUND_MESSAGE: &str = "Caso no encontrado.";

/// Categorization of client-side failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ClientErrorKind {
    /// Transport failure: DNS, refused connection, aborted fetch.
    Network,
    /// The endpoint answered with a non-2xx status.
    Status,
    /// The body could not be read as a case record.
    MalformedBody,
    /// The configured endpoint could not be turned into a request URL.
    InvalidConfig,
}

impl fmt::Display for ClientErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientErrorKind::Network => write!(f, "Network"),
            ClientErrorKind::Status => write!(f, "Status"),
            ClientErrorKind::MalformedBody => write!(f, "MalformedBody"),
            ClientErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
        }
    }
}

/// Structured error for case-data requests.
///
/// The detail is for logs only; the UI always shows
/// [`CASE_LOAD_ERROR_MESSAGE`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientError {
    pub kind: ClientErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ClientError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ClientErrorKind::Network,
            message: message.into(),
            status: None,
        }
    }

    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ClientErrorKind::Status,
            message: message.into(),
            status: Some(code),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: ClientErrorKind::MalformedBody,
            message: message.into(),
            status: None,
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: ClientErrorKind::InvalidConfig,
            message: message.into(),
            status: None,
        }
    }

    /// HTTP status for `Status` errors.
    pub fn status_code(&self) -> Option<u16> {
        self.status
    }

    /// The fixed user-facing message. Causes are never distinguished in the UI.
    pub fn user_message(&self) -> &'static str {
        CASE_LOAD_ERROR_MESSAGE
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} ({}): {}", self.kind, code, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for ClientError {}
