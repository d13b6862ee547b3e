use std::fmt;

/// Custom error type for Zendesk operations
#[derive(Debug)]
pub enum ZendeskError {
    /// HTTP transport failed before a response was received
    Request(reqwest::Error),
    /// API returned a non-2xx response
    Http { status: u16, body: String },
    /// JSON parsing error
    Json(String),
    /// Configuration error (credentials, company, base URL)
    Config(String),
    /// Failed to read or write a local file
    Io(String),
    /// Malformed CSV input
    Csv(String),
    /// An entity outlived the client it was fetched with
    ClientDropped,
    /// Interactive prompt failed
    Prompt(String),
    /// Comment HTML could not be queried
    Html(String),
}

impl ZendeskError {
    /// HTTP status code, if this error came from an API response
    pub fn status(&self) -> Option<u16> {
        match self {
            ZendeskError::Http { status, .. } => Some(*status),
            ZendeskError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for ZendeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZendeskError::Request(e) => write!(f, "HTTP request failed: {}", e),
            ZendeskError::Http { status, body } => {
                write!(f, "HTTP error (status {}): {}", status, body)
            }
            ZendeskError::Json(msg) => write!(f, "JSON error: {}", msg),
            ZendeskError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ZendeskError::Io(msg) => write!(f, "I/O error: {}", msg),
            ZendeskError::Csv(msg) => write!(f, "CSV error: {}", msg),
            ZendeskError::ClientDropped => {
                write!(f, "Zendesk client was dropped before this record was used")
            }
            ZendeskError::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
            ZendeskError::Html(msg) => write!(f, "HTML error: {}", msg),
        }
    }
}

impl std::error::Error for ZendeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZendeskError::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ZendeskError {
    fn from(err: reqwest::Error) -> Self {
        ZendeskError::Request(err)
    }
}

impl From<serde_json::Error> for ZendeskError {
    fn from(err: serde_json::Error) -> Self {
        ZendeskError::Json(err.to_string())
    }
}

impl From<std::io::Error> for ZendeskError {
    fn from(err: std::io::Error) -> Self {
        ZendeskError::Io(err.to_string())
    }
}

impl From<dialoguer::Error> for ZendeskError {
    fn from(err: dialoguer::Error) -> Self {
        ZendeskError::Prompt(err.to_string())
    }
}

/// Result type alias for Zendesk operations
pub type Result<T> = std::result::Result<T, ZendeskError>;
