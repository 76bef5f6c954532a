/// Unified error types for the WebDAV blob store
use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// The final object PUT was rejected by the server
    #[error("upload of {uri} failed, the server response was {status}: {body}")]
    Upload {
        uri: String,
        status: StatusCode,
        body: String,
    },

    /// An ancestor-collection MKCOL was rejected by the server
    #[error("creation of collection {uri} failed, the server response was {status}: {body}")]
    CollectionCreate {
        uri: String,
        status: StatusCode,
        body: String,
    },

    /// Transport-level failure (DNS, refused connection, timeout)
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration or construction input
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
