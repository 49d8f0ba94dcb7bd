//! Error types for the ProductFile collection.

use thiserror::Error;

/// Errors that can occur during product file operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductFileError {
    /// The requested file was not found.
    #[error("Product file not found: {0}")]
    NotFound(String),

    /// The required owner field is empty (anonymous write).
    #[error("Product file owner is required")]
    MissingOwner,

    /// No configured pattern accepts the upload's MIME type.
    #[error("MIME type not accepted: {0}")]
    RejectedMimeType(String),

    /// The requester may not perform this operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An error occurred while communicating with the collection actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
