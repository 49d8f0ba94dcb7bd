//! # Framework Errors
//!
//! Error types shared by every collection actor and client.

/// Errors that can occur within the collection runtime itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Collection actor closed")]
    ActorClosed,
    #[error("Collection actor dropped response channel")]
    ActorDropped,
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
