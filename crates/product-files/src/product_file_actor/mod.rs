//! # ProductFile Collection
//!
//! Uploaded product assets. Every write is stamped with the requesting user, uploads
//! are checked against the configured MIME patterns, and reads go through the
//! [`yours_and_purchased`](crate::access::yours_and_purchased) rule in
//! [`ProductFileClient`](crate::clients::ProductFileClient).
//!
//! - [`entity`] - [`CollectionEntity`](collection_framework::CollectionEntity) implementation
//! - [`error`] - [`ProductFileError`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::ProductFile;
use collection_framework::{CollectionActor, CollectionClient};

/// Creates a new ProductFile actor and its client.
pub fn new() -> (CollectionActor<ProductFile>, CollectionClient<ProductFile>) {
    CollectionActor::new(32)
}
