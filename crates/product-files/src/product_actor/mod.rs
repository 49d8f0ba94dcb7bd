//! # Product Collection
//!
//! Products owned by sellers, each optionally referencing the [`ProductFile`](crate::model::ProductFile)
//! a buyer receives.
//!
//! - [`entity`] - [`CollectionEntity`](collection_framework::CollectionEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//!
//! The collection's context is a [`ProductFileClient`](crate::clients::ProductFileClient),
//! used to expand file references:
//!
//! ```rust,ignore
//! let (actor, generic_client) = product_actor::new();
//! tokio::spawn(actor.run(file_client.clone()));
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use collection_framework::{CollectionActor, CollectionClient};

/// Creates a new Product actor and its client.
pub fn new() -> (CollectionActor<Product>, CollectionClient<Product>) {
    CollectionActor::new(32)
}
