//! # Order Collection
//!
//! Purchases made by users. The context is a [`ProductClient`](crate::clients::ProductClient)
//! so line items can be expanded when orders are read with a depth.
//!
//! - [`entity`] - [`CollectionEntity`](collection_framework::CollectionEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use collection_framework::{CollectionActor, CollectionClient};

/// Creates a new Order actor and its client.
pub fn new() -> (CollectionActor<Order>, CollectionClient<Order>) {
    CollectionActor::new(32)
}
