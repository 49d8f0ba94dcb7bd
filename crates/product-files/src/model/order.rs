//! Completed purchases.
//!
//! Line items are [`Relation`]s to products: bare ids at depth 0, expanded products
//! (whose own file reference is expanded too) at depth 2.

use crate::model::{Product, ProductId, UserId};
use collection_framework::Relation;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// The purchasing user.
    pub user: UserId,
    pub products: Vec<Relation<Product>>,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the collection actor)
    /// * `user` - ID of the purchasing user
    /// * `products` - Line items, bare or expanded
    pub fn new(id: OrderId, user: UserId, products: Vec<Relation<Product>>) -> Self {
        Self { id, user, products }
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user: UserId,
    pub products: Vec<ProductId>,
}

/// Payload for updating an order's line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub products: Option<Vec<ProductId>>,
}
