//! Read-only queries the read rule issues. [`ProductClient`](crate::clients::ProductClient)
//! and [`OrderClient`](crate::clients::OrderClient) implement them against the running
//! collections; tests can implement them over fixed data.

use crate::model::{Order, Product, UserId};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products owned by `user`, expanded to `depth`.
    async fn find_by_owner(&self, user: &UserId, depth: u8) -> Result<Vec<Product>, ProductError>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Orders placed by `user`, expanded to `depth`.
    async fn find_by_purchaser(&self, user: &UserId, depth: u8) -> Result<Vec<Order>, OrderError>;
}
