//! Products listed by sellers.
//!
//! # Collection Framework
//! [`Product`] implements the [`CollectionEntity`](collection_framework::CollectionEntity)
//! trait, see [`crate::product_actor`]. Its file reference is a [`Relation`]: a bare
//! [`ProductFileId`] when read at depth 0, the [`ProductFile`] itself when expanded.

use crate::model::{ProductFile, ProductFileId, UserId};
use collection_framework::Relation;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    /// The seller who owns the product.
    pub user: UserId,
    pub name: String,
    pub price: f64,
    pub product_files: Option<Relation<ProductFile>>,
}

impl Product {
    /// Creates a new Product without a file.
    pub fn new(id: ProductId, user: UserId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            user,
            name: name.into(),
            price,
            product_files: None,
        }
    }

    /// Attaches a file reference, bare or expanded.
    pub fn with_file(mut self, file: impl Into<Relation<ProductFile>>) -> Self {
        self.product_files = Some(file.into());
        self
    }

    /// The id of the attached file, whichever form the reference has.
    pub fn file_id(&self) -> Option<ProductFileId> {
        self.product_files.as_ref().map(|file| *file.id())
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub user: UserId,
    pub name: String,
    pub price: f64,
    pub product_file: Option<ProductFileId>,
}

/// Payload for updating an existing product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub product_file: Option<ProductFileId>,
}
