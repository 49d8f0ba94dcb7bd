//! CollectionEntity implementation for [`Product`].
//!
//! Products read at depth 1 or more have their file reference expanded through the
//! injected [`ProductFileClient`]. A reference to a file that no longer exists stays a
//! bare id.

use super::ProductError;
use crate::clients::ProductFileClient;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, UserId};
use async_trait::async_trait;
use collection_framework::{CollectionApi, CollectionEntity, Relation};

#[async_trait]
impl CollectionEntity for Product {
    type Id = ProductId;
    type Owner = UserId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Context = ProductFileClient;
    type Error = ProductError;

    const SLUG: &'static str = "products";

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        let mut product = Product::new(id, params.user, params.name, params.price);
        product.product_files = params.product_file.map(Relation::Id);
        Ok(product)
    }

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn owner(&self) -> Option<&UserId> {
        Some(&self.user)
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `name`: Product name
    /// - `price`: Product price
    /// - `product_file`: Replaces the file reference
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(file) = update.product_file {
            self.product_files = Some(Relation::Id(file));
        }
        Ok(())
    }

    async fn populate(&mut self, depth: u8, files: &ProductFileClient) -> Result<(), Self::Error> {
        if depth == 0 {
            return Ok(());
        }
        let Some(Relation::Id(file_id)) = self.product_files else {
            return Ok(());
        };
        let found = files
            .get(file_id, depth - 1)
            .await
            .map_err(|e| ProductError::FileLookup(e.to_string()))?;
        if let Some(file) = found {
            self.product_files = Some(file.into());
        }
        Ok(())
    }
}
