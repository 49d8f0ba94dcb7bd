//! # Product Client
//!
//! High-level API for the `products` collection. Also serves as the
//! [`ProductRepository`] the read-access rule queries.
use crate::access::ProductRepository;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, UserId};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use collection_framework::{CollectionApi, CollectionClient, FindQuery, FrameworkError};
use tracing::{debug, instrument};

/// Client for interacting with the Product collection.
#[derive(Clone)]
pub struct ProductClient {
    inner: CollectionClient<Product>,
}

impl ProductClient {
    pub fn new(inner: CollectionClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        let requester = params.user;
        self.inner
            .create(params, Some(requester))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .update(id, update, None)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl CollectionApi<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &CollectionClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductClient {
    async fn find_by_owner(&self, user: &UserId, depth: u8) -> Result<Vec<Product>, ProductError> {
        self.find_docs(FindQuery::all().owned_by(*user).depth(depth))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductFileId;
    use collection_framework::mock::MockClient;
    use collection_framework::Relation;

    #[tokio::test]
    async fn test_find_by_owner_sends_owner_and_depth() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_find().return_ok(vec![Product::new(
            ProductId(1),
            UserId(4),
            "Poster",
            12.0,
        )
        .with_file(Relation::Id(ProductFileId(8)))]);

        let client = ProductClient::new(mock.client());
        let products = client.find_by_owner(&UserId(4), 0).await.unwrap();
        assert_eq!(products[0].file_id(), Some(ProductFileId(8)));

        let queries = mock.find_queries();
        assert_eq!(queries[0].owned_by, Some(UserId(4)));
        assert_eq!(queries[0].depth, 0);
        mock.verify();
    }

    #[tokio::test]
    async fn test_actor_failure_maps_to_product_error() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_find().return_err(FrameworkError::ActorClosed);

        let client = ProductClient::new(mock.client());
        let result = client.find_by_owner(&UserId(4), 0).await;
        assert!(matches!(result, Err(ProductError::ActorCommunicationError(_))));
    }
}
