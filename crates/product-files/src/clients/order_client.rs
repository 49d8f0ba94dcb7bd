//! # Order Client
//!
//! High-level API for the `orders` collection. Also serves as the
//! [`OrderRepository`] the read-access rule queries.
use crate::access::OrderRepository;
use crate::model::{Order, OrderCreate, OrderId, UserId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use collection_framework::{CollectionApi, CollectionClient, FindQuery, FrameworkError};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order collection.
#[derive(Clone)]
pub struct OrderClient {
    inner: CollectionClient<Order>,
}

impl OrderClient {
    pub fn new(inner: CollectionClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("create_order called");
        let requester = params.user;
        let id = self
            .inner
            .create(params, Some(requester))
            .await
            .map_err(Self::map_error)?;
        info!(%id, user = %requester, "Order placed");
        Ok(id)
    }
}

#[async_trait]
impl CollectionApi<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &CollectionClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl OrderRepository for OrderClient {
    async fn find_by_purchaser(&self, user: &UserId, depth: u8) -> Result<Vec<Order>, OrderError> {
        self.find_docs(FindQuery::all().owned_by(*user).depth(depth))
            .await
    }
}
