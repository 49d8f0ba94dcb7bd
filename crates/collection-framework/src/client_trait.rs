//! # CollectionApi Trait
//!
//! Common read operations for domain-specific clients, provided on top of a generic
//! `CollectionClient`.
use crate::{CollectionClient, CollectionEntity, FindQuery, FrameworkError};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard read operations.
///
/// Implementors only supply `inner()` and `map_error()`; `get` and `find_docs`
/// come for free with the domain error type.
///
/// ```rust,ignore
/// #[async_trait]
/// impl CollectionApi<Product> for ProductClient {
///     type Error = ProductError;
///
///     fn inner(&self) -> &CollectionClient<Product> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         ProductError::ActorCommunicationError(e.to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait CollectionApi<T: CollectionEntity>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic CollectionClient.
    fn inner(&self) -> &CollectionClient<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a document by ID, expanded to `depth`.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id, depth: u8) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id, depth).await.map_err(Self::map_error)
    }

    /// Run a find query and return the matched documents.
    #[tracing::instrument(skip(self))]
    async fn find_docs(&self, query: FindQuery<T>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .find(query)
            .await
            .map(|found| found.docs)
            .map_err(Self::map_error)
    }
}
