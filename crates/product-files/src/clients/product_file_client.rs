//! # ProductFile Client
//!
//! High-level API for the `product_files` collection with its access rules applied:
//! uploads need an authenticated user, update and delete are admin-only, and reads are
//! narrowed by [`yours_and_purchased`].
//!
//! The [`CollectionApi`] methods (`get`, `find_docs`) are the unguarded internal handle
//! used for relationship expansion.
use crate::access::{self, yours_and_purchased, AccessContext, AccessError};
use crate::model::{ProductFile, ProductFileCreate, ProductFileId, ProductFileUpdate, User};
use crate::product_file_actor::ProductFileError;
use async_trait::async_trait;
use collection_framework::{Access, CollectionApi, CollectionClient, FindQuery, FrameworkError};
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the ProductFile collection.
#[derive(Clone)]
pub struct ProductFileClient {
    inner: CollectionClient<ProductFile>,
}

impl ProductFileClient {
    pub fn new(inner: CollectionClient<ProductFile>) -> Self {
        Self { inner }
    }

    /// Uploads a file owned by `identity`.
    #[instrument(skip(self, identity), fields(user = ?identity.map(|u| u.id)))]
    pub async fn create_file(
        &self,
        params: ProductFileCreate,
        identity: Option<&User>,
    ) -> Result<ProductFileId, ProductFileError> {
        if !access::authenticated(identity) {
            warn!("Anonymous upload rejected");
            return Err(ProductFileError::Forbidden("create".to_string()));
        }
        debug!("Sending request");
        self.inner
            .create(params, identity.map(|user| user.id))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, identity), fields(user = ?identity.map(|u| u.id)))]
    pub async fn update_file(
        &self,
        id: ProductFileId,
        update: ProductFileUpdate,
        identity: Option<&User>,
    ) -> Result<ProductFile, ProductFileError> {
        if !access::admin_only(identity) {
            warn!(%id, "Update rejected");
            return Err(ProductFileError::Forbidden("update".to_string()));
        }
        self.inner
            .update(id, update, identity.map(|user| user.id))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, identity), fields(user = ?identity.map(|u| u.id)))]
    pub async fn delete_file(
        &self,
        id: ProductFileId,
        identity: Option<&User>,
    ) -> Result<(), ProductFileError> {
        if !access::admin_only(identity) {
            warn!(%id, "Delete rejected");
            return Err(ProductFileError::Forbidden("delete".to_string()));
        }
        self.inner.delete(id).await.map_err(Self::map_error)
    }

    /// Every file the context's identity may read.
    ///
    /// A denied identity gets [`AccessError::Forbidden`]; an ordinary user with nothing
    /// owned or purchased gets an empty list.
    #[instrument(skip(self, ctx), fields(user = ?ctx.identity.map(|u| u.id)))]
    pub async fn find_readable(
        &self,
        ctx: &AccessContext<'_>,
    ) -> Result<Vec<ProductFile>, AccessError> {
        let access = yours_and_purchased(ctx).await?;
        let query = FindQuery::all()
            .restricted_by(&access)
            .ok_or_else(|| AccessError::Forbidden("read".to_string()))?;
        let files = self.find_docs(query).await?;
        info!(count = files.len(), "Readable files");
        Ok(files)
    }

    /// A single file, if it exists and the context's identity may read it.
    #[instrument(skip(self, ctx), fields(user = ?ctx.identity.map(|u| u.id)))]
    pub async fn read_file(
        &self,
        id: ProductFileId,
        ctx: &AccessContext<'_>,
    ) -> Result<Option<ProductFile>, AccessError> {
        let access = yours_and_purchased(ctx).await?;
        if access == Access::Denied {
            return Err(AccessError::Forbidden("read".to_string()));
        }
        if !access.allows(&id) {
            debug!(%id, "Filtered out");
            return Ok(None);
        }
        Ok(CollectionApi::get(self, id, 0).await?)
    }
}

#[async_trait]
impl CollectionApi<ProductFile> for ProductFileClient {
    type Error = ProductFileError;

    fn inner(&self) -> &CollectionClient<ProductFile> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductFileError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductFileError>() {
                Ok(entity) => *entity,
                Err(other) => ProductFileError::ActorCommunicationError(other.to_string()),
            },
            other => ProductFileError::ActorCommunicationError(other.to_string()),
        }
    }
}
