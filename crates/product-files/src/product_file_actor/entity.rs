//! CollectionEntity implementation for [`ProductFile`].
//!
//! The injected context is the [`UploadConfig`]: creation checks the MIME type against
//! it and derives the storage path and URL from it.

use super::ProductFileError;
use crate::collection::{self, hooks::stamp_owner};
use crate::config::UploadConfig;
use crate::model::{ProductFile, ProductFileCreate, ProductFileId, ProductFileUpdate, UserId};
use async_trait::async_trait;
use collection_framework::CollectionEntity;

#[async_trait]
impl CollectionEntity for ProductFile {
    type Id = ProductFileId;
    type Owner = UserId;
    type Create = ProductFileCreate;
    type Update = ProductFileUpdate;
    type Context = UploadConfig;
    type Error = ProductFileError;

    const SLUG: &'static str = collection::SLUG;

    fn from_create_params(id: ProductFileId, params: ProductFileCreate) -> Result<Self, Self::Error> {
        let mut file = ProductFile::new(id, params.filename, params.mime_type, params.filesize);
        file.user = params.user;
        Ok(file)
    }

    fn id(&self) -> &ProductFileId {
        &self.id
    }

    fn owner(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    /// Stamps the owner, then enforces that the owner field is set.
    fn before_change(&mut self, requester: Option<&UserId>) -> Result<(), Self::Error> {
        *self = stamp_owner(self.clone(), requester);
        match self.user {
            Some(_) => Ok(()),
            None => Err(ProductFileError::MissingOwner),
        }
    }

    async fn on_create(&mut self, upload: &UploadConfig) -> Result<(), Self::Error> {
        if !upload.accepts(&self.mime_type) {
            return Err(ProductFileError::RejectedMimeType(self.mime_type.clone()));
        }
        self.path = upload.storage_path(&self.filename);
        self.url = upload.url_for(&self.filename);
        Ok(())
    }

    fn on_update(&mut self, update: ProductFileUpdate) -> Result<(), Self::Error> {
        // Overwritten by before_change right after.
        self.user = update.user;
        Ok(())
    }
}
