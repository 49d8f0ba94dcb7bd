use crate::model::UserId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for ProductFiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductFileId(pub u32);

impl From<u32> for ProductFileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductFileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "file_{}", self.0)
    }
}

/// An uploaded product asset.
///
/// `user` is system-set: the `before_change` hook overwrites it with the requester on
/// every write, see [`crate::collection::hooks::stamp_owner`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFile {
    pub id: ProductFileId,
    pub user: Option<UserId>,
    pub filename: String,
    pub mime_type: String,
    pub filesize: u64,
    /// Location under the upload directory, set on create.
    pub path: String,
    /// URL the file is served from, set on create.
    pub url: String,
}

impl ProductFile {
    pub fn new(
        id: ProductFileId,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        filesize: u64,
    ) -> Self {
        Self {
            id,
            user: None,
            filename: filename.into(),
            mime_type: mime_type.into(),
            filesize,
            path: String::new(),
            url: String::new(),
        }
    }
}

/// Payload for uploading a file.
///
/// `user` is accepted for wire compatibility but always replaced by the requester.
#[derive(Debug, Clone)]
pub struct ProductFileCreate {
    pub user: Option<UserId>,
    pub filename: String,
    pub mime_type: String,
    pub filesize: u64,
}

/// Payload for updating a file document.
///
/// The stored upload itself is immutable; an update re-runs the owner stamp, so the
/// requester becomes the owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFileUpdate {
    pub user: Option<UserId>,
}
