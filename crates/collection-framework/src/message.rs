//! # Collection Messages
//!
//! Request types sent from a [`CollectionClient`](crate::CollectionClient) to its
//! [`CollectionActor`](crate::CollectionActor).
//!
//! The variants map onto the operations a document collection offers: `Create`,
//! `Get`, `Update`, `Delete`, plus `Find` for owner/id queries. Writes carry the
//! requesting identity so the entity's `before_change` hook can see who is writing;
//! reads carry the expansion depth.

use crate::entity::CollectionEntity;
use crate::error::FrameworkError;
use crate::query::{FindQuery, FindResult};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum CollectionRequest<T: CollectionEntity> {
    Create {
        params: T::Create,
        requester: Option<T::Owner>,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        depth: u8,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        requester: Option<T::Owner>,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Find {
        query: FindQuery<T>,
        respond_to: Response<FindResult<T>>,
    },
}
