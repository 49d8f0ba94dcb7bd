//! # Generic Client
//!
//! The generic client for talking to a collection actor.

use crate::entity::CollectionEntity;
use crate::error::FrameworkError;
use crate::message::CollectionRequest;
use crate::query::{FindQuery, FindResult};
use tokio::sync::{mpsc, oneshot};

/// ## CollectionClient
///
/// A type-safe, async handle on a `CollectionActor<T>`. Each call sends one
/// `CollectionRequest<T>` over the actor's mpsc channel and awaits the reply on a
/// oneshot channel.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Generic** – works with any entity that implements `CollectionEntity`.
#[derive(Clone)]
pub struct CollectionClient<T: CollectionEntity> {
    sender: mpsc::Sender<CollectionRequest<T>>,
}

impl<T: CollectionEntity> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> CollectionRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(
        &self,
        params: T::Create,
        requester: Option<T::Owner>,
    ) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Create {
            params,
            requester,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: T::Id, depth: u8) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Get {
            id,
            depth,
            respond_to,
        })
        .await
    }

    pub async fn update(
        &self,
        id: T::Id,
        update: T::Update,
        requester: Option<T::Owner>,
    ) -> Result<T, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Update {
            id,
            update,
            requester,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| CollectionRequest::Delete { id, respond_to })
            .await
    }

    pub async fn find(&self, query: FindQuery<T>) -> Result<FindResult<T>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Find { query, respond_to })
            .await
    }
}
