//! # Generic Collection Server
//!
//! `CollectionActor` owns the documents of one collection and processes requests
//! sequentially, so the store needs no locking.

use crate::client::CollectionClient;
use crate::entity::CollectionEntity;
use crate::error::FrameworkError;
use crate::message::CollectionRequest;
use crate::query::{FindResult, MAX_DEPTH};
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages one collection of documents.
///
/// # Usage Pattern
///
/// 1.  **Create**: `CollectionActor::new()` returns the actor (server) and client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ## Operations
///
/// * **Create**: allocate the next id, build the document, run `before_change` with the
///   requester and then `on_create` with the context, store it.
/// * **Get**: clone the stored document and `populate` it to the requested depth.
/// * **Update**: apply `on_update` to a copy, run `before_change`, store the copy. A
///   failing hook leaves the stored document untouched.
/// * **Delete**: remove the document.
/// * **Find**: clone every document the query matches, in id order, and `populate` each.
///
/// Stored documents always hold bare relationship ids; expansion only ever happens on
/// the copies handed back to callers.
pub struct CollectionActor<T: CollectionEntity> {
    receiver: mpsc::Receiver<CollectionRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: CollectionEntity> CollectionActor<T> {
    /// Creates a new `CollectionActor` and its associated `CollectionClient`.
    ///
    /// `buffer_size` is the capacity of the mpsc channel; clients wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        (actor, CollectionClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = T::SLUG;
        info!(entity_type, "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::Create {
                    params,
                    requester,
                    respond_to,
                } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, requester.as_ref(), &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CollectionRequest::Get {
                    id,
                    depth,
                    respond_to,
                } => {
                    let result = match self.store.get(&id).cloned() {
                        Some(mut doc) => match populate(&mut doc, depth, &context).await {
                            Ok(()) => Ok(Some(doc)),
                            Err(e) => Err(e),
                        },
                        None => Ok(None),
                    };
                    debug!(entity_type, %id, depth, found = matches!(result, Ok(Some(_))), "Get");
                    let _ = respond_to.send(result);
                }
                CollectionRequest::Update {
                    id,
                    update,
                    requester,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, requester.as_ref());
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CollectionRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if self.store.remove(&id).is_some() {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                CollectionRequest::Find { query, respond_to } => {
                    debug!(entity_type, ?query, "Find");
                    let mut docs: Vec<T> = self
                        .store
                        .values()
                        .filter(|doc| query.matches(doc))
                        .cloned()
                        .collect();
                    let mut result = Ok(());
                    for doc in docs.iter_mut() {
                        result = populate(doc, query.depth, &context).await;
                        if result.is_err() {
                            break;
                        }
                    }
                    let result = result.map(|_| FindResult::new(docs));
                    match &result {
                        Ok(found) => debug!(entity_type, total = found.total_docs, "Find ok"),
                        Err(e) => warn!(entity_type, error = %e, "Find failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        requester: Option<&T::Owner>,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let id = T::Id::from(self.next_id);
        let mut doc = T::from_create_params(id.clone(), params).map_err(entity_error)?;
        doc.before_change(requester).map_err(entity_error)?;
        doc.on_create(context).await.map_err(entity_error)?;
        self.next_id += 1;
        self.store.insert(id.clone(), doc);
        Ok(id)
    }

    fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        requester: Option<&T::Owner>,
    ) -> Result<T, FrameworkError> {
        let stored = self
            .store
            .get_mut(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let mut doc = stored.clone();
        doc.on_update(update).map_err(entity_error)?;
        doc.before_change(requester).map_err(entity_error)?;
        *stored = doc.clone();
        Ok(doc)
    }
}

async fn populate<T: CollectionEntity>(
    doc: &mut T,
    depth: u8,
    context: &T::Context,
) -> Result<(), FrameworkError> {
    let depth = depth.min(MAX_DEPTH);
    if depth == 0 {
        return Ok(());
    }
    doc.populate(depth, context).await.map_err(entity_error)
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FindQuery;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        author: Option<String>,
        text: String,
    }

    #[derive(Debug)]
    struct NoteCreate {
        text: String,
    }

    #[derive(Debug)]
    struct NoteUpdate {
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Note error: {0}")]
    struct NoteError(String);

    #[async_trait]
    impl CollectionEntity for Note {
        type Id = u32;
        type Owner = String;
        type Create = NoteCreate;
        type Update = NoteUpdate;
        type Context = ();
        type Error = NoteError;

        const SLUG: &'static str = "notes";

        fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                author: None,
                text: params.text,
            })
        }

        fn id(&self) -> &u32 {
            &self.id
        }

        fn owner(&self) -> Option<&String> {
            self.author.as_ref()
        }

        fn before_change(&mut self, requester: Option<&String>) -> Result<(), Self::Error> {
            self.author = Some(
                requester
                    .cloned()
                    .ok_or_else(|| NoteError("anonymous".into()))?,
            );
            Ok(())
        }

        fn on_update(&mut self, update: NoteUpdate) -> Result<(), Self::Error> {
            self.text = update.text;
            Ok(())
        }
    }

    fn create(text: &str) -> NoteCreate {
        NoteCreate { text: text.into() }
    }

    #[tokio::test]
    async fn test_create_runs_before_change_with_requester() {
        let (actor, client) = CollectionActor::<Note>::new(10);
        tokio::spawn(actor.run(()));

        let id = client.create(create("hello"), Some("ann".into())).await.unwrap();
        let note = client.get(id, 0).await.unwrap().unwrap();
        assert_eq!(note.author.as_deref(), Some("ann"));

        let rejected = client.create(create("anon"), None).await;
        assert!(matches!(rejected, Err(FrameworkError::EntityError(_))));
    }

    #[tokio::test]
    async fn test_failed_update_keeps_stored_document() {
        let (actor, client) = CollectionActor::<Note>::new(10);
        tokio::spawn(actor.run(()));

        let id = client.create(create("v1"), Some("ann".into())).await.unwrap();
        let rejected = client
            .update(id, NoteUpdate { text: "v2".into() }, None)
            .await;
        assert!(rejected.is_err());

        let note = client.get(id, 0).await.unwrap().unwrap();
        assert_eq!(note.text, "v1");
    }

    #[tokio::test]
    async fn test_find_filters_by_owner_and_ids() {
        let (actor, client) = CollectionActor::<Note>::new(10);
        tokio::spawn(actor.run(()));

        let a1 = client.create(create("a1"), Some("ann".into())).await.unwrap();
        let _b1 = client.create(create("b1"), Some("bob".into())).await.unwrap();
        let a2 = client.create(create("a2"), Some("ann".into())).await.unwrap();

        let by_ann = client
            .find(FindQuery::all().owned_by("ann".to_string()))
            .await
            .unwrap();
        let ids: Vec<u32> = by_ann.docs.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a1, a2]);
        assert_eq!(by_ann.total_docs, 2);

        let by_id = client.find(FindQuery::all().id_in(vec![a2])).await.unwrap();
        assert_eq!(by_id.docs.len(), 1);
        assert_eq!(by_id.docs[0].text, "a2");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (actor, client) = CollectionActor::<Note>::new(10);
        tokio::spawn(actor.run(()));

        assert!(matches!(
            client.delete(99).await,
            Err(FrameworkError::NotFound(_))
        ));
    }
}
