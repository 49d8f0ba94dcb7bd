//! # Collection Framework
//!
//! Building blocks for serving document collections from actors: each collection runs
//! in its own Tokio task, owns its documents exclusively, and is reached through a
//! cloneable, type-safe client.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`CollectionEntity`]) - document types and their lifecycle hooks
//! 2. **Runtime Layer** ([`CollectionActor`]) - request processing and the document store
//! 3. **Interface Layer** ([`CollectionClient`], [`CollectionApi`]) - typed requests
//!
//! On top of that sit the pieces an access rule needs:
//!
//! - [`FindQuery`] / [`FindResult`] - owner and id constraints plus expansion depth
//! - [`Relation`] - a relationship field that is either a bare id or the expanded document
//! - [`Access`] / [`Filter`] - the yes/no/filter outcome an access rule returns
//!
//! ## Context Injection
//!
//! Dependencies are injected when the actor is started, not when it is built:
//!
//! ```rust,ignore
//! let (file_actor, file_client) = CollectionActor::<ProductFile>::new(32);
//! let (product_actor, product_client) = CollectionActor::<Product>::new(32);
//!
//! tokio::spawn(file_actor.run(upload_config));
//! // Products expand their file relation through the file client.
//! tokio::spawn(product_actor.run(ProductFileClient::new(file_client.clone())));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each collection runs in its own Tokio task
//! - Requests are processed **sequentially** within a collection (no locks)
//! - Expansion awaits other collections, so the dependency graph must be acyclic
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `CollectionClient` from queued expectations, for
//! unit tests that should not spawn actors.

pub mod access;
pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod query;
pub mod relation;
pub mod tracing;

pub use access::{Access, Filter};
pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use client_trait::CollectionApi;
pub use entity::CollectionEntity;
pub use error::FrameworkError;
pub use message::{CollectionRequest, Response};
pub use query::{FindQuery, FindResult, MAX_DEPTH};
pub use relation::Relation;
