//! # CollectionEntity Trait
//!
//! The `CollectionEntity` trait is the contract every document type (Product, Order,
//! ProductFile, …) implements to be served by the generic [`CollectionActor`](crate::CollectionActor).
//! It fixes the associated types for identifiers, owners, DTOs, context and errors, and
//! exposes the lifecycle callbacks the actor drives:
//!
//! - [`CollectionEntity::before_change`] runs on every create and update, with the
//!   requesting identity.
//! - [`CollectionEntity::on_create`] runs once, after `before_change`, with the injected
//!   context.
//! - [`CollectionEntity::populate`] resolves relationship references for reads that ask
//!   for an expansion depth.
//!
//! Only `from_create_params`, `id`, `owner` and `on_update` are required; the rest default
//! to doing nothing.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any document type must implement to be managed by `CollectionActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await other collections. The `Context` type
/// is injected into `on_create` and `populate` when the actor is started with `run()`,
/// which lets a collection depend on clients of collections created after it.
#[async_trait]
pub trait CollectionEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Identity type that owns documents and makes requests (usually a user id).
    type Owner: PartialEq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Collection slug, used in logs and configuration.
    const SLUG: &'static str;

    /// Construct the full entity from the ID and payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    fn id(&self) -> &Self::Id;

    /// The identity this document belongs to, if it has one.
    fn owner(&self) -> Option<&Self::Owner>;

    /// Called on every create and update, before the document is stored.
    ///
    /// `requester` is the identity making the request, or `None` when anonymous.
    fn before_change(&mut self, _requester: Option<&Self::Owner>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once after `before_change` on create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Resolves relationship references up to `depth` levels.
    ///
    /// Called on a clone of the stored document; the stored copy always keeps bare ids.
    async fn populate(&mut self, _depth: u8, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
