//! # Find Queries
//!
//! The small query surface a collection actor understands: an optional owner
//! constraint, an optional id restriction (what an [`Access`] filter narrows reads to),
//! and the relationship expansion depth.

use crate::access::{Access, Filter};
use crate::entity::CollectionEntity;

/// Upper bound applied to any requested expansion depth.
pub const MAX_DEPTH: u8 = 10;

/// A query against one collection.
#[derive(Debug, Clone)]
pub struct FindQuery<T: CollectionEntity> {
    /// Match documents whose owner equals this identity.
    pub owned_by: Option<T::Owner>,
    /// Match documents whose id is in this list.
    pub id_in: Option<Vec<T::Id>>,
    /// How many levels of relationships to expand in the results.
    pub depth: u8,
}

impl<T: CollectionEntity> Default for FindQuery<T> {
    fn default() -> Self {
        Self {
            owned_by: None,
            id_in: None,
            depth: 0,
        }
    }
}

impl<T: CollectionEntity> FindQuery<T> {
    /// Matches every document, without expansion.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn owned_by(mut self, owner: T::Owner) -> Self {
        self.owned_by = Some(owner);
        self
    }

    pub fn id_in(mut self, ids: Vec<T::Id>) -> Self {
        self.id_in = Some(ids);
        self
    }

    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = depth.min(MAX_DEPTH);
        self
    }

    /// Narrows this query by an access decision.
    ///
    /// Returns `None` when access is denied outright, meaning there is nothing to query.
    pub fn restricted_by(self, access: &Access<T::Id>) -> Option<Self> {
        match access {
            Access::Denied => None,
            Access::Granted => Some(self),
            Access::Where(Filter::IdIn(ids)) => Some(self.id_in(ids.clone())),
        }
    }

    /// Whether a stored document satisfies the owner and id constraints.
    pub fn matches(&self, doc: &T) -> bool {
        if let Some(owner) = &self.owned_by {
            if doc.owner() != Some(owner) {
                return false;
            }
        }
        if let Some(ids) = &self.id_in {
            if !ids.contains(doc.id()) {
                return false;
            }
        }
        true
    }
}

/// The documents matched by a [`FindQuery`].
#[derive(Debug, Clone)]
pub struct FindResult<T> {
    pub docs: Vec<T>,
    pub total_docs: usize,
}

impl<T> FindResult<T> {
    pub fn new(docs: Vec<T>) -> Self {
        let total_docs = docs.len();
        Self { docs, total_docs }
    }
}

impl<T> From<Vec<T>> for FindResult<T> {
    fn from(docs: Vec<T>) -> Self {
        FindResult::new(docs)
    }
}
