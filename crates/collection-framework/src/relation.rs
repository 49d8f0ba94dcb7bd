//! # Relationship References
//!
//! A relationship field holds either the bare identifier of the related document or,
//! when the read asked for enough expansion depth, the document itself.

use crate::entity::CollectionEntity;

/// A reference to a document of type `T`, bare or expanded.
#[derive(Debug, Clone, PartialEq)]
pub enum Relation<T: CollectionEntity> {
    /// Only the identifier is known (expansion depth exhausted or target missing).
    Id(T::Id),
    /// The related document was resolved.
    Expanded(Box<T>),
}

impl<T: CollectionEntity> Relation<T> {
    /// Normalises either form to the identifier.
    pub fn id(&self) -> &T::Id {
        match self {
            Relation::Id(id) => id,
            Relation::Expanded(doc) => doc.id(),
        }
    }

    /// Returns the resolved document, if any.
    pub fn expanded(&self) -> Option<&T> {
        match self {
            Relation::Id(_) => None,
            Relation::Expanded(doc) => Some(doc),
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Relation::Expanded(_))
    }
}

impl<T: CollectionEntity> From<T> for Relation<T> {
    fn from(doc: T) -> Self {
        Relation::Expanded(Box::new(doc))
    }
}
