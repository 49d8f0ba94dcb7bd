//! # Access Decisions
//!
//! An access rule answers either with a plain yes/no or with a filter that the
//! collection applies to its reads. [`Access`] carries both shapes; [`Filter`] is the
//! filter expression.

use serde::Serialize;
use serde_json::{json, Value};

/// A filter expression restricting which documents are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<Id> {
    /// `{ "id": { "in": [...] } }`. Duplicates are allowed; an empty list matches nothing.
    IdIn(Vec<Id>),
}

impl<Id: PartialEq> Filter<Id> {
    pub fn matches(&self, id: &Id) -> bool {
        match self {
            Filter::IdIn(ids) => ids.contains(id),
        }
    }

    pub fn ids(&self) -> &[Id] {
        match self {
            Filter::IdIn(ids) => ids,
        }
    }
}

impl<Id: Serialize> Filter<Id> {
    /// Renders the filter in the host's `where` shape.
    pub fn to_json(&self) -> Value {
        match self {
            Filter::IdIn(ids) => json!({ "id": { "in": ids } }),
        }
    }
}

/// Outcome of an access rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access<Id> {
    /// Every document is visible.
    Granted,
    /// No document is visible.
    Denied,
    /// Only documents matching the filter are visible.
    Where(Filter<Id>),
}

impl<Id: PartialEq> Access<Id> {
    pub fn allows(&self, id: &Id) -> bool {
        match self {
            Access::Granted => true,
            Access::Denied => false,
            Access::Where(filter) => filter.matches(id),
        }
    }
}

impl<Id: Serialize> Access<Id> {
    /// `true`, `false`, or the filter's `where` object.
    pub fn to_json(&self) -> Value {
        match self {
            Access::Granted => Value::Bool(true),
            Access::Denied => Value::Bool(false),
            Access::Where(filter) => filter.to_json(),
        }
    }
}

impl<Id> From<bool> for Access<Id> {
    fn from(allowed: bool) -> Self {
        if allowed {
            Access::Granted
        } else {
            Access::Denied
        }
    }
}
