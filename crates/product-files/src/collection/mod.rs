//! # The `product_files` Collection
//!
//! Declarative configuration of the upload collection: its fields, its upload
//! settings, who may see it in the admin, and which access rule guards each operation.
//!
//! | Operation | Rule |
//! |-----------|------|
//! | read | [`yours_and_purchased`](crate::access::yours_and_purchased) |
//! | create | [`authenticated`](crate::access::authenticated) |
//! | update | [`admin_only`](crate::access::admin_only) |
//! | delete | [`admin_only`](crate::access::admin_only) |
//!
//! The owner field is stamped by [`hooks::stamp_owner`] in the collection's
//! `before_change` hook.

pub mod hooks;

use crate::access;
use crate::config::UploadConfig;
use crate::model::User;

pub const SLUG: &str = "product_files";
pub const OWNER_FIELD: &str = "user";

/// Kind of a collection field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Reference to documents of another collection.
    Relationship {
        relation_to: &'static str,
        has_many: bool,
    },
}

/// Schema of one field stored on every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Never shown in the admin edit form; the value is always system-set.
    pub hidden: bool,
}

/// The configured `product_files` collection.
#[derive(Debug, Clone)]
pub struct ProductFilesCollection {
    pub slug: &'static str,
    pub fields: Vec<FieldSchema>,
    pub upload: UploadConfig,
}

impl ProductFilesCollection {
    pub fn new(upload: UploadConfig) -> Self {
        Self {
            slug: SLUG,
            fields: vec![FieldSchema {
                name: OWNER_FIELD,
                kind: FieldKind::Relationship {
                    relation_to: "users",
                    has_many: false,
                },
                required: true,
                hidden: true,
            }],
            upload,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Whether the collection is left out of the admin navigation for `identity`.
    pub fn hidden_in_admin(&self, identity: Option<&User>) -> bool {
        !access::admin_only(identity)
    }

    /// Fields an admin edit form may show.
    pub fn editable_fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter().filter(|field| !field.hidden)
    }
}

impl Default for ProductFilesCollection {
    fn default() -> Self {
        Self::new(UploadConfig::default())
    }
}
