//! # Product Files
//!
//! Access control and upload configuration for the `product_files` collection of a
//! digital-goods store. Sellers upload the files their products deliver; buyers may
//! read a file once they have ordered a product that references it.
//!
//! ## Modules
//!
//! - [`access`] - the read rule [`yours_and_purchased`](access::yours_and_purchased),
//!   role checks, the repository traits it queries and its diagnostic sink
//! - [`collection`] - the `product_files` collection: fields, admin visibility, hooks
//! - [`config`] - [`UploadConfig`](config::UploadConfig): storage directory, URL, MIME types
//! - [`model`] - [`User`](model::User), [`Product`](model::Product), [`Order`](model::Order),
//!   [`ProductFile`](model::ProductFile)
//! - [`clients`] - typed clients for each collection, with access rules applied
//! - [`lifecycle`] - [`StoreSystem`](lifecycle::StoreSystem), which runs the collections
//! - [`product_actor`], [`order_actor`], [`product_file_actor`] - the collection entities
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -p product-files
//! ```

pub mod access;
pub mod clients;
pub mod collection;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod product_file_actor;
