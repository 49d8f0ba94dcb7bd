//! # System Lifecycle
//!
//! Starts the collections, wires their expansion dependencies, and shuts them down.
//!
//! Contexts are injected when each actor starts:
//!
//! | Collection | Context | Used for |
//! |------------|---------|----------|
//! | `product_files` | [`UploadConfig`](crate::config::UploadConfig) | MIME checks, storage paths |
//! | `products` | [`ProductFileClient`](crate::clients::ProductFileClient) | expanding file references |
//! | `orders` | [`ProductClient`](crate::clients::ProductClient) | expanding line items |
//!
//! The graph is acyclic (orders → products → files), so dropping the clients shuts every
//! actor down: files stop once products have stopped, products once orders have.

pub mod store_system;

pub use collection_framework::tracing::setup_tracing;
pub use store_system::*;
