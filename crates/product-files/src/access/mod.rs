//! # Access Rules
//!
//! Who may read and mutate product files.
//!
//! - [`read`] - [`yours_and_purchased`], the ownership/purchase read rule
//! - [`mutation`] - role checks for create, update and delete
//! - [`repository`] - the product and order queries the read rule depends on
//! - [`diagnostics`] - where the read rule reports degraded data

pub mod diagnostics;
pub mod error;
pub mod mutation;
pub mod read;
pub mod repository;

pub use diagnostics::*;
pub use error::*;
pub use mutation::*;
pub use read::*;
pub use repository::*;
