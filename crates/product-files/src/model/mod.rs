//! Pure data structures; the collection types implement
//! [`CollectionEntity`](collection_framework::CollectionEntity).

pub mod order;
pub mod product;
pub mod product_file;
pub mod user;

pub use order::*;
pub use product::*;
pub use product_file::*;
pub use user::*;
