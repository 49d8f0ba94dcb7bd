//! Domain clients wrapping the generic [`CollectionClient`](collection_framework::CollectionClient).

pub mod order_client;
pub mod product_client;
pub mod product_file_client;

pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use product_file_client::ProductFileClient;
