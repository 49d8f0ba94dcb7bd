use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::product_file_actor::ProductFileError;
use thiserror::Error;

/// Errors raised while evaluating or applying an access rule.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccessError {
    /// The rule denied the operation outright.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Product query failed: {0}")]
    Products(#[from] ProductError),

    #[error("Order query failed: {0}")]
    Orders(#[from] OrderError),

    #[error("Product file query failed: {0}")]
    Files(#[from] ProductFileError),
}
