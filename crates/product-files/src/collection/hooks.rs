//! Lifecycle callbacks registered on the `product_files` collection.

use crate::model::{ProductFile, UserId};
use tracing::debug;

/// Stamps the owner of a product file with the requesting identity.
///
/// Runs on every create and update. Any owner supplied by the caller is discarded; an
/// anonymous request leaves the owner empty, which the required-field check rejects.
pub fn stamp_owner(mut record: ProductFile, identity: Option<&UserId>) -> ProductFile {
    if record.user.as_ref() != identity {
        debug!(file = %record.id, supplied = ?record.user, requester = ?identity, "Overriding owner");
    }
    record.user = identity.copied();
    record
}
