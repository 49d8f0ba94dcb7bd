//! # Tracing Setup
//!
//! Structured logging for every collection actor, client and access rule.
//!
//! Actors log lifecycle and per-request events with an `entity_type` field holding the
//! collection slug; domain clients add `#[instrument]` spans around each call.
//!
//! ```bash
//! RUST_LOG=info cargo run                    # Created/Updated/Deleted events
//! RUST_LOG=debug cargo run                   # Full payloads and queries
//! RUST_LOG=product_files=debug cargo run     # Access decisions only
//! ```

/// Initializes the tracing subscriber, filtered by the `RUST_LOG` environment variable.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
