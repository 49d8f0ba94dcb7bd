use crate::model::{OrderId, ProductId};
use std::fmt::Display;
use std::sync::{Mutex, PoisonError};
use tracing::error;

/// Degraded data noticed while evaluating an access rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An order's line item came back as a bare product id, so its file is unknown.
    InsufficientDepth {
        order: OrderId,
        product: ProductId,
        depth: u8,
    },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::InsufficientDepth {
                order,
                product,
                depth,
            } => write!(
                f,
                "Search depth {} not sufficient to find purchased file IDs ({} in {})",
                depth, product, order
            ),
        }
    }
}

/// Sink for [`Diagnostic`]s.
pub trait Diagnostics: Send + Sync {
    fn record(&self, diagnostic: Diagnostic);
}

/// Reports diagnostics as error-level tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn record(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::InsufficientDepth {
                order,
                product,
                depth,
            } => error!(%order, %product, depth, "{}", diagnostic),
        }
    }
}

/// Keeps every diagnostic in memory, for tests and audits.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn record(&self, diagnostic: Diagnostic) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    fn insufficient(order: u32) -> Diagnostic {
        Diagnostic::InsufficientDepth {
            order: OrderId(order),
            product: ProductId(7),
            depth: 2,
        }
    }

    #[test]
    fn test_display_names_order_and_product() {
        assert_eq!(
            insufficient(3).to_string(),
            "Search depth 2 not sufficient to find purchased file IDs (product_7 in order_3)"
        );
    }

    #[test]
    fn test_recording_survives_poisoned_lock() {
        let diagnostics = RecordingDiagnostics::new();
        diagnostics.record(insufficient(1));

        let poisoned = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = diagnostics.entries.lock().unwrap();
            panic!("poison the lock");
        }));
        assert!(poisoned.is_err());
        assert!(diagnostics.entries.is_poisoned());

        diagnostics.record(insufficient(2));
        assert_eq!(diagnostics.entries(), vec![insufficient(1), insufficient(2)]);
    }
}
