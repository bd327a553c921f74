//! Progress reporting seam.

use atelier_core::GenerationKind;
use tracing::info;

/// Receives human-readable status lines while a generation runs.
pub trait ProgressReporter: Send + Sync {
    /// Reports the current status of a generation.
    fn report(&self, kind: GenerationKind, status: &str);
}

impl<F> ProgressReporter for F
where
    F: Fn(GenerationKind, &str) + Send + Sync,
{
    fn report(&self, kind: GenerationKind, status: &str) {
        self(kind, status)
    }
}

/// Writes status lines to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn report(&self, kind: GenerationKind, status: &str) {
        info!(kind = %kind, status, "Generation progress");
    }
}
