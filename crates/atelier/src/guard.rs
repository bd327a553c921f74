//! One-in-flight-per-kind admission.

use atelier_core::GenerationKind;
use atelier_error::{StudioError, StudioErrorKind};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// Tracks which generation kinds currently have a call in flight.
#[derive(Debug, Default)]
pub(crate) struct InFlight {
    recommendation: AtomicBool,
    image: AtomicBool,
    video: AtomicBool,
}

impl InFlight {
    fn flag(&self, kind: GenerationKind) -> &AtomicBool {
        match kind {
            GenerationKind::Recommendation => &self.recommendation,
            GenerationKind::Image => &self.image,
            GenerationKind::Video => &self.video,
        }
    }

    /// Claims the slot for `kind`, or fails with `Busy` if it is taken.
    #[track_caller]
    pub(crate) fn try_begin(&self, kind: GenerationKind) -> Result<InFlightGuard<'_>, StudioError> {
        let flag = self.flag(kind);
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!(kind = %kind, "Rejected duplicate generation");
            return Err(StudioError::new(StudioErrorKind::Busy(kind.to_string())));
        }
        debug!(kind = %kind, "Generation slot claimed");
        Ok(InFlightGuard { flag, kind })
    }

    pub(crate) fn is_busy(&self, kind: GenerationKind) -> bool {
        self.flag(kind).load(Ordering::Acquire)
    }
}

/// Releases the slot when dropped, whichever way the generation ends.
#[derive(Debug)]
pub(crate) struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
    kind: GenerationKind,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        debug!(kind = %self.kind, "Generation slot released");
    }
}
