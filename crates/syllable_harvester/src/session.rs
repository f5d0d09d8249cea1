use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use syllable_core::HarvestProgress;
use tokio_util::sync::CancellationToken;

use crate::HarvestOutcome;

/// Live state of one harvest run.
///
/// Counters are updated by the harvest worker and may be read from any
/// thread at any time. A session starts out running; it stops being running
/// exactly once, when the worker records its outcome.
#[derive(Debug)]
pub struct HarvestSession {
    page_limit: u64,
    pages_read: AtomicU64,
    total_pages_discovered: AtomicU64,
    syllables_found: AtomicU64,
    running: AtomicBool,
    cancel: CancellationToken,
    outcome: Mutex<Option<HarvestOutcome>>,
}

impl HarvestSession {
    pub fn new(page_limit: u64) -> Self {
        Self {
            page_limit,
            pages_read: AtomicU64::new(0),
            total_pages_discovered: AtomicU64::new(0),
            syllables_found: AtomicU64::new(0),
            running: AtomicBool::new(true),
            cancel: CancellationToken::new(),
            outcome: Mutex::new(None),
        }
    }

    pub fn page_limit(&self) -> u64 {
        self.page_limit
    }

    pub fn pages_read(&self) -> u64 {
        self.pages_read.load(Ordering::Acquire)
    }

    pub fn total_pages_discovered(&self) -> u64 {
        self.total_pages_discovered.load(Ordering::Acquire)
    }

    pub fn syllables_found(&self) -> u64 {
        self.syllables_found.load(Ordering::Acquire)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Cooperative: the worker notices during a courtesy delay or at its next
    /// sitemap or page boundary.
    pub fn request_stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_stop_requested(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn snapshot(&self) -> HarvestProgress {
        HarvestProgress {
            pages_read: self.pages_read(),
            page_limit: self.page_limit,
            total_pages_discovered: self.total_pages_discovered(),
            syllables_found: self.syllables_found(),
        }
    }

    /// `None` while running.
    pub fn outcome(&self) -> Option<HarvestOutcome> {
        self.outcome
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn add_discovered(&self, pages: u64) {
        self.total_pages_discovered.fetch_add(pages, Ordering::AcqRel);
    }

    pub(crate) fn record_page_read(&self) {
        self.pages_read.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn record_syllable(&self) {
        self.syllables_found.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn finish(&self, outcome: HarvestOutcome) {
        *self.outcome.lock().unwrap_or_else(PoisonError::into_inner) = Some(outcome);
        self.running.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_running_with_zeroed_counters() {
        let session = HarvestSession::new(12);
        assert!(session.is_running());
        assert!(!session.is_stop_requested());
        assert_eq!(session.snapshot(), HarvestProgress::with_limit(12));
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn finish_publishes_outcome_before_clearing_running() {
        let session = HarvestSession::new(1);
        session.record_page_read();
        session.record_syllable();
        session.add_discovered(40);
        session.finish(HarvestOutcome::Completed);

        assert!(!session.is_running());
        assert_eq!(session.outcome(), Some(HarvestOutcome::Completed));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.pages_read, 1);
        assert_eq!(snapshot.syllables_found, 1);
        assert_eq!(snapshot.total_pages_discovered, 40);
    }

    #[test]
    fn stop_request_is_shared_with_token_clones() {
        let session = HarvestSession::new(1);
        let token = session.cancellation_token();
        session.request_stop();
        assert!(token.is_cancelled());
        assert!(session.is_stop_requested());
    }
}
