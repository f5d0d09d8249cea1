use crate::view_model::AppViewModel;
use crate::{HarvestProgress, HarvestResultKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Running,
    /// Stop requested; waiting for the harvester to notice.
    Stopping,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    session: SessionState,
    progress: HarvestProgress,
    result: Option<HarvestResultKind>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            session: self.session,
            progress: self.progress,
            result: self.result,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn start_session(&mut self, page_limit: u64) {
        self.session = SessionState::Running;
        self.progress = HarvestProgress::with_limit(page_limit);
        self.result = None;
        self.dirty = true;
    }

    pub(crate) fn begin_stopping(&mut self) {
        self.session = SessionState::Stopping;
        self.dirty = true;
    }

    pub(crate) fn apply_progress(&mut self, progress: HarvestProgress) {
        if self.progress != progress {
            self.progress = progress;
            self.dirty = true;
        }
    }

    pub(crate) fn finish_session(&mut self, progress: HarvestProgress, result: HarvestResultKind) {
        self.session = SessionState::Finished;
        self.progress = progress;
        self.result = Some(result);
        self.dirty = true;
    }
}
