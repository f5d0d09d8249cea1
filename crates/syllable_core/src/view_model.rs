use crate::{HarvestProgress, HarvestResultKind, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    pub progress: HarvestProgress,
    pub result: Option<HarvestResultKind>,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn progress_line(&self) -> String {
        let p = &self.progress;
        format!(
            "{}/{} pages scraped, {} syllables found, {} pages found in dictionary.",
            p.pages_read, p.page_limit, p.syllables_found, p.total_pages_discovered
        )
    }

    pub fn status_line(&self) -> String {
        match (self.session, self.result) {
            (SessionState::Idle, _) => "Idle.".to_string(),
            (SessionState::Running, _) => "Harvesting... press Enter to stop.".to_string(),
            (SessionState::Stopping, _) => "Stopping after the current page...".to_string(),
            (SessionState::Finished, Some(HarvestResultKind::Completed)) => {
                "Harvest complete.".to_string()
            }
            (SessionState::Finished, Some(HarvestResultKind::Cancelled)) => {
                "Harvest stopped.".to_string()
            }
            (SessionState::Finished, Some(HarvestResultKind::Failed)) => {
                "Harvest failed; see the log for details.".to_string()
            }
            (SessionState::Finished, None) => "Harvest finished.".to_string(),
        }
    }
}
