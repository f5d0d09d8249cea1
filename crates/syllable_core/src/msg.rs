use crate::{HarvestProgress, HarvestResultKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked for a harvest run reading at most `page_limit` pages.
    HarvestRequested { page_limit: u64 },
    /// User asked the running harvest to stop.
    StopRequested,
    /// Observer poll of the live session counters.
    Progress(HarvestProgress),
    /// The session reported it is no longer running.
    HarvestFinished {
        progress: HarvestProgress,
        result: HarvestResultKind,
    },
    /// Render tick.
    Tick,
}
