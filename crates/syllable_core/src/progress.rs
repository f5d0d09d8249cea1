/// Point-in-time copy of a harvest session's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HarvestProgress {
    pub pages_read: u64,
    pub page_limit: u64,
    pub total_pages_discovered: u64,
    pub syllables_found: u64,
}

impl HarvestProgress {
    pub fn with_limit(page_limit: u64) -> Self {
        Self {
            page_limit,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarvestResultKind {
    Completed,
    Cancelled,
    Failed,
}
