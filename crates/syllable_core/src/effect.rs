#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartHarvest { page_limit: u64 },
    StopHarvest,
}
