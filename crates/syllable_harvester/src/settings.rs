use std::path::PathBuf;
use std::time::Duration;

use crate::{FetchSettings, StoreRole};

pub const DEFAULT_SITE_URL: &str = "http://www.dictionary.com";

/// What to do when a single dictionary page cannot be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageErrorPolicy {
    /// Abort the run, like any other network failure.
    #[default]
    Abort,
    /// Log the failure, count the page as read and move on.
    Skip,
}

#[derive(Debug, Clone)]
pub struct HarvestSettings {
    /// Site root; `robots.txt` is resolved against it.
    pub site_url: String,
    /// Directory holding the three syllable stores.
    pub store_dir: PathBuf,
    /// Each page waits a random delay in `[unit, 2 * unit)` before it is fetched.
    pub courtesy_delay: Duration,
    pub page_error_policy: PageErrorPolicy,
    pub fetch: FetchSettings,
}

impl Default for HarvestSettings {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            store_dir: PathBuf::from("."),
            courtesy_delay: Duration::from_millis(5),
            page_error_policy: PageErrorPolicy::default(),
            fetch: FetchSettings::default(),
        }
    }
}

impl HarvestSettings {
    pub fn website_store_path(&self) -> PathBuf {
        StoreRole::Website.path_in(&self.store_dir)
    }
}
