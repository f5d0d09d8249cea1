//! Syllable harvester: sitemap walking, page fetching and syllable store IO.
mod decode;
mod engine;
mod fetch;
mod harvest;
mod persist;
mod session;
mod settings;
mod sitemap;
mod store;
mod types;

pub use decode::{decode_text, DecodedText};
pub use engine::HarvesterHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use harvest::run_harvest;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use session::HarvestSession;
pub use settings::{HarvestSettings, PageErrorPolicy};
pub use sitemap::{find_sitemap_url, inflate_if_gzip, parse_loc_entries, SitemapError};
pub use store::{
    load_sources, read_store, write_store, StoreError, StoreRole, SyllableStoreWriter,
};
pub use types::{
    FailureKind, FetchError, FetchMetadata, FetchOutput, HarvestFailure, HarvestOutcome,
};
