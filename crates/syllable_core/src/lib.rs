//! Syllable core: text rules, store format, name generation and the pure
//! harvest-session state machine.
mod effect;
mod generator;
mod msg;
mod progress;
mod state;
mod store_format;
mod syllable;
mod update;
mod view_model;

pub use effect::Effect;
pub use generator::{
    generate_name, generate_names, GenerateError, GenerateRequest, SyllableSources,
};
pub use msg::Msg;
pub use progress::{HarvestProgress, HarvestResultKind};
pub use state::{AppState, SessionState};
pub use store_format::{format_store, normalize_entry, parse_store, ParsedStore, ENTRY_SEPARATOR};
pub use syllable::{extract_syllables, is_store_syllable, sanitize, syllables_from_line, MID_DOT};
pub use update::update;
pub use view_model::AppViewModel;
