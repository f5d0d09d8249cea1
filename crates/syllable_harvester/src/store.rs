use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use engine_logging::{engine_debug, engine_warn};
use syllable_core::{format_store, parse_store, ParsedStore, SyllableSources, ENTRY_SEPARATOR};
use thiserror::Error;

use crate::{ensure_output_dir, AtomicFileWriter, PersistError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("{path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreRole {
    /// Harvested from the dictionary; rebuilt by every harvest.
    Website,
    Occasional,
    Mandatory,
}

impl StoreRole {
    pub const ALL: [StoreRole; 3] = [
        StoreRole::Website,
        StoreRole::Occasional,
        StoreRole::Mandatory,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            StoreRole::Website => "syllables_website.csv",
            StoreRole::Occasional => "syllables_occasional.csv",
            StoreRole::Mandatory => "syllables_mandatory.csv",
        }
    }

    pub fn path_in(self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

/// Streaming writer for the website store, owned by a harvest run.
///
/// Creating the writer discards any previous store at `path`.
#[derive(Debug)]
pub struct SyllableStoreWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    written: u64,
}

impl SyllableStoreWriter {
    pub fn create(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_output_dir(parent)?;
        }
        match fs::remove_file(path) {
            Ok(()) => engine_debug!("Removed previous syllable store {:?}", path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(StoreError::io(path, err)),
        }
        let file = File::create(path).map_err(|err| StoreError::io(path, err))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    pub fn append(&mut self, syllable: &str) -> Result<(), StoreError> {
        if self.written > 0 {
            self.writer
                .write_all(ENTRY_SEPARATOR.as_bytes())
                .map_err(|err| StoreError::io(&self.path, err))?;
        }
        self.writer
            .write_all(syllable.as_bytes())
            .map_err(|err| StoreError::io(&self.path, err))?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn finish(mut self) -> Result<PathBuf, StoreError> {
        self.writer
            .flush()
            .map_err(|err| StoreError::io(&self.path, err))?;
        Ok(self.path)
    }
}

/// Read a store file. A missing file is an empty store.
pub fn read_store(path: &Path) -> Result<ParsedStore, StoreError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(parse_store(&text)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(ParsedStore::default()),
        Err(err) => Err(StoreError::io(path, err)),
    }
}

/// Replace a whole store file atomically.
pub fn write_store<S: AsRef<str>>(
    dir: &Path,
    role: StoreRole,
    syllables: &[S],
) -> Result<PathBuf, StoreError> {
    let writer = AtomicFileWriter::new(dir.to_path_buf());
    Ok(writer.write(role.file_name(), &format_store(syllables))?)
}

/// Load all three stores from `dir`.
pub fn load_sources(dir: &Path) -> Result<SyllableSources, StoreError> {
    let load = |role: StoreRole| -> Result<Vec<String>, StoreError> {
        let path = role.path_in(dir);
        let parsed = read_store(&path)?;
        if parsed.rejected > 0 {
            engine_warn!(
                "Skipped {} non-alphabetic entries in {:?}",
                parsed.rejected,
                path
            );
        }
        engine_debug!("Loaded {} syllables from {:?}", parsed.len(), path);
        Ok(parsed.syllables)
    };

    Ok(SyllableSources {
        website: load(StoreRole::Website)?,
        occasional: load(StoreRole::Occasional)?,
        mandatory: load(StoreRole::Mandatory)?,
    })
}
