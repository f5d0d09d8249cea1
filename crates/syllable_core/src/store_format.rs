use crate::syllable::is_store_syllable;

/// Separator written between store entries. No separator follows the last.
pub const ENTRY_SEPARATOR: &str = ",\n";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedStore {
    pub syllables: Vec<String>,
    /// Entries that were present but not alphabetic.
    pub rejected: usize,
}

impl ParsedStore {
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }
}

/// Parse store text. Entries are split on commas and trimmed, so `,\n`,
/// `,\r\n` and bare commas all read back the same; blank entries are
/// ignored and non-alphabetic entries are counted as rejected.
pub fn parse_store(text: &str) -> ParsedStore {
    let mut parsed = ParsedStore::default();
    for raw in text.split(',') {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        match normalize_entry(raw) {
            Some(syllable) => parsed.syllables.push(syllable),
            None => parsed.rejected += 1,
        }
    }
    parsed
}

/// Lowercase an entry if it is made of letters only.
pub fn normalize_entry(raw: &str) -> Option<String> {
    let lowered = raw.trim().to_lowercase();
    is_store_syllable(&lowered).then_some(lowered)
}

pub fn format_store<S: AsRef<str>>(syllables: &[S]) -> String {
    let mut out = String::new();
    for (index, syllable) in syllables.iter().enumerate() {
        if index > 0 {
            out.push_str(ENTRY_SEPARATOR);
        }
        out.push_str(syllable.as_ref());
    }
    out
}
