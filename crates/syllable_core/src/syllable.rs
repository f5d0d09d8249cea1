/// Interpunct used by the dictionary to mark syllable boundaries.
pub const MID_DOT: char = '\u{00B7}';

/// A quoted fragment containing any of these is markup, not a pronunciation.
const FORBIDDEN_FRAGMENT_CHARS: &[char] = &['<', '>', '(', ')', '/'];

const SUB_TOKEN_SEPARATORS: &[char] = &[MID_DOT, ' ', '-'];

/// Extract the syllables of one page.
///
/// Only the first line containing a mid-dot is considered; a page never
/// contributes more than that line yields.
pub fn extract_syllables(page_text: &str) -> Vec<String> {
    page_text
        .lines()
        .find(|line| line.contains(MID_DOT))
        .map(syllables_from_line)
        .unwrap_or_default()
}

/// Extract the syllables of a single line known to hold a pronunciation.
///
/// The line is split on `"`; a fragment is kept when it still holds a
/// mid-dot and no markup characters. Kept fragments are split on mid-dot,
/// space or hyphen, and a sub-token survives only if every character is a
/// letter.
pub fn syllables_from_line(line: &str) -> Vec<String> {
    line.split('"')
        .filter(|fragment| {
            fragment.contains(MID_DOT) && !fragment.contains(FORBIDDEN_FRAGMENT_CHARS)
        })
        .flat_map(|fragment| fragment.split(SUB_TOKEN_SEPARATORS))
        .filter(|token| token.chars().all(char::is_alphabetic))
        .map(sanitize)
        .filter(|syllable| !syllable.is_empty())
        .collect()
}

/// Reduce a token to lowercase ASCII letters.
pub fn sanitize(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect::<String>()
        .to_ascii_lowercase()
}

/// True when `syllable` satisfies the store invariant: non-empty, letters
/// only, lowercase.
pub fn is_store_syllable(syllable: &str) -> bool {
    !syllable.is_empty()
        && syllable
            .chars()
            .all(|c| c.is_alphabetic() && !c.is_uppercase())
}
