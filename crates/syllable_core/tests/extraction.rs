use pretty_assertions::assert_eq;
use syllable_core::{extract_syllables, is_store_syllable, syllables_from_line};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn quoted_pronunciation_is_split_on_mid_dot() {
    let line = r#"<div class="pron" data-syllables="dic·tion·ar·y"></div>"#;
    assert_eq!(syllables_from_line(line), owned(&["dic", "tion", "ar", "y"]));
}

#[test]
fn fragments_with_markup_characters_are_skipped() {
    let line = r#"<span>ka·ra</span> "lin·do" "(no·pe)" "a/b·c""#;
    // Only the clean quoted fragment survives.
    assert_eq!(syllables_from_line(line), owned(&["lin", "do"]));
}

#[test]
fn space_and_hyphen_also_separate_syllables() {
    let line = r#"x="Ka·ra tor-lin""#;
    assert_eq!(syllables_from_line(line), owned(&["ka", "ra", "tor", "lin"]));
}

#[test]
fn tokens_with_digits_or_punctuation_are_discarded() {
    let line = r#"a="ab2·cd·e'f·gh""#;
    assert_eq!(syllables_from_line(line), owned(&["cd", "gh"]));
}

#[test]
fn only_first_matching_line_is_used() {
    let page = "<html>\n<p>nothing here</p>\n<b data=\"mo·ra\"/>\n<i data=\"ti·ki\"/>\n";
    assert_eq!(extract_syllables(page), owned(&["mo", "ra"]));
}

#[test]
fn first_matching_line_without_valid_fragment_yields_nothing() {
    let page = "<p>ka·ra</p>\n<i data=\"ti·ki\"/>\n";
    assert!(extract_syllables(page).is_empty());
}

#[test]
fn page_without_mid_dot_yields_nothing() {
    assert!(extract_syllables("<html><body>plain</body></html>").is_empty());
    assert!(extract_syllables("").is_empty());
}

#[test]
fn consecutive_separators_do_not_produce_empty_syllables() {
    let line = r#"v="ka··ra -  tor""#;
    let syllables = syllables_from_line(line);
    assert_eq!(syllables, owned(&["ka", "ra", "tor"]));
    assert!(syllables.iter().all(|s| is_store_syllable(s)));
}
