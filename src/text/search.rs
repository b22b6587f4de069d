//! Keyword search over extracted text.

use aho_corasick::AhoCorasick;

/// Separator between the terms of a rule in [`matches_any_rule`].
const TERM_SEPARATOR: char = '|';

/// Check whether any of `needles` occurs in `text`.
///
/// All needles are searched in a single pass. An empty needle matches any
/// text; an empty needle list matches nothing.
///
/// # Examples
///
/// ```
/// use contexto::text::contains_any;
///
/// assert!(contains_any("contrato de arrendamiento", &["arrenda", "compraventa"]));
/// assert!(!contains_any("contrato de arrendamiento", &["compraventa"]));
/// ```
pub fn contains_any<S: AsRef<str>>(text: &str, needles: &[S]) -> bool {
    if needles.is_empty() {
        return false;
    }
    match AhoCorasick::new(needles.iter().map(AsRef::<str>::as_ref)) {
        Ok(searcher) => searcher.is_match(text),
        // Pattern set too large for the automaton
        Err(_) => needles
            .iter()
            .any(|needle| text.contains(AsRef::<str>::as_ref(needle))),
    }
}

/// Check `text` against `|`-separated keyword rules.
///
/// A rule matches when every one of its terms occurs in `text`. The first
/// matching rule that is not listed in `repeatable` makes the function return
/// `true`. Rules listed in `repeatable` are weaker: two of them have to match
/// before the text counts as a hit.
///
/// # Examples
///
/// ```
/// use contexto::text::matches_any_rule;
///
/// let text = "el juez dicta sentencia de primera instancia";
/// assert!(matches_any_rule(text, &["juez|sentencia"], &[] as &[&str]));
///
/// // A single weak rule is not enough, two are
/// assert!(!matches_any_rule(text, &["primera"], &["primera"]));
/// assert!(matches_any_rule(text, &["primera", "juez"], &["primera", "juez"]));
/// ```
pub fn matches_any_rule<S, R>(text: &str, rules: &[S], repeatable: &[R]) -> bool
where
    S: AsRef<str>,
    R: AsRef<str>,
{
    let mut weak_matches = 0usize;

    for rule in rules.iter().map(AsRef::<str>::as_ref) {
        if !rule.split(TERM_SEPARATOR).all(|term| text.contains(term)) {
            continue;
        }
        if !repeatable.iter().any(|weak| AsRef::<str>::as_ref(weak) == rule) {
            return true;
        }
        weak_matches += 1;
        if weak_matches > 1 {
            return true;
        }
    }

    false
}
