use regex::Regex;
use std::sync::OnceLock;

/// Matches Discogs' numeric disambiguation suffix, e.g. "(2)", with surrounding whitespace.
fn disambiguation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s*\(\d+\)\s*").expect("valid disambiguation regex"))
}

/// Replace each parenthesized number in an artist name with a single space.
///
/// `"Boards of Canada (2)"` becomes `"Boards of Canada "`; trailing whitespace
/// is kept.
pub fn strip_disambiguation(name: &str) -> String {
    disambiguation_pattern().replace_all(name, " ").into_owned()
}
