//! Named string predicates and normalizers used by token cleaning and event selection.

use once_cell::sync::Lazy;
use regex::Regex;

/// Substrings marking bylines and attributions rather than events.
pub const BOILERPLATE_MARKERS: &[&str] = &["来源", "编辑", "作者", "供稿"];

/// Characters stripped from both ends of a selected event sentence.
pub const BORDER_PUNCTUATION: &str = ",，;'`?:：\"{}~!@#$%^&=_+.。；‘’【】！ …（）、";

/// Full stop appended to every normalized event sentence.
pub const FULL_STOP: char = '。';

static TRAILING_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+[年月日]$").expect("valid regex"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.-]+@([a-zA-Z0-9-]+\.)+[a-zA-Z0-9]{2,4}$").expect("valid regex")
});

static NUMERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-\\0-9]+$").expect("valid regex"));

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:http://|ftp://|https://|www)?[^\x{4e00}-\x{9fa5}\s]*?\.(?:com|net|cn|me|tw|fr)[^\x{4e00}-\x{9fa5}\s]*",
    )
    .expect("valid regex")
});

/// Whitespace as the article sources use it, including the ideographic space.
/// `*` is not blank and survives normalization.
pub fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{3000}'
}

/// Token ends with a numeric date unit, e.g. `2020年` or `15日`.
pub fn is_trailing_date(token: &str) -> bool {
    TRAILING_DATE.is_match(token)
}

/// Token is exactly an email address.
pub fn is_email(token: &str) -> bool {
    EMAIL.is_match(token)
}

/// Token consists only of digits, hyphens and backslashes.
pub fn is_numeral(token: &str) -> bool {
    NUMERAL.is_match(token)
}

/// Token contains something that looks like a web address.
pub fn is_url(token: &str) -> bool {
    URL.is_match(token)
}

/// String holds nothing but whitespace or control characters.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(|c| is_blank_char(c) || c.is_control())
}

/// String carries one of the byline markers.
pub fn is_boilerplate(text: &str) -> bool {
    BOILERPLATE_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Trim leading and trailing blanks, ideographic space included.
pub fn strip_border_blank(text: &str) -> &str {
    text.trim_matches(is_blank_char)
}

/// Remove every blank character from the string.
pub fn remove_all_blank(text: &str) -> String {
    text.chars().filter(|c| !is_blank_char(*c)).collect()
}

/// Trim punctuation, quotes and brackets from both ends.
pub fn strip_border_punctuation(text: &str) -> &str {
    text.trim_matches(|c: char| BORDER_PUNCTUATION.contains(c))
}

/// Canonical form of a selected event sentence.
///
/// Blanks are removed, border punctuation is trimmed and a single `。` is
/// appended. Applying it to its own output returns the same string.
pub fn normalize_event(sentence: &str) -> String {
    let compact = remove_all_blank(sentence);
    let mut event = strip_border_punctuation(&compact).to_string();
    event.push(FULL_STOP);
    event
}
