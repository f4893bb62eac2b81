use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Maximum number of characters kept from a derived slug
pub const SLUG_MAX_LENGTH: usize = 60;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s-]").unwrap();
    static ref SEPARATORS: Regex = Regex::new(r"[-\s]+").unwrap();
}

/// Converts a display string into a URL-safe slug
///
/// Accented letters are reduced to their ASCII base, anything that is not a
/// word character, whitespace or hyphen is dropped, and runs of whitespace and
/// hyphens collapse into a single hyphen.
///
/// # Arguments
/// * `value` - The string to slugify
///
/// # Returns
/// The lowercase, hyphenated slug
pub fn slugify(value: &str) -> String {
    let ascii: String = value.nfkd().filter(char::is_ascii).collect();
    let cleaned = NON_WORD.replace_all(&ascii, "");
    let lowered = cleaned.trim().to_lowercase();

    SEPARATORS.replace_all(&lowered, "-").into_owned()
}

/// Derives the stored slug for a named row
///
/// # Returns
/// `None` when the name is empty, so the previously stored slug is kept
pub fn slug_from_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    Some(slugify(name).chars().take(SLUG_MAX_LENGTH).collect())
}
