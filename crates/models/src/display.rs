use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref APOSTROPHE_CAPITAL: Regex = Regex::new(r"([a-z])'([A-Z])").unwrap();
    static ref DIGIT_CAPITAL: Regex = Regex::new(r"[0-9]([A-Z])").unwrap();
}

/// Title-cases a course name
///
/// Every run of letters starts with a capital and continues in lowercase.
/// Letters after an apostrophe ("Don't") or directly after a digit ("3d")
/// stay lowercase.
pub fn title_case(value: &str) -> String {
    let mut titled = String::with_capacity(value.len());
    let mut previous_cased = false;

    for c in value.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && previous_cased {
            titled.extend(c.to_lowercase());
        } else if cased {
            titled.extend(c.to_uppercase());
        } else {
            titled.push(c);
        }
        previous_cased = cased;
    }

    let titled = APOSTROPHE_CAPITAL.replace_all(&titled, lowercase_match);

    DIGIT_CAPITAL
        .replace_all(&titled, lowercase_match)
        .into_owned()
}

fn lowercase_match(caps: &Captures) -> String {
    caps[0].to_lowercase()
}

/// Section number left-padded with zeros to three characters
pub fn pad_section_number(number: &str) -> String {
    format!("{number:0>3}")
}

/// Splits a section's instructor field into individual names
pub fn split_profs(prof: &str) -> Vec<&str> {
    prof.split(", ").collect()
}

/// The short name of a college, falling back to its full name
pub fn short_name<'a>(short_name: &'a str, name: &'a str) -> &'a str {
    if short_name.is_empty() {
        name
    } else {
        short_name
    }
}
