use crate::helper::sanitization_helpers::{plain_text, sanitize_markdown_content};
use regex::Regex;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Lower-cases an email so duplicate detection ignores case. Whitespace is kept,
/// so padded input still fails `is_valid_email`.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

/// A required single-line field: absent, blank, or nothing-left-after-stripping counts as missing.
pub fn required_text(value: &Option<String>) -> Option<String> {
    optional_text(value)
}

/// An optional single-line field, with HTML stripped and blanks mapped to `None`.
pub fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(plain_text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// A long-form field (message, cover letter). HTML is escaped rather than stripped,
/// so every character the visitor typed survives.
pub fn long_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(sanitize_markdown_content)
}

/// Cleans a string list, dropping blank entries.
pub fn text_list(values: &Option<Vec<String>>) -> Vec<String> {
    values
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|v| plain_text(v).trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
