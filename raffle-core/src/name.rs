//! Name validation and canonicalization.
//!
//! Names are ASCII letters and spaces only. The canonical form (each word
//! capitalized, single spaces) is what gets stored and compared, so "john
//! smith" and "John Smith" count as the same registrant.

/// True when the trimmed input is non-empty and every character is an
/// ASCII letter or a space. Non-ASCII letters are rejected.
pub fn is_valid_name(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Capitalize each whitespace-separated word and rejoin with single
/// spaces. Idempotent.
pub fn canonicalize(raw: &str) -> String {
    raw.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
        }
        None => String::new(),
    }
}
