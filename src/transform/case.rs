//! Simple whole-string case conversions

/// Convert every character to uppercase.
pub fn uppercase(input: &str) -> String {
    input.to_uppercase()
}

/// Convert every character to lowercase.
pub fn lowercase(input: &str) -> String {
    input.to_lowercase()
}

/// Trim the input, uppercase its first character and lowercase the rest.
///
/// Treats the whole input as one sentence: text after a full stop is
/// lowercased too.
pub fn sentence_case(input: &str) -> String {
    capitalize(input.trim())
}

/// First character uppercase, everything after it lowercase.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
