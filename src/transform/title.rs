//! Style-guide title casing
//!
//! The first and last words are always capitalized. Interior words are
//! capitalized unless they appear in the style's stop-word list, in which
//! case they are lowercased. Capitalizing lowercases everything after the
//! first letter, so acronyms do not survive.

use super::case::capitalize;

const MLA_STOP_WORDS: &[&str] = &[
    // articles
    "a", "an", "the",
    // coordinating conjunctions
    "and", "but", "or", "nor", "for", "so", "yet",
    // short prepositions
    "at", "by", "in", "of", "on", "to", "up", "via", "with", "over", "into", "onto", "off", "as",
];

const AP_STOP_WORDS: &[&str] = &["a", "an", "the", "and", "but", "or", "nor", "for", "on", "to", "in", "at", "by"];

/// Title-casing style guide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStyle {
    /// MLA / Chicago: lowercases articles, conjunctions and short prepositions
    Mla,
    /// Associated Press: a narrower list, so words like "over" and "with" are capitalized
    Ap,
}

impl TitleStyle {
    /// Words this style keeps lowercase in the middle of a title
    pub fn stop_words(self) -> &'static [&'static str] {
        match self {
            Self::Mla => MLA_STOP_WORDS,
            Self::Ap => AP_STOP_WORDS,
        }
    }

    /// Case-insensitive stop-word check
    pub fn is_stop_word(self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.stop_words().contains(&lower.as_str())
    }
}

/// Title-case `input` under the given style.
///
/// Whitespace runs collapse to a single space and the ends are trimmed.
pub fn title_case(input: &str, style: TitleStyle) -> String {
    let words: Vec<&str> = input.split_whitespace().collect();
    let last = words.len().saturating_sub(1);

    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i != 0 && i != last && style.is_stop_word(word) {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title case following MLA rules.
pub fn title_case_mla(input: &str) -> String {
    title_case(input, TitleStyle::Mla)
}

/// Title case following AP rules.
pub fn title_case_ap(input: &str) -> String {
    title_case(input, TitleStyle::Ap)
}
