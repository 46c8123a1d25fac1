//! Text transformations
//!
//! Every rule is a total, pure `&str -> String` function; none of them can
//! fail. The only one with hidden state is [`sarcastic_spongebob`], which
//! draws from a random source.

mod case;
mod compound;
mod newline;
mod sarcastic;
mod title;

use serde::{Deserialize, Serialize};

pub use case::{lowercase, sentence_case, uppercase};
pub use compound::{camel_case, kebab_case, pascal_case, snake_case};
pub use newline::{escape_newlines, unescape_newlines};
pub use sarcastic::{CaseSource, RngCaseSource, sarcastic_spongebob, sarcastic_spongebob_with};
pub use title::{TitleStyle, title_case, title_case_ap, title_case_mla};

/// Signature shared by every transformation rule
pub type Rule = fn(&str) -> String;

/// Named transformation rule, identified by its selection key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transform {
    Escape,
    Unescape,
    Uppercase,
    Lowercase,
    SentenceCase,
    SnakeCase,
    KebabCase,
    PascalCase,
    CamelCase,
    TitleCaseMla,
    TitleCaseAp,
    SarcasticSpongeBob,
}

impl Transform {
    /// Every rule, in default presentation order
    pub const ALL: [Transform; 12] = [
        Self::Escape,
        Self::Unescape,
        Self::Uppercase,
        Self::Lowercase,
        Self::SentenceCase,
        Self::SnakeCase,
        Self::KebabCase,
        Self::PascalCase,
        Self::CamelCase,
        Self::TitleCaseMla,
        Self::TitleCaseAp,
        Self::SarcasticSpongeBob,
    ];

    /// Parse from a selection key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Selection key, matching the serde representation
    pub fn key(self) -> &'static str {
        match self {
            Self::Escape => "escape",
            Self::Unescape => "unescape",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::SentenceCase => "sentenceCase",
            Self::SnakeCase => "snakeCase",
            Self::KebabCase => "kebabCase",
            Self::PascalCase => "pascalCase",
            Self::CamelCase => "camelCase",
            Self::TitleCaseMla => "titleCaseMla",
            Self::TitleCaseAp => "titleCaseAp",
            Self::SarcasticSpongeBob => "sarcasticSpongeBob",
        }
    }

    /// The function implementing this rule
    pub fn rule(self) -> Rule {
        match self {
            Self::Escape => escape_newlines,
            Self::Unescape => unescape_newlines,
            Self::Uppercase => uppercase,
            Self::Lowercase => lowercase,
            Self::SentenceCase => sentence_case,
            Self::SnakeCase => snake_case,
            Self::KebabCase => kebab_case,
            Self::PascalCase => pascal_case,
            Self::CamelCase => camel_case,
            Self::TitleCaseMla => title_case_mla,
            Self::TitleCaseAp => title_case_ap,
            Self::SarcasticSpongeBob => sarcastic_spongebob,
        }
    }

    /// Apply this rule to `input`
    pub fn apply(self, input: &str) -> String {
        (self.rule())(input)
    }

    /// Whether repeated application can give different results
    pub fn is_stochastic(self) -> bool {
        matches!(self, Self::SarcasticSpongeBob)
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
