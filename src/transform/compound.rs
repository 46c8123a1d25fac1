//! Compound-identifier case conversions: snake_case, kebab-case, PascalCase
//! and camelCase.
//!
//! All four share one pipeline:
//! 1. insert a space where a lowercase letter or digit meets an uppercase
//!    letter, so existing camel/Pascal identifiers split into words
//! 2. drop every character that is not a letter, digit, whitespace, `_` or `-`
//! 3. treat runs of whitespace, `_` and `-` as a single word separator
//! 4. re-case and join the words for the target style
//!
//! PascalCase capitalizes the first letter of each word and lowercases the
//! rest, so acronyms are not preserved: `"HTTP server"` becomes
//! `HttpServer`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::case::capitalize;

static WORD_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\p{Ll}\p{Nd}])(\p{Lu})").unwrap());

static NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{M}\p{N}\s_-]").unwrap());

static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_-]+").unwrap());

/// Convert to `snake_case`.
pub fn snake_case(input: &str) -> String {
    separated(input, '_')
}

/// Convert to `kebab-case`.
pub fn kebab_case(input: &str) -> String {
    separated(input, '-')
}

/// Convert to `PascalCase`.
pub fn pascal_case(input: &str) -> String {
    words(input).iter().map(|word| capitalize(word)).collect()
}

/// Convert to `camelCase`.
///
/// Built on [`pascal_case`]: the first token of the Pascal form is lowercased
/// and the rest is kept as is. A token is either a run of uppercase letters
/// not followed by a lowercase letter, or one uppercase letter followed by
/// lowercase letters, so a leading `"ABC"` is lowered as one word.
pub fn camel_case(input: &str) -> String {
    let pascal = pascal_case(input);
    let (head, tail) = pascal.split_at(first_token_end(&pascal));
    let mut out = head.to_lowercase();
    out.push_str(tail);
    out
}

fn split_boundaries(input: &str) -> String {
    let spaced = WORD_BOUNDARY.replace_all(input, "${1} ${2}");
    NOISE.replace_all(&spaced, "").into_owned()
}

fn separated(input: &str, separator: char) -> String {
    let cleaned = split_boundaries(input);
    let joined = SEPARATOR_RUN.replace_all(&cleaned, separator.to_string().as_str());
    joined.trim_matches(separator).to_lowercase()
}

fn words(input: &str) -> Vec<String> {
    let cleaned = split_boundaries(input);
    SEPARATOR_RUN
        .split(cleaned.trim())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Byte offset where the first camelCase token of `word` ends.
///
/// Characters before the first uppercase letter (digits, uncased letters)
/// belong to the first token.
fn first_token_end(word: &str) -> usize {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let start = chars.iter().take_while(|(_, c)| !c.is_uppercase()).count();
    if start == chars.len() {
        return word.len();
    }

    let run = chars[start..].iter().take_while(|(_, c)| c.is_uppercase()).count();
    let after_run = start + run;
    let followed_by_lower = chars.get(after_run).is_some_and(|(_, c)| c.is_lowercase());

    let end = if !followed_by_lower {
        after_run
    } else if run > 1 {
        // the last capital starts the next word
        after_run - 1
    } else {
        after_run + chars[after_run..].iter().take_while(|(_, c)| c.is_lowercase()).count()
    };

    chars.get(end).map_or(word.len(), |(idx, _)| *idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("Hello World"), "hello_world");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("Hello World"), "hello-world");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("hello world"), "HelloWorld");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("Hello World"), "helloWorld");
    }

    #[test]
    fn test_splits_existing_identifiers() {
        assert_eq!(snake_case("helloWorldAgain"), "hello_world_again");
        assert_eq!(kebab_case("ParseHttpRequest"), "parse-http-request");
        assert_eq!(pascal_case("user_id-field"), "UserIdField");
        assert_eq!(camel_case("some-kebab_snake mix"), "someKebabSnakeMix");
    }

    #[test]
    fn test_digit_boundary() {
        assert_eq!(snake_case("version2Update"), "version2_update");
        assert_eq!(camel_case("version 2 api"), "version2Api");
    }

    #[test]
    fn test_punctuation_dropped_not_substituted() {
        assert_eq!(snake_case("Don't stop, believing!"), "dont_stop_believing");
        assert_eq!(kebab_case("rock & roll"), "rock-roll");
        assert_eq!(pascal_case("it's (almost) done"), "ItsAlmostDone");
    }

    #[test]
    fn test_separators_collapse_and_trim() {
        assert_eq!(snake_case("  --leading  and__trailing--  "), "leading_and_trailing");
        assert_eq!(kebab_case("_a__b_"), "a-b");
        assert_eq!(pascal_case("\t spaced \n out "), "SpacedOut");
    }

    #[test]
    fn test_only_noise_is_empty() {
        assert_eq!(snake_case("!!! ??? ..."), "");
        assert_eq!(kebab_case(" -_- "), "");
        assert_eq!(pascal_case("@#$"), "");
        assert_eq!(camel_case("@#$"), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(snake_case(""), "");
        assert_eq!(kebab_case(""), "");
        assert_eq!(pascal_case(""), "");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_acronyms_not_preserved() {
        assert_eq!(pascal_case("HTTP server"), "HttpServer");
        assert_eq!(pascal_case("API"), "Api");
        assert_eq!(camel_case("the API key"), "theApiKey");
    }

    #[test]
    fn test_camel_single_lowercase_word() {
        assert_eq!(camel_case("hello"), "hello");
    }

    #[test]
    fn test_camel_single_letter_words() {
        // Pascal gives "IAm": the "I" alone is the first token
        assert_eq!(camel_case("i am"), "iAm");
        // Pascal gives "ABC": one uppercase run
        assert_eq!(camel_case("a b c"), "abc");
        assert_eq!(camel_case("a b cat"), "abCat");
    }

    #[test]
    fn test_first_token_end() {
        assert_eq!(first_token_end("HelloWorld"), 5);
        assert_eq!(first_token_end("ABCdef"), 2);
        assert_eq!(first_token_end("ABC"), 3);
        assert_eq!(first_token_end("2Fast"), 5);
        assert_eq!(first_token_end("lower"), 5);
        assert_eq!(first_token_end(""), 0);
    }

    #[test]
    fn test_unicode_letters_kept() {
        assert_eq!(snake_case("Café Crème"), "café_crème");
        assert_eq!(pascal_case("über straße"), "ÜberStraße");
    }

    #[test]
    fn test_idempotent() {
        // runs of single-letter words ("i am a b c") are the known exception
        let inputs = [
            "Hello World",
            "the quick brown fox",
            "parseHTTPResponse now",
            "  mixed_UP-input  here ",
            "version 2 api",
        ];
        for input in inputs {
            let snake = snake_case(input);
            assert_eq!(snake_case(&snake), snake, "snake: {:?}", input);

            let kebab = kebab_case(input);
            assert_eq!(kebab_case(&kebab), kebab, "kebab: {:?}", input);

            let pascal = pascal_case(input);
            assert_eq!(pascal_case(&pascal), pascal, "pascal: {:?}", input);

            let camel = camel_case(input);
            assert_eq!(camel_case(&camel), camel, "camel: {:?}", input);
        }
    }
}
