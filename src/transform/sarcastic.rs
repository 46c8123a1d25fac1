//! Randomized alternating case ("Sarcastic SpongeBob")
//!
//! Every cased letter gets a random case, constrained so the output always
//! ends up with exactly ⌈L/2⌉ uppercase and ⌊L/2⌋ lowercase of them, where L
//! is the number of cased letters. Once one case has used its quota the
//! remaining letters are forced to the other case.
//!
//! A cased letter is one whose upper and lower forms are each a single,
//! distinct character. Everything else (digits, CJK, `ß`) passes through.

use rand::Rng;

/// Source of case decisions for [`sarcastic_spongebob_with`].
pub trait CaseSource {
    /// `true` for uppercase, `false` for lowercase
    fn next_is_upper(&mut self) -> bool;
}

/// [`CaseSource`] backed by any `rand` generator, flipping a fair coin.
#[derive(Debug, Clone)]
pub struct RngCaseSource<R> {
    rng: R,
}

impl<R: Rng> RngCaseSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CaseSource for RngCaseSource<R> {
    fn next_is_upper(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// Randomize letter case using the thread-local generator.
pub fn sarcastic_spongebob(input: &str) -> String {
    sarcastic_spongebob_with(input, &mut RngCaseSource::new(rand::rng()))
}

/// Randomize letter case using the given source of decisions.
///
/// The source is only consulted while both cases still have quota left.
pub fn sarcastic_spongebob_with<S: CaseSource + ?Sized>(input: &str, source: &mut S) -> String {
    let letters = input.chars().filter(|&c| case_pair(c).is_some()).count();
    let upper_quota = letters.div_ceil(2);
    let lower_quota = letters / 2;
    let mut uppers = 0;
    let mut lowers = 0;

    input
        .chars()
        .map(|c| {
            let Some((upper_form, lower_form)) = case_pair(c) else {
                return c;
            };
            let upper = if uppers == upper_quota {
                false
            } else if lowers == lower_quota {
                true
            } else {
                source.next_is_upper()
            };
            if upper {
                uppers += 1;
                upper_form
            } else {
                lowers += 1;
                lower_form
            }
        })
        .collect()
}

/// Upper and lower form of `c`, when both are single distinct characters.
fn case_pair(c: char) -> Option<(char, char)> {
    let upper = single_char(c.to_uppercase())?;
    let lower = single_char(c.to_lowercase())?;
    (upper != lower).then_some((upper, lower))
}

fn single_char(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Replays a fixed list of decisions, then answers lowercase.
    struct Scripted(std::vec::IntoIter<bool>);

    impl Scripted {
        fn new(decisions: &[bool]) -> Self {
            Self(decisions.to_vec().into_iter())
        }
    }

    impl CaseSource for Scripted {
        fn next_is_upper(&mut self) -> bool {
            self.0.next().unwrap_or(false)
        }
    }

    /// Uppercase and lowercase counts among cased letters only.
    fn count_cases(s: &str) -> (usize, usize) {
        let cased = || s.chars().filter(|&c| case_pair(c).is_some());
        (cased().filter(|c| c.is_uppercase()).count(), cased().filter(|c| c.is_lowercase()).count())
    }

    fn assert_invariants(input: &str, output: &str) {
        assert_eq!(output.chars().count(), input.chars().count());
        assert_eq!(output.to_lowercase(), input.to_lowercase());
        for (a, b) in input.chars().zip(output.chars()) {
            if case_pair(a).is_none() {
                assert_eq!(a, b);
            }
        }
        let letters = input.chars().filter(|&c| case_pair(c).is_some()).count();
        assert_eq!(count_cases(output), (letters.div_ceil(2), letters / 2), "output: {:?}", output);
    }

    #[test]
    fn test_scripted_alternating() {
        let out = sarcastic_spongebob_with("abcd", &mut Scripted::new(&[true, false, true, false]));
        assert_eq!(out, "AbCd");
    }

    #[test]
    fn test_upper_quota_forces_lower() {
        let out = sarcastic_spongebob_with("abcd", &mut Scripted::new(&[true, true, true, true]));
        assert_eq!(out, "ABcd");
    }

    #[test]
    fn test_lower_quota_forces_upper() {
        let out = sarcastic_spongebob_with("abcde", &mut Scripted::new(&[false, false, false]));
        assert_eq!(out, "abCDE");
    }

    #[test]
    fn test_non_alpha_in_place() {
        let out = sarcastic_spongebob_with("a b!", &mut Scripted::new(&[false]));
        assert_eq!(out, "a B!");
    }

    #[test]
    fn test_empty_and_no_letters() {
        assert_eq!(sarcastic_spongebob(""), "");
        assert_eq!(sarcastic_spongebob("123 !? \n"), "123 !? \n");
    }

    #[test]
    fn test_single_letter_is_upper() {
        assert_eq!(sarcastic_spongebob("a"), "A");
        assert_eq!(sarcastic_spongebob("-z-"), "-Z-");
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let input = "The quick brown fox jumps over the lazy dog";
        let first = sarcastic_spongebob_with(input, &mut RngCaseSource::new(StdRng::seed_from_u64(42)));
        let second = sarcastic_spongebob_with(input, &mut RngCaseSource::new(StdRng::seed_from_u64(42)));
        assert_eq!(first, second);
        assert_invariants(input, &first);
    }

    #[test]
    fn test_invariants_hold() {
        let inputs = ["hello world", "Hello, World! 123", "ABCDEFG", "x", "tab\tand\nnewline", "café au lait"];
        for seed in 0..20 {
            let mut source = RngCaseSource::new(StdRng::seed_from_u64(seed));
            for input in inputs {
                let out = sarcastic_spongebob_with(input, &mut source);
                assert_invariants(input, &out);
            }
        }
    }

    #[test]
    fn test_lowercase_input_always_changes() {
        // at least one letter must come out uppercase
        let input = "hello world";
        let out = sarcastic_spongebob(input);
        assert_eq!(out.to_lowercase(), input);
        assert_ne!(out, input);
    }

    /// Always answers uppercase.
    struct Shouting;

    impl CaseSource for Shouting {
        fn next_is_upper(&mut self) -> bool {
            true
        }
    }

    #[test]
    fn test_uncased_letters_pass_through() {
        assert_eq!(sarcastic_spongebob_with("中文ab", &mut Shouting), "中文Ab");
        assert_eq!(sarcastic_spongebob_with("ßßab", &mut Shouting), "ßßAb");
        assert_eq!(sarcastic_spongebob_with("ß", &mut Shouting), "ß");
    }

    #[test]
    fn test_exact_split_with_uncased_letters() {
        let inputs = ["中文ab", "ßßab", "straße und 東京 tokyo", "ǆemal"];
        for input in inputs {
            assert_invariants(input, &sarcastic_spongebob_with(input, &mut Shouting));
            assert_invariants(input, &sarcastic_spongebob_with(input, &mut Scripted::new(&[])));
            for seed in 0..10 {
                let out = sarcastic_spongebob_with(input, &mut RngCaseSource::new(StdRng::seed_from_u64(seed)));
                assert_invariants(input, &out);
            }
        }
    }

    #[test]
    fn test_case_pair() {
        assert_eq!(case_pair('a'), Some(('A', 'a')));
        assert_eq!(case_pair('É'), Some(('É', 'é')));
        assert_eq!(case_pair('ß'), None);
        assert_eq!(case_pair('中'), None);
        assert_eq!(case_pair('7'), None);
    }
}
