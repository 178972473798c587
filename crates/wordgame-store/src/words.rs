//! The pool of secret words new games draw from.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::WordListError;

/// Words used when no word file is configured.
const BUILTIN_WORDS: &[&str] = &[
    "APPLE", "BANANA", "CHERRY", "ORANGE", "GRAPE", "LEMON", "MANGO",
    "PEACH", "PLUM", "KIWI", "RUST", "CARGO", "TRAIT", "BORROW", "MUTEX",
    "THREAD", "SOCKET", "BUFFER", "COMPILER", "PATTERN",
];

/// A validated, non-empty list of uppercase words.
///
/// Every word is trimmed, checked to be ASCII letters only, and uppercased
/// on construction, so the registry can trust the word it picks without
/// re-validating per game or per guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Builds a list from any iterable of strings.
    ///
    /// # Errors
    /// - [`WordListError::Empty`] if there are no words
    /// - [`WordListError::EmptyWord`] if a word is blank
    /// - [`WordListError::InvalidWord`] if a word has non-letters
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// Parses a word file: one word per line. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn parse(text: &str) -> Result<Self, WordListError> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// The built-in list.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Picks a word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // `new` rejects empty lists, so there is always a word to pick.
        self.words.choose(rng).map_or("", String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(word: &str) -> Result<String, WordListError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(WordListError::EmptyWord);
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(WordListError::InvalidWord(word.to_string()));
    }
    Ok(word.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_new_uppercases_words() {
        let list = WordList::new(["apple", "Pear"]).unwrap();
        assert_eq!(list.words(), ["APPLE", "PEAR"]);
    }

    #[test]
    fn test_new_empty_list_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(WordList::new(empty), Err(WordListError::Empty));
    }

    #[test]
    fn test_new_blank_word_rejected() {
        assert_eq!(
            WordList::new(["apple", "  "]),
            Err(WordListError::EmptyWord)
        );
    }

    #[test]
    fn test_new_non_letters_rejected() {
        assert_eq!(
            WordList::new(["ice cream"]),
            Err(WordListError::InvalidWord("ice cream".into()))
        );
        assert!(WordList::new(["café"]).is_err());
        assert!(WordList::new(["r2d2"]).is_err());
    }

    #[test]
    fn test_parse_skips_blank_lines_and_comments() {
        let list = WordList::parse("# fruit\napple\n\n  banana  \n").unwrap();
        assert_eq!(list.words(), ["APPLE", "BANANA"]);
    }

    #[test]
    fn test_parse_only_comments_is_empty() {
        assert_eq!(WordList::parse("# nothing\n\n"), Err(WordListError::Empty));
    }

    #[test]
    fn test_builtin_words_pass_validation() {
        let builtin = WordList::builtin();
        let validated = WordList::new(builtin.words()).unwrap();
        assert_eq!(builtin, validated);
    }

    #[test]
    fn test_choose_single_word_always_returns_it() {
        let list = WordList::new(["apple"]).unwrap();
        let mut rng = rand::rng();
        for _ in 0..10 {
            assert_eq!(list.choose(&mut rng), "APPLE");
        }
    }

    #[test]
    fn test_choose_seeded_rng_picks_listed_words() {
        use rand::SeedableRng;

        let list = WordList::new(["apple", "pear", "plum"]).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = list.choose(&mut rng);
            assert!(list.words().iter().any(|w| w == word), "{word}");
        }
    }

    #[test]
    fn test_choose_covers_every_word() {
        let list = WordList::new(["a", "b", "c"]).unwrap();
        let mut rng = rand::rng();
        let seen: HashSet<_> =
            (0..500).map(|_| list.choose(&mut rng).to_string()).collect();
        assert_eq!(seen.len(), 3);
    }
}
