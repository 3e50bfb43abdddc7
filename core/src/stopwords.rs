use crate::tokenizer::tokenize;
use std::collections::HashSet;

/// Terms dropped from both documents and queries. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    pub fn from_text(text: &str) -> Self {
        let mut stop_words = Self::new();
        stop_words.extend_from_text(text);
        stop_words
    }

    /// Tokenize `text` and add every token. Re-adding a word is a no-op.
    pub fn extend_from_text(&mut self, text: &str) {
        self.words.extend(tokenize(text));
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Drop stop words from `tokens`, keeping the order of the rest.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }

    /// Tokenize and filter in one step.
    pub fn split_into_words_no_stop(&self, text: &str) -> Vec<String> {
        self.filter(tokenize(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_is_idempotent() {
        let mut sw = StopWords::from_text("and in on");
        sw.extend_from_text("and in on");
        assert_eq!(sw.len(), 3);
    }

    #[test]
    fn filter_keeps_order() {
        let sw = StopWords::from_text("in the");
        let words = sw.split_into_words_no_stop("a cat lives in the city");
        assert_eq!(words, vec!["a", "cat", "lives", "city"]);
    }

    #[test]
    fn case_sensitive() {
        let sw = StopWords::from_text("the");
        assert!(sw.contains("the"));
        assert!(!sw.contains("The"));
    }
}
