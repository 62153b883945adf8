//! Stopword filtering

use ahash::AHashSet;

/// A closed set of words that carry no topical meaning
#[derive(Debug, Clone, Default)]
pub struct StopwordList {
    words: AHashSet<String>,
}

impl StopwordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop stopwords and single-character tokens
    pub fn filter<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tokens
            .into_iter()
            .map(Into::into)
            .filter(|t| t.chars().nth(1).is_some() && !self.contains(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_removes_stopwords() {
        let stopwords = StopwordList::new(["the", "of"]);
        let tokens = stopwords.filter(["the", "legend", "of", "zelda"]);
        assert_eq!(tokens, vec!["legend", "zelda"]);
    }

    #[test]
    fn test_filter_removes_single_characters() {
        let stopwords = StopwordList::default();
        let tokens = stopwords.filter(["x", "xbox", "3", "ds"]);
        assert_eq!(tokens, vec!["xbox", "ds"]);
    }

    #[test]
    fn test_entries_are_trimmed_and_lowercased() {
        let stopwords = StopwordList::new(["The\r", "", "  "]);
        assert_eq!(stopwords.len(), 1);
        assert!(stopwords.contains("the"));
    }
}
