//! Dictionary-backed lemmatization
//!
//! Follows WordNet's noun morphology: an irregular-form exception table plus
//! suffix detachment rules, with every candidate checked against a lexicon of
//! known base forms.

use ahash::{AHashMap, AHashSet};

/// Noun suffix detachment rules, `(suffix, replacement)`
const NOUN_SUFFIX_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Maps a word to its dictionary base form.
///
/// Implementations return the word unchanged when they know no better form.
pub trait Lemmatize: Send + Sync {
    fn lemmatize(&self, word: &str) -> String;
}

/// WordNet-style noun lemmatizer.
///
/// An empty lexicon knows no base forms, so it leaves every word unchanged.
#[derive(Debug, Clone, Default)]
pub struct WordNetLemmatizer {
    lexicon: AHashSet<String>,
    exceptions: AHashMap<String, Vec<String>>,
}

impl WordNetLemmatizer {
    /// Build from a list of base forms
    pub fn from_lexicon<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lexicon: words.into_iter().map(Into::into).collect(),
            exceptions: AHashMap::new(),
        }
    }

    /// Add irregular forms, e.g. `("geese", ["goose"])`
    #[must_use]
    pub fn with_exceptions<I, B>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = (String, B)>,
        B: IntoIterator<Item = String>,
    {
        for (inflected, bases) in exceptions {
            self.exceptions
                .entry(inflected)
                .or_default()
                .extend(bases);
        }
        self
    }

    #[inline]
    #[must_use]
    pub fn lexicon_size(&self) -> usize {
        self.lexicon.len()
    }

    #[inline]
    #[must_use]
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// All forms `word` might be an inflection of, the word itself first
    fn candidates(&self, word: &str) -> Vec<String> {
        let mut forms = vec![word.to_string()];
        match self.exceptions.get(word) {
            Some(bases) => forms.extend(bases.iter().cloned()),
            None => forms.extend(NOUN_SUFFIX_RULES.iter().filter_map(|&(suffix, replacement)| {
                word.strip_suffix(suffix)
                    .map(|stem| format!("{stem}{replacement}"))
            })),
        }
        forms
    }
}

impl Lemmatize for WordNetLemmatizer {
    /// Shortest candidate found in the lexicon, first one on ties
    fn lemmatize(&self, word: &str) -> String {
        let mut best: Option<String> = None;
        for form in self.candidates(word) {
            if !self.lexicon.contains(&form) {
                continue;
            }
            if best.as_ref().map_or(true, |b| form.len() < b.len()) {
                best = Some(form);
            }
        }
        best.unwrap_or_else(|| word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer() -> WordNetLemmatizer {
        WordNetLemmatizer::from_lexicon([
            "game", "box", "city", "wolf", "church", "woman", "goose", "glass",
        ])
        .with_exceptions([("geese".to_string(), vec!["goose".to_string()])])
    }

    #[test]
    fn test_suffix_rules() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("games"), "game");
        assert_eq!(l.lemmatize("boxes"), "box");
        assert_eq!(l.lemmatize("cities"), "city");
        assert_eq!(l.lemmatize("wolves"), "wolf");
        assert_eq!(l.lemmatize("churches"), "church");
        assert_eq!(l.lemmatize("women"), "woman");
    }

    #[test]
    fn test_exceptions() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("geese"), "goose");
        assert_eq!(l.exception_count(), 1);
    }

    #[test]
    fn test_base_form_unchanged() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("glass"), "glass");
        assert_eq!(l.lemmatize("game"), "game");
    }

    #[test]
    fn test_unknown_word_unchanged() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("zelda"), "zelda");
        assert_eq!(l.lemmatize("rpgs"), "rpgs");
    }

    #[test]
    fn test_shortest_candidate_wins() {
        let l = WordNetLemmatizer::from_lexicon(["games", "game"]);
        assert_eq!(l.lemmatize("games"), "game");
    }

    #[test]
    fn test_empty_lexicon_is_identity() {
        let l = WordNetLemmatizer::default();
        assert_eq!(l.lexicon_size(), 0);
        assert_eq!(l.lemmatize("cities"), "cities");
    }
}
