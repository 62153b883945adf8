//! Query text normalization
//!
//! Reproduces the preprocessing the corpus went through before the LSA models
//! were trained. The stage order matters and must not change:
//!
//! 1. Drop characters outside printable ASCII
//! 2. Newlines, carriage returns and tabs become spaces
//! 3. `_ . , ;` become spaces
//! 4. Lowercase
//! 5. Collapse whitespace
//! 6. Join multiword catalog titles
//! 7. Join multiword platform names
//! 8. Remaining symbols become spaces
//! 9. Collapse whitespace
//! 10. Remove stopwords and single characters
//! 11. Lemmatize
//! 12. Remove stopwords and single characters again

use crate::lemmatize::{Lemmatize, WordNetLemmatizer};
use crate::phrases::PhraseTokenizer;
use crate::stopwords::StopwordList;
use ahash::AHashMap;
use std::sync::Arc;

/// Upper bound on lemmatizing a token's own output until it stops changing
pub const MAX_LEMMA_PASSES: usize = 5;

/// Characters removed after phrase tokenization
const SYMBOLS: &[char] = &[
    '[', ']', '\'', '"', ':', '&', '(', ')', '\\', '/', '*', '!', '?', '$', '^', '~', '+', '=',
    '{', '}', '`', '|', '#',
];

/// Immutable normalization pipeline, shared by all requests
#[derive(Clone)]
pub struct TextNormalizer {
    titles: PhraseTokenizer,
    platforms: PhraseTokenizer,
    stopwords: StopwordList,
    lemmatizer: Arc<dyn Lemmatize>,
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("titles", &self.titles.len())
            .field("platforms", &self.platforms.len())
            .field("stopwords", &self.stopwords.len())
            .finish_non_exhaustive()
    }
}

impl TextNormalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    /// Multiword titles the normalizer joins
    pub fn title_phrases(&self) -> &PhraseTokenizer {
        &self.titles
    }

    /// Multiword platform names the normalizer joins
    pub fn platform_phrases(&self) -> &PhraseTokenizer {
        &self.platforms
    }

    /// Normalize raw user text into space-separated model tokens.
    ///
    /// Returns an empty string when nothing survives, e.g. stopword-only input.
    pub fn normalize(&self, raw: &str) -> String {
        // Stages 1-4 act on single characters
        let text: String = raw
            .chars()
            .filter(|&c| is_printable(c))
            .map(|c| match c {
                '\n' | '\r' | '\t' => ' ',
                '_' | '.' | ',' | ';' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        let text = collapse_whitespace(&text);

        let text = self.titles.apply(&text);
        let text = self.platforms.apply(&text);

        let text = text.replace(SYMBOLS, " ");
        let tokens = self.stopwords.filter(text.split_whitespace());

        let tokens = self.lemmatize_tokens(tokens);
        self.stopwords.filter(tokens).join(" ")
    }

    /// Lemmatize with a request-scoped memo so repeated tokens cost one lookup
    fn lemmatize_tokens(&self, tokens: Vec<String>) -> Vec<String> {
        let mut memo: AHashMap<String, String> = AHashMap::new();
        tokens
            .into_iter()
            .map(|token| {
                if let Some(lemma) = memo.get(&token) {
                    return lemma.clone();
                }
                let lemma = self.base_form(&token);
                memo.insert(token, lemma.clone());
                lemma
            })
            .collect()
    }

    /// Lemmatize until the form stops changing, at most `MAX_LEMMA_PASSES` times
    fn base_form(&self, word: &str) -> String {
        let mut current = word.to_string();
        for _ in 0..MAX_LEMMA_PASSES {
            let next = self.lemmatizer.lemmatize(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }
}

/// Printable ASCII, including the whitespace characters
#[inline]
fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

#[inline]
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Builder for [`TextNormalizer`]
#[derive(Default)]
pub struct NormalizerBuilder {
    titles: Vec<String>,
    platforms: Vec<String>,
    stopwords: StopwordList,
    lemmatizer: Option<Arc<dyn Lemmatize>>,
}

impl NormalizerBuilder {
    /// Catalog titles, in catalog order
    pub fn titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.titles = titles.into_iter().map(|t| t.as_ref().to_string()).collect();
        self
    }

    pub fn platform_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.platforms = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        self
    }

    pub fn stopwords(mut self, stopwords: StopwordList) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatize>) -> Self {
        self.lemmatizer = Some(lemmatizer);
        self
    }

    pub fn build(self) -> TextNormalizer {
        TextNormalizer {
            titles: PhraseTokenizer::new(self.titles),
            platforms: PhraseTokenizer::new(self.platforms),
            stopwords: self.stopwords,
            lemmatizer: self
                .lemmatizer
                .unwrap_or_else(|| Arc::new(WordNetLemmatizer::default()) as Arc<dyn Lemmatize>),
        }
    }
}
