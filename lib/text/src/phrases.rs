//! Multiword phrase tokenization
//!
//! Collapses known multiword phrases (game titles, platform names) into a
//! single underscore-joined token so that the term vocabulary sees
//! `super_mario_bros` instead of three unrelated words.
//!
//! Precedence rules:
//! 1. Phrases with more words are applied before phrases with fewer words
//! 2. Phrases with the same word count are applied in the order supplied
//! 3. Each phrase claims all of its non-overlapping occurrences, leftmost first
//!
//! The text is scanned once. Candidate matches are gathered through an index
//! keyed by each phrase's first word and then resolved in precedence order,
//! which gives the same result as substituting the phrases one at a time.

use ahash::{AHashMap, AHashSet};
use tracing::debug;

#[derive(Debug, Clone)]
struct Phrase {
    words: Vec<String>,
    token: String,
}

impl Phrase {
    fn len(&self) -> usize {
        self.words.len()
    }

    fn matches_at(&self, tokens: &[&str], start: usize) -> bool {
        tokens.len() >= start + self.len()
            && self
                .words
                .iter()
                .zip(&tokens[start..])
                .all(|(word, token)| word == token)
    }
}

/// Joins multiword phrases into single tokens
#[derive(Debug, Clone, Default)]
pub struct PhraseTokenizer {
    /// Sorted by precedence; the index is the phrase's rank
    phrases: Vec<Phrase>,
    by_first_word: AHashMap<String, Vec<usize>>,
    skipped: usize,
}

impl PhraseTokenizer {
    /// Build a tokenizer from raw phrases.
    ///
    /// Phrases are lowercased and split on whitespace. Single-word phrases are
    /// ignored, duplicates are kept once. A phrase containing characters that
    /// never survive normalization (anything outside printable ASCII) can
    /// never match, so it is skipped and counted in [`skipped`](Self::skipped).
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = AHashSet::new();
        let mut collected = Vec::new();
        let mut skipped = 0;

        for raw in phrases {
            let lowered = raw.as_ref().to_lowercase();
            let words: Vec<String> = lowered.split_whitespace().map(str::to_string).collect();
            if words.len() < 2 {
                continue;
            }
            if !words.iter().all(|w| w.chars().all(|c| c.is_ascii_graphic())) {
                debug!(phrase = %lowered, "skipping phrase with unmatchable characters");
                skipped += 1;
                continue;
            }
            let token = words.join("_");
            if seen.insert(token.clone()) {
                collected.push(Phrase { words, token });
            }
        }

        // Stable: equal word counts keep their supplied order
        collected.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut by_first_word: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (rank, phrase) in collected.iter().enumerate() {
            by_first_word
                .entry(phrase.words[0].clone())
                .or_default()
                .push(rank);
        }

        Self {
            phrases: collected,
            by_first_word,
            skipped,
        }
    }

    /// Number of usable multiword phrases
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Number of phrases dropped because they could never match
    #[inline]
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Replace every phrase occurrence in whitespace-separated `text` with its
    /// underscore-joined token. The output is single-space separated.
    pub fn apply(&self, text: &str) -> String {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if self.phrases.is_empty() || tokens.len() < 2 {
            return tokens.join(" ");
        }

        // (rank, start) pairs; sorting them yields precedence order
        let mut candidates: Vec<(usize, usize)> = Vec::new();
        for (start, token) in tokens.iter().enumerate() {
            if let Some(ranks) = self.by_first_word.get(*token) {
                candidates.extend(
                    ranks
                        .iter()
                        .filter(|&&rank| self.phrases[rank].matches_at(&tokens, start))
                        .map(|&rank| (rank, start)),
                );
            }
        }
        if candidates.is_empty() {
            return tokens.join(" ");
        }
        candidates.sort_unstable();

        let mut claimed = vec![false; tokens.len()];
        let mut replaced_at: Vec<Option<usize>> = vec![None; tokens.len()];
        for (rank, start) in candidates {
            let end = start + self.phrases[rank].len();
            if claimed[start..end].iter().any(|&c| c) {
                continue;
            }
            claimed[start..end].iter_mut().for_each(|c| *c = true);
            replaced_at[start] = Some(rank);
        }

        let mut out: Vec<&str> = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            match replaced_at[i] {
                Some(rank) => {
                    let phrase = &self.phrases[rank];
                    out.push(&phrase.token);
                    i += phrase.len();
                }
                None => {
                    out.push(tokens[i]);
                    i += 1;
                }
            }
        }
        out.join(" ")
    }
}
