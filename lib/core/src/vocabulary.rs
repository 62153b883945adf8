use crate::sparse::SparseVector;
use ahash::AHashMap;

/// Closed mapping from normalized tokens to term ids
#[derive(Debug, Clone, Default)]
pub struct TermVocabulary {
    token2id: AHashMap<String, u32>,
}

impl TermVocabulary {
    pub fn new<I>(token2id: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        Self {
            token2id: token2id.into_iter().collect(),
        }
    }

    #[inline]
    pub fn id(&self, token: &str) -> Option<u32> {
        self.token2id.get(token).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.token2id.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token2id.is_empty()
    }

    /// Largest term id, `None` for an empty vocabulary
    pub fn max_id(&self) -> Option<u32> {
        self.token2id.values().copied().max()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.token2id.keys().map(String::as_str)
    }

    /// Term-frequency vector for `tokens`; unknown tokens are dropped
    pub fn doc2bow<'a, I>(&self, tokens: I) -> SparseVector
    where
        I: IntoIterator<Item = &'a str>,
    {
        SparseVector::from_pairs(
            tokens
                .into_iter()
                .filter_map(|token| self.id(token))
                .map(|id| (id, 1.0)),
        )
    }
}
