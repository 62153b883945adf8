use serde::{Deserialize, Serialize};

/// A sparse vector over term ids, entries sorted by id with no duplicates.
///
/// Used for bag-of-words counts and their TF-IDF reweighting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SparseVector {
    entries: Vec<(u32, f32)>,
}

impl SparseVector {
    /// Build from arbitrary `(term id, weight)` pairs; weights of repeated
    /// ids are summed
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, f32)>,
    {
        let mut entries: Vec<(u32, f32)> = pairs.into_iter().collect();
        entries.sort_by_key(|&(id, _)| id);
        entries.dedup_by(|next, kept| {
            if next.0 == kept.0 {
                kept.1 += next.1;
                true
            } else {
                false
            }
        });
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (u32, f32)> + '_ {
        self.entries.iter().copied()
    }

    /// Weight of `id`, 0.0 when absent
    pub fn get(&self, id: u32) -> f32 {
        self.entries
            .binary_search_by_key(&id, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_sorts_and_merges() {
        let v = SparseVector::from_pairs([(5, 1.0), (2, 1.0), (5, 2.0)]);
        assert_eq!(v.len(), 2);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![(2, 1.0), (5, 3.0)]);
        assert_eq!(v.get(5), 3.0);
        assert_eq!(v.get(3), 0.0);
    }

    #[test]
    fn test_norm() {
        let v = SparseVector::from_pairs([(0, 3.0), (1, 4.0)]);
        assert!((v.norm() - 5.0).abs() < 1e-6);
        assert_eq!(SparseVector::default().norm(), 0.0);
    }
}
