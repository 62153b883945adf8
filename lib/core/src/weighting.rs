//! TF-IDF term weighting
//!
//! `w(t) = tf(t) * log2(N / df(t))`, optionally L2-normalized. Terms without a
//! document frequency, and weights that vanish, are dropped.

use crate::sparse::SparseVector;
use crate::{Error, Result};
use ahash::AHashMap;

/// Weights smaller than this are treated as zero
const EPSILON: f32 = 1e-12;

/// Pre-trained TF-IDF model
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    idfs: AHashMap<u32, f32>,
    normalize: bool,
}

impl TfIdfModel {
    /// Build from corpus statistics.
    ///
    /// `dfs` maps term ids to the number of documents containing them; every
    /// count must lie in `1..=num_docs`.
    pub fn from_document_frequencies<I>(num_docs: u64, dfs: I, normalize: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, u64)>,
    {
        if num_docs == 0 {
            return Err(Error::InvalidModel("tf-idf model has no documents".to_string()));
        }

        let mut idfs = AHashMap::new();
        for (id, df) in dfs {
            if df == 0 || df > num_docs {
                return Err(Error::InvalidModel(format!(
                    "document frequency {} of term {} outside 1..={}",
                    df, id, num_docs
                )));
            }
            idfs.insert(id, (num_docs as f64 / df as f64).log2() as f32);
        }

        Ok(Self { idfs, normalize })
    }

    #[inline]
    pub fn idf(&self, id: u32) -> Option<f32> {
        self.idfs.get(&id).copied()
    }

    #[inline]
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.idfs.len()
    }

    /// Reweight a term-frequency vector
    pub fn transform(&self, bow: &SparseVector) -> SparseVector {
        let weighted = SparseVector::from_pairs(bow.iter().filter_map(|(id, tf)| {
            self.idf(id)
                .filter(|idf| idf.abs() > EPSILON)
                .map(|idf| (id, tf * idf))
        }));

        if !self.normalize {
            return weighted;
        }

        let norm = weighted.norm();
        if norm <= EPSILON {
            return SparseVector::default();
        }
        SparseVector::from_pairs(
            weighted
                .iter()
                .map(|(id, w)| (id, w / norm))
                .filter(|(_, w)| w.abs() > EPSILON),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idf() {
        let model = TfIdfModel::from_document_frequencies(8, [(0, 1), (1, 4), (2, 8)], false).unwrap();
        assert!((model.idf(0).unwrap() - 3.0).abs() < 1e-6);
        assert!((model.idf(1).unwrap() - 1.0).abs() < 1e-6);
        assert_eq!(model.idf(2), Some(0.0));
        assert_eq!(model.idf(3), None);
    }

    #[test]
    fn test_transform_unnormalized() {
        let model = TfIdfModel::from_document_frequencies(8, [(0, 1), (1, 4), (2, 8)], false).unwrap();
        let bow = SparseVector::from_pairs([(0, 2.0), (1, 1.0), (2, 5.0), (7, 1.0)]);
        let weighted = model.transform(&bow);
        // Term 2 appears everywhere and term 7 is unknown
        assert_eq!(weighted.iter().collect::<Vec<_>>(), vec![(0, 6.0), (1, 1.0)]);
    }

    #[test]
    fn test_transform_normalized() {
        let model = TfIdfModel::from_document_frequencies(8, [(0, 1), (1, 4)], true).unwrap();
        let weighted = model.transform(&SparseVector::from_pairs([(0, 1.0), (1, 4.0)]));
        // Raw weights (3, 4) scale to (0.6, 0.8)
        assert!((weighted.get(0) - 0.6).abs() < 1e-6);
        assert!((weighted.get(1) - 0.8).abs() < 1e-6);
        assert!((weighted.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_transform_empty() {
        let model = TfIdfModel::from_document_frequencies(8, [(0, 1)], true).unwrap();
        assert!(model.transform(&SparseVector::default()).is_empty());
    }

    #[test]
    fn test_invalid_statistics_rejected() {
        assert!(TfIdfModel::from_document_frequencies(0, Vec::new(), true).is_err());
        assert!(TfIdfModel::from_document_frequencies(4, [(0, 0)], true).is_err());
        assert!(TfIdfModel::from_document_frequencies(4, [(0, 5)], true).is_err());
    }
}
