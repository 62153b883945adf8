//! LSI projection into the reduced semantic space

use crate::sparse::SparseVector;
use crate::{Error, Result};

/// Pre-trained LSI projection.
///
/// Holds the left singular vectors `U` (one row per term, one column per
/// topic). A weighted term vector `x` maps to `U^T x`, divided element-wise by
/// the singular values when the model is scaled.
#[derive(Debug, Clone)]
pub struct LsiProjection {
    num_terms: usize,
    num_topics: usize,
    /// Row-major `num_terms x num_topics`
    u: Vec<f32>,
    singular_values: Vec<f32>,
    scaled: bool,
}

impl LsiProjection {
    pub fn new(
        num_topics: usize,
        rows: Vec<Vec<f32>>,
        singular_values: Vec<f32>,
        scaled: bool,
    ) -> Result<Self> {
        if num_topics == 0 {
            return Err(Error::InvalidModel("projection has no topics".to_string()));
        }
        if !singular_values.is_empty() && singular_values.len() != num_topics {
            return Err(Error::InvalidModel(format!(
                "expected {} singular values, got {}",
                num_topics,
                singular_values.len()
            )));
        }
        if scaled && (singular_values.is_empty() || singular_values.iter().any(|&s| s == 0.0)) {
            return Err(Error::InvalidModel(
                "scaled projection needs non-zero singular values".to_string(),
            ));
        }

        let num_terms = rows.len();
        let mut u = Vec::with_capacity(num_terms * num_topics);
        for (term, row) in rows.into_iter().enumerate() {
            if row.len() != num_topics {
                return Err(Error::InvalidModel(format!(
                    "projection row {} has {} topics, expected {}",
                    term,
                    row.len(),
                    num_topics
                )));
            }
            if row.iter().any(|w| !w.is_finite()) {
                return Err(Error::InvalidModel(format!(
                    "projection row {} has a non-finite weight",
                    term
                )));
            }
            u.extend(row);
        }

        Ok(Self {
            num_terms,
            num_topics,
            u,
            singular_values,
            scaled,
        })
    }

    #[inline]
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.num_terms
    }

    /// Raw output dimensionality, dimension 0 included
    #[inline]
    #[must_use]
    pub fn num_topics(&self) -> usize {
        self.num_topics
    }

    /// Project a weighted term vector. Term ids beyond the projection are
    /// ignored; an empty input projects to all zeros.
    pub fn project(&self, weighted: &SparseVector) -> Vec<f32> {
        let mut topics = vec![0.0f32; self.num_topics];
        for (id, weight) in weighted.iter() {
            let term = id as usize;
            if term >= self.num_terms {
                continue;
            }
            let row = &self.u[term * self.num_topics..(term + 1) * self.num_topics];
            for (topic, &u) in topics.iter_mut().zip(row) {
                *topic += weight * u;
            }
        }

        if self.scaled {
            for (topic, &s) in topics.iter_mut().zip(&self.singular_values) {
                *topic /= s;
            }
        }
        topics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection(scaled: bool) -> LsiProjection {
        LsiProjection::new(
            3,
            vec![
                vec![1.0, 0.0, 2.0],
                vec![0.0, 1.0, -1.0],
            ],
            vec![2.0, 4.0, 1.0],
            scaled,
        )
        .unwrap()
    }

    #[test]
    fn test_project() {
        let p = projection(false);
        let x = SparseVector::from_pairs([(0, 1.0), (1, 2.0)]);
        assert_eq!(p.project(&x), vec![1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_project_scaled() {
        let p = projection(true);
        let x = SparseVector::from_pairs([(0, 1.0), (1, 2.0)]);
        assert_eq!(p.project(&x), vec![0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_unknown_terms_ignored() {
        let p = projection(false);
        let x = SparseVector::from_pairs([(9, 1.0)]);
        assert_eq!(p.project(&x), vec![0.0, 0.0, 0.0]);
        assert_eq!(p.project(&SparseVector::default()), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_invalid_shapes_rejected() {
        assert!(LsiProjection::new(0, vec![], vec![], false).is_err());
        assert!(LsiProjection::new(2, vec![vec![1.0]], vec![], false).is_err());
        assert!(LsiProjection::new(2, vec![vec![1.0, 2.0]], vec![1.0], false).is_err());
        assert!(LsiProjection::new(2, vec![vec![1.0, 2.0]], vec![], true).is_err());
        assert!(LsiProjection::new(2, vec![vec![f32::NAN, 2.0]], vec![], false).is_err());
        assert!(LsiProjection::new(2, vec![vec![1.0, 2.0]], vec![], false).is_ok());
    }
}
