use serde::{Deserialize, Serialize};

/// A point in the reduced LSA space.
///
/// Dimension 0 of the raw model output encodes corpus-wide scale rather than
/// topic, so it is never stored. Position `p` holds dimension `p + 1`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SemanticVector {
    data: Vec<f32>,
}

impl SemanticVector {
    /// Wrap weights that already exclude dimension 0
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Build from a full model output, dropping dimension 0
    #[inline]
    #[must_use]
    pub fn from_raw(raw: &[f32]) -> Self {
        Self {
            data: raw.get(1..).unwrap_or_default().to_vec(),
        }
    }

    /// All-zero vector with `dim` dimensions
    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim],
        }
    }

    /// Number of stored dimensions (raw dimensionality minus one)
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// `(dimension index, weight)` pairs, indices starting at 1
    pub fn dimensions(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.data.iter().enumerate().map(|(p, &w)| (p + 1, w))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&w| w == 0.0)
    }

    /// Cosine similarity, 0.0 when either side has zero norm or the
    /// dimensionalities differ
    #[inline]
    pub fn cosine_similarity(&self, other: &SemanticVector) -> f32 {
        if self.dim() != other.dim() {
            return 0.0;
        }

        // f64 accumulation keeps self-similarity at 1.0
        let mut dot = 0.0f64;
        let mut norm_a = 0.0f64;
        let mut norm_b = 0.0f64;
        for (&a, &b) in self.data.iter().zip(other.data.iter()) {
            let (a, b) = (f64::from(a), f64::from(b));
            dot += a * b;
            norm_a += a * a;
            norm_b += b * b;
        }

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        (dot / (norm_a.sqrt() * norm_b.sqrt())) as f32
    }
}

impl From<Vec<f32>> for SemanticVector {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}
