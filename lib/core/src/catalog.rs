use crate::vector::SemanticVector;
use crate::{Error, Result};
use serde::Serialize;

/// Base URL of the GameNet page for a game id
pub const GAMENET_GAMES_URL: &str = "http://gamecip-projects.soe.ucsc.edu/gamenet/games/";

/// A game with its precomputed LSA vector
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub vector: SemanticVector,
}

impl CatalogEntry {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, vector: SemanticVector) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            vector,
        }
    }

    /// Build an entry from a serialized record.
    ///
    /// `encoding` is the comma-separated raw LSA vector; its first value is
    /// dimension 0 and is discarded. `line` is only used for error reporting.
    pub fn from_record(line: usize, id: &str, title: &str, encoding: &str) -> Result<Self> {
        let malformed = |reason: String| Error::MalformedCatalogRecord { line, reason };

        if id.trim().is_empty() {
            return Err(malformed("empty id".to_string()));
        }

        let raw = encoding
            .split(',')
            .map(|value| {
                let value = value.trim();
                match value.parse::<f32>() {
                    Ok(w) if w.is_finite() => Ok(w),
                    _ => Err(malformed(format!("invalid vector component {:?}", value))),
                }
            })
            .collect::<Result<Vec<f32>>>()?;

        if raw.len() < 2 {
            return Err(malformed(format!(
                "vector needs at least 2 components, got {}",
                raw.len()
            )));
        }

        Ok(Self::new(id.trim(), title, SemanticVector::from_raw(&raw)))
    }

    /// Link to this game's GameNet entry
    pub fn gamenet_url(&self) -> String {
        format!("{}{}", GAMENET_GAMES_URL, self.id)
    }
}

/// Ordered, read-only collection of catalog entries.
///
/// Order is the order of the source records. It carries no meaning except
/// as the tie-break between equal similarity scores.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    dim: usize,
}

impl Catalog {
    /// Every entry must share one dimensionality
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let dim = entries.first().map(|e| e.vector.dim()).unwrap_or(0);
        if let Some(bad) = entries.iter().find(|e| e.vector.dim() != dim) {
            return Err(Error::VectorShapeMismatch {
                expected: dim,
                actual: bad.vector.dim(),
            });
        }
        Ok(Self { entries, dim })
    }

    /// Dimensionality of every entry's vector, 0 for an empty catalog
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
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
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    #[inline]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Titles in catalog order, empty titles skipped
    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .map(|e| e.title.as_str())
            .filter(|t| !t.is_empty())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
