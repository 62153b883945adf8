//! # GameSage Core
//!
//! Folds free text into a pre-trained LSA space and ranks a fixed game
//! catalog against it.
//!
//! - [`Catalog`] - games with their precomputed semantic vectors
//! - [`TermVocabulary`], [`TfIdfModel`], [`LsiProjection`] - the pre-trained models
//! - [`FoldInEngine`] - normalized text to [`SemanticVector`]
//! - [`SimilarityRanker`] - most and least related catalog entries
//! - [`GameSage`] - the whole query path behind one call
//!
//! ## Example
//!
//! ```rust
//! use gamesage_core::{Catalog, CatalogEntry, SemanticVector, SimilarityRanker};
//!
//! let catalog = Catalog::new(vec![
//!     CatalogEntry::from_record(1, "g1", "Tetris", "0.5,1.0,0.0").unwrap(),
//!     CatalogEntry::from_record(2, "g2", "Doom", "0.5,0.0,1.0").unwrap(),
//! ]).unwrap();
//!
//! let query = SemanticVector::new(vec![0.9, 0.1]);
//! let ranking = SimilarityRanker::default().rank(&query, &catalog).unwrap();
//! assert_eq!(ranking.most_related[0].id, "g1");
//! assert_eq!(ranking.least_related[0].id, "g2");
//! ```

pub mod catalog;
pub mod error;
pub mod fold_in;
pub mod projection;
pub mod rank;
pub mod sage;
pub mod sparse;
pub mod vector;
pub mod vocabulary;
pub mod weighting;

pub use catalog::{Catalog, CatalogEntry, GAMENET_GAMES_URL};
pub use error::{Error, Result};
pub use fold_in::FoldInEngine;
pub use projection::LsiProjection;
pub use rank::{RankedResult, Ranking, SimilarityRanker, DEFAULT_RANKING_LIMIT};
pub use sage::{GameSage, QueryAnswer};
pub use sparse::SparseVector;
pub use vector::SemanticVector;
pub use vocabulary::TermVocabulary;
pub use weighting::TfIdfModel;
