//! # GameSage
//!
//! Finds the games in a fixed catalog that are most and least related to a
//! piece of free text.
//!
//! Text is normalized into the token stream an LSA model was trained on,
//! folded into that model's semantic space and compared by cosine
//! similarity against every catalog entry's precomputed vector.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! gamesage --model-dir ./static --http-port 5000
//! curl 'http://localhost:5000/query?text=space%20shooter'
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use gamesage::prelude::*;
//!
//! let sage = ModelBundle::load(&ModelPaths::in_dir("./static"))?.into_sage()?;
//! let answer = sage.answer_query("I love Dragon Quest IX a lot!")?;
//! for game in &answer.most_related {
//!     println!("{} {} {:.3}", game.id, game.title, game.score);
//! }
//! # Ok::<(), gamesage::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! - `gamesage-text` - text normalization (phrases, stopwords, lemmatization)
//! - `gamesage-core` - catalog, TF-IDF/LSI fold-in, similarity ranking
//! - `gamesage-model` - loading the catalog and models from disk
//! - `gamesage-api` - GameNet-compatible REST API

// Re-export core types
pub use gamesage_core::{
    Catalog, CatalogEntry, FoldInEngine, GameSage, QueryAnswer, RankedResult, Ranking,
    SemanticVector, SimilarityRanker, Error, Result,
};

// Re-export text normalization
pub use gamesage_text::{StopwordList, TextNormalizer, WordNetLemmatizer};

// Re-export loading
pub use gamesage_model::{ModelBundle, ModelPaths};

// Re-export API
pub use gamesage_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, CatalogEntry, FoldInEngine, GameSage, QueryAnswer, RankedResult, Ranking,
        SemanticVector, SimilarityRanker, Error, Result,
        StopwordList, TextNormalizer, WordNetLemmatizer,
        ModelBundle, ModelPaths,
        RestApi,
    };
}
