//! # GameSage Text
//!
//! Normalization of free text into the token stream the LSA models were
//! trained on.
//!
//! - [`TextNormalizer`] - the full pipeline, applied to every query
//! - [`PhraseTokenizer`] - joins multiword titles and platform names into single tokens
//! - [`StopwordList`] - stopword and single-letter filtering
//! - [`WordNetLemmatizer`] - dictionary-backed noun lemmatization
//!
//! ## Example
//!
//! ```rust
//! use gamesage_text::{StopwordList, TextNormalizer};
//!
//! let normalizer = TextNormalizer::builder()
//!     .titles(["Dragon Quest", "Dragon Quest IX"])
//!     .stopwords(StopwordList::new(["i", "a", "lot"]))
//!     .build();
//!
//! assert_eq!(normalizer.normalize("I love Dragon Quest IX a lot!"), "love dragon_quest_ix");
//! ```

pub mod lemmatize;
pub mod normalize;
pub mod phrases;
pub mod stopwords;

pub use lemmatize::{Lemmatize, WordNetLemmatizer};
pub use normalize::{NormalizerBuilder, TextNormalizer, MAX_LEMMA_PASSES};
pub use phrases::PhraseTokenizer;
pub use stopwords::StopwordList;
