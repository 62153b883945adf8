//! # GameSage Model
//!
//! Loads the game catalog, word lists and pre-trained LSA models from a
//! model directory and wires them into a [`gamesage_core::GameSage`].
//!
//! ```no_run
//! use gamesage_model::{ModelBundle, ModelPaths};
//!
//! let bundle = ModelBundle::load(&ModelPaths::in_dir("./static"))?;
//! let sage = bundle.into_sage()?;
//! let answer = sage.answer_query("space shooter with a ship")?;
//! println!("{:?}", answer.most_related.first());
//! # Ok::<(), gamesage_core::Error>(())
//! ```

pub mod bundle;
pub mod formats;

pub use bundle::{ModelBundle, ModelPaths};
