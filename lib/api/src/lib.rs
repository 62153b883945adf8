//! # GameSage API
//!
//! HTTP front end for [`gamesage_core::GameSage`], compatible with the
//! GameNet related-games lookup.

pub mod rest;

pub use rest::RestApi;
