//! # kidung-engine
//!
//! Top-level orchestration of the SariKidung recommendation system.
//!
//! Owns the process-wide extract+classifier pair behind an atomic-swap
//! [`ModelStore`]: every knowledge-base write rebuilds the extract, trains
//! a brand-new classifier, and publishes both together. Readers observe
//! either the old or the new pair, never a mixture, and a retrain failure
//! leaves the previous good pair in place.
//!
//! The classifier is only one ranking signal: when it abstains (untrained,
//! faulted, or below the confidence floor) a recommendation falls back to
//! context resolution instead of surfacing a low-quality guess.

pub mod engine;
pub mod source;
pub mod store;

pub use engine::RecommendationEngine;
pub use source::InMemorySource;
pub use store::{EngineState, ModelStore};
