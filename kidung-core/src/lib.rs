//! # kidung-core
//!
//! Foundation crate for the SariKidung recommendation system.
//! Defines chant models, the feature vocabulary, errors, config, constants,
//! and the knowledge-base collaborator trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod feature;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{KidungError, KidungResult};
pub use feature::{AnswerMap, Feature};
pub use models::{ChantDetail, ChantRow};
pub use traits::{ChantSource, MutationOp};
