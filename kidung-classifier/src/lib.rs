//! # kidung-classifier
//!
//! Supervised chant classifier: per-column label encoders with sentinel
//! handling, a hand-rolled multiway decision tree with entropy splitting,
//! and a boundary-hardened prediction surface.
//!
//! The decision features are ceremony, occasion, and location. Stage and
//! meaning never enter the decision boundary — they describe when/why a
//! chant is sung and belong to the filter/ranking stage.
//!
//! A classifier instance is one-way `untrained → trained`. Retraining
//! replaces the instance; it never mutates a trained model in place.

pub mod classifier;
pub mod encoder;
pub mod explain;
pub mod tree;

pub use classifier::{ChantClassifier, TrainOutcome};
pub use encoder::{EncoderSet, LabelEncoder};
pub use explain::build_explanation;
pub use tree::DecisionTree;
