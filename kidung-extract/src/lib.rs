//! # kidung-extract
//!
//! Flattens the chant knowledge base into a fixed-schema table of
//! [`ChantRow`]s — the source of truth for classifier training and for
//! live questionnaire/resolution filtering. Rebuilt wholesale after every
//! knowledge-base write, never mutated in place during a request.

pub mod extract;

pub use extract::Extract;

pub use kidung_core::models::ChantRow;
