//! # kidung-flow
//!
//! Progressive-disclosure questionnaire over the tabular extract.
//!
//! A fixed question sequence (ceremony → occasion → stage → location) is
//! walked one feature per request. Each step filters the extract by the
//! answers so far and serves the next question's valid option set, or
//! signals completion. Questions with no discriminative power are skipped;
//! the stage question special-cases an always-available "all stages"
//! option, because "no preference" is a first-class choice distinct from
//! "no data exists".

pub mod controller;

pub use controller::next_step;
