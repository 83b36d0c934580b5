pub mod source;

pub use source::{ChantSource, MutationOp};
