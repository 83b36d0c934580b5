//! # kidung-resolve
//!
//! Resolves the *set* of chants applicable to a context — not just the
//! classifier's top guess. Filters are applied with progressive relaxation
//! (a filter that would empty the result is dropped rather than applied),
//! details are fetched from the knowledge base, and the result is ordered
//! by stage position. The surface is total: any internal fault degrades to
//! an empty result, which callers treat as "no knowledge for this
//! context", never as a system error.

pub mod resolver;

pub use resolver::{resolve, ResolveRequest};
