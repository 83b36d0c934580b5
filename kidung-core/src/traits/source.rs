use crate::errors::KidungResult;
use crate::models::ChantDetail;

/// A write against the knowledge base. Every successful mutation obligates
/// the caller to rebuild the extract and retrain the classifier.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOp {
    Create(ChantDetail),
    Update(ChantDetail),
    Delete { target: String },
}

/// The knowledge-base collaborator.
///
/// The core assumes nothing about the backing store (ontology graph, SQL,
/// flat file). Absence semantics are fixed: `detail_of` returns `Ok(None)`
/// for an unknown identifier, never an error.
pub trait ChantSource: Send + Sync {
    /// Every chant record in the knowledge base.
    fn all(&self) -> KidungResult<Vec<ChantDetail>>;

    /// Lookup by identifier. `Ok(None)` when the identifier is unknown.
    fn detail_of(&self, target: &str) -> KidungResult<Option<ChantDetail>>;

    /// Apply one write. Errors leave the knowledge base unchanged.
    fn apply(&mut self, op: MutationOp) -> KidungResult<()>;
}
