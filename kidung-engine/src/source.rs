//! In-memory knowledge-base adapter.
//!
//! The persistence format is a collaborator concern; this adapter backs
//! the engine with a plain record list (loadable from JSON) and honors the
//! `ChantSource` contract: absent lookups are `Ok(None)`, failed writes
//! leave the records unchanged.

use kidung_core::errors::{KidungResult, SourceError};
use kidung_core::models::ChantDetail;
use kidung_core::traits::{ChantSource, MutationOp};

/// `Vec`-backed chant source.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    chants: Vec<ChantDetail>,
}

impl InMemorySource {
    pub fn new(chants: Vec<ChantDetail>) -> Self {
        Self { chants }
    }

    /// Parse a JSON array of chant records.
    pub fn from_json_str(json: &str) -> KidungResult<Self> {
        let chants: Vec<ChantDetail> =
            serde_json::from_str(json).map_err(SourceError::Malformed)?;
        Ok(Self { chants })
    }

    pub fn len(&self) -> usize {
        self.chants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chants.is_empty()
    }

    fn position(&self, target: &str) -> Option<usize> {
        self.chants.iter().position(|c| c.target == target.trim())
    }
}

impl ChantSource for InMemorySource {
    fn all(&self) -> KidungResult<Vec<ChantDetail>> {
        Ok(self.chants.clone())
    }

    fn detail_of(&self, target: &str) -> KidungResult<Option<ChantDetail>> {
        Ok(self.position(target).map(|i| self.chants[i].clone()))
    }

    fn apply(&mut self, op: MutationOp) -> KidungResult<()> {
        match op {
            MutationOp::Create(detail) => {
                if self.position(&detail.target).is_some() {
                    return Err(SourceError::DuplicateTarget {
                        target: detail.target,
                    }
                    .into());
                }
                self.chants.push(detail);
                Ok(())
            }
            MutationOp::Update(detail) => match self.position(&detail.target) {
                Some(i) => {
                    self.chants[i] = detail;
                    Ok(())
                }
                None => Err(SourceError::UnknownTarget {
                    target: detail.target,
                }
                .into()),
            },
            MutationOp::Delete { target } => match self.position(&target) {
                Some(i) => {
                    self.chants.remove(i);
                    Ok(())
                }
                None => Err(SourceError::UnknownTarget { target }.into()),
            },
        }
    }
}
