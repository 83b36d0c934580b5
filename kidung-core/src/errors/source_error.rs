/// Knowledge-base collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("knowledge base load failed: {reason}")]
    LoadFailed { reason: String },

    #[error("unknown chant target: {target}")]
    UnknownTarget { target: String },

    #[error("duplicate chant target: {target}")]
    DuplicateTarget { target: String },

    #[error("malformed chant data: {0}")]
    Malformed(#[from] serde_json::Error),
}
