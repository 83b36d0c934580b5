/// Classifier subsystem errors.
///
/// These never cross the classifier's public contract: prediction surfaces
/// catch them and degrade to `None`/empty results. They exist so training
/// and internal encoding faults carry a reason while they are still inside
/// the boundary.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("cannot train on an empty extract")]
    EmptyTrainingSet,

    #[error("model is not trained")]
    NotTrained,

    #[error("encoding failed: {reason}")]
    EncodingFailed { reason: String },
}
