pub mod classifier_error;
pub mod source_error;

pub use classifier_error::ClassifierError;
pub use source_error::SourceError;

/// Umbrella error for the SariKidung workspace.
///
/// The questionnaire and resolver surfaces are total (they degrade to empty
/// shapes instead of erroring), so only the source and classifier subsystems
/// contribute variants here.
#[derive(Debug, thiserror::Error)]
pub enum KidungError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

pub type KidungResult<T> = Result<T, KidungError>;
