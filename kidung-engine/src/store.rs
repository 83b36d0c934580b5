//! ModelStore — the atomic-swap owner of the extract+classifier pair.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use kidung_classifier::ChantClassifier;
use kidung_extract::Extract;

/// One immutable generation of shared model state. Replaced wholesale on
/// every knowledge-base write; never mutated after publication.
#[derive(Debug, Clone)]
pub struct EngineState {
    pub extract: Extract,
    pub classifier: ChantClassifier,
    /// When this generation was published.
    pub trained_at: DateTime<Utc>,
}

impl EngineState {
    /// The degraded boot state: empty extract, untrained classifier.
    pub fn empty() -> Self {
        Self {
            extract: Extract::default(),
            classifier: ChantClassifier::new(),
            trained_at: Utc::now(),
        }
    }
}

/// Holds the current [`EngineState`] generation. No component outside the
/// engine keeps a long-lived reference to the trained model; requests take
/// a snapshot and drop it when done.
#[derive(Debug)]
pub struct ModelStore {
    current: RwLock<Arc<EngineState>>,
}

impl ModelStore {
    pub fn new(state: EngineState) -> Self {
        Self {
            current: RwLock::new(Arc::new(state)),
        }
    }

    /// The current generation. Cheap: clones the `Arc`, not the state.
    pub fn snapshot(&self) -> Arc<EngineState> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Publish a new generation. Concurrent readers keep whichever
    /// snapshot they already hold.
    pub fn swap(&self, state: EngineState) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(state);
    }
}
