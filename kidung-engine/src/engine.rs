//! RecommendationEngine — ties questionnaire, classifier, and resolution
//! together over the shared model store.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use tracing::{debug, info, warn};

use kidung_classifier::{build_explanation, ChantClassifier, TrainOutcome};
use kidung_core::config::EngineConfig;
use kidung_core::errors::{ClassifierError, KidungResult};
use kidung_core::feature::AnswerMap;
use kidung_core::models::{
    ContextResult, Prediction, QuestionResult, Recommendation, RecommendationStatus,
};
use kidung_core::traits::{ChantSource, MutationOp};
use kidung_extract::Extract;
use kidung_resolve::{resolve, ResolveRequest};

use crate::store::{EngineState, ModelStore};

const MSG_FOUND: &str = "Kidung yang sesuai ditemukan.";
const MSG_FALLBACK: &str = "Menampilkan rangkaian kidung yang cocok dengan konteks upacara Anda.";
const MSG_EMPTY: &str = "Maaf, sistem tidak menemukan Kidung yang sesuai.";

/// The top-level recommendation orchestrator.
///
/// Fully synchronous; no operation blocks on I/O. The only shared state is
/// the extract+classifier pair inside the [`ModelStore`], replaced
/// atomically after every successful knowledge-base write.
pub struct RecommendationEngine<S: ChantSource> {
    source: RwLock<S>,
    store: ModelStore,
    config: EngineConfig,
}

impl<S: ChantSource> RecommendationEngine<S> {
    /// Boot the engine: load the knowledge base and train. A load or
    /// training fault degrades to an empty extract and an untrained
    /// classifier instead of failing the boot.
    pub fn boot(source: S, config: EngineConfig) -> Self {
        let engine = Self {
            source: RwLock::new(source),
            store: ModelStore::new(EngineState::empty()),
            config,
        };
        match engine.reload() {
            Ok(()) => info!("engine booted: extract and classifier ready"),
            Err(e) => warn!(error = %e, "boot degraded: empty extract, untrained classifier"),
        }
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current model generation (mostly for tests and introspection).
    pub fn snapshot(&self) -> Arc<EngineState> {
        self.store.snapshot()
    }

    /// Rebuild the extract, train a brand-new classifier, and publish both
    /// atomically. On any failure the previous generation stays current.
    pub fn reload(&self) -> KidungResult<()> {
        let extract = {
            let source = self.source.read().unwrap_or_else(PoisonError::into_inner);
            Extract::build(&*source)?
        };

        let mut classifier = ChantClassifier::new();
        match classifier.train(&extract) {
            TrainOutcome::Trained { rows, classes } => {
                debug!(rows, classes, "classifier trained");
            }
            TrainOutcome::SkippedEmpty => {
                // An empty knowledge base legitimately publishes an empty,
                // untrained generation.
                debug!("publishing untrained generation for empty knowledge base");
            }
            TrainOutcome::Failed { reason } => {
                return Err(ClassifierError::EncodingFailed { reason }.into());
            }
        }

        self.store.swap(EngineState {
            extract,
            classifier,
            trained_at: Utc::now(),
        });
        Ok(())
    }

    /// Next questionnaire step for the answers so far.
    pub fn next_question(&self, answers: &AnswerMap) -> QuestionResult {
        let state = self.store.snapshot();
        kidung_flow::next_step(&state.extract, answers)
    }

    /// Context-filtered multi-record query (browsing surface).
    pub fn browse(&self, request: &ResolveRequest) -> ContextResult {
        let state = self.store.snapshot();
        let source = self.source.read().unwrap_or_else(PoisonError::into_inner);
        resolve(&state.extract, &*source, request)
    }

    /// Produce a recommendation for a completed (or partial) answer set.
    ///
    /// The classifier goes first; when it abstains — untrained, faulted,
    /// below the confidence floor, or its prediction has no detail record —
    /// context resolution provides the multi-record fallback.
    pub fn recommend(&self, answers: &AnswerMap) -> Recommendation {
        let state = self.store.snapshot();

        if let Some(target) = state.classifier.predict(answers, self.config.confidence_floor) {
            let detail = {
                let source = self.source.read().unwrap_or_else(PoisonError::into_inner);
                source.detail_of(&target)
            };
            match detail {
                Ok(Some(detail)) => {
                    let title = detail.display_title();
                    info!(target = %detail.target, "classifier recommendation accepted");
                    return Recommendation {
                        status: RecommendationStatus::Success,
                        prediction: Some(Prediction {
                            target: Some(detail.target.clone()),
                            candidates: state
                                .classifier
                                .top_candidates(answers, self.config.top_candidates),
                            explanation: build_explanation(answers, &title),
                        }),
                        records: vec![detail],
                        message: MSG_FOUND.to_string(),
                    };
                }
                Ok(None) => {
                    warn!(target = %target, "predicted target has no detail record, falling back");
                }
                Err(e) => {
                    warn!(target = %target, error = %e, "detail lookup fault, falling back");
                }
            }
        }

        let request = ResolveRequest::from_answers(answers);
        let resolved = {
            let source = self.source.read().unwrap_or_else(PoisonError::into_inner);
            resolve(&state.extract, &*source, &request)
        };

        if resolved.records.is_empty() {
            debug!("no knowledge for this context");
            return Recommendation {
                status: RecommendationStatus::Empty,
                prediction: None,
                records: Vec::new(),
                message: MSG_EMPTY.to_string(),
            };
        }

        let prediction = state.classifier.is_trained().then(|| {
            let title = resolved.records[0].display_title();
            Prediction {
                target: None,
                candidates: state
                    .classifier
                    .top_candidates(answers, self.config.top_candidates),
                explanation: build_explanation(answers, &title),
            }
        });

        Recommendation {
            status: RecommendationStatus::Fallback,
            prediction,
            records: resolved.records,
            message: MSG_FALLBACK.to_string(),
        }
    }

    /// Apply one knowledge-base write, then rebuild and retrain.
    ///
    /// The mutation and the retrain are separate steps: a retrain failure
    /// returns the error but cannot corrupt the previously-good pair.
    pub fn mutate(&self, op: MutationOp) -> KidungResult<()> {
        {
            let mut source = self.source.write().unwrap_or_else(PoisonError::into_inner);
            source.apply(op)?;
        }
        self.reload()
    }
}
