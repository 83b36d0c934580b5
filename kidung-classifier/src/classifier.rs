//! ChantClassifier — boundary-hardened prediction over the fitted tree.

use tracing::{debug, warn};

use kidung_core::constants::NONE_VALUE;
use kidung_core::errors::ClassifierError;
use kidung_core::feature::{AnswerMap, Feature};
use kidung_core::models::Candidate;
use kidung_extract::Extract;

use crate::encoder::EncoderSet;
use crate::tree::DecisionTree;

/// Outcome of one training pass.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainOutcome {
    /// Model fitted and ready.
    Trained { rows: usize, classes: usize },
    /// Extract was empty; the instance stays untrained.
    SkippedEmpty,
    /// Training fault, caught at the boundary; the instance stays untrained.
    Failed { reason: String },
}

#[derive(Debug, Clone)]
struct Fitted {
    encoders: EncoderSet,
    tree: DecisionTree,
}

/// Multi-class chant classifier over (yadnya, upacara, pura).
///
/// One-way state machine `untrained → trained`. No prediction surface ever
/// returns an error: faults degrade to `None`/empty so a recommendation
/// request can fall back instead of failing.
#[derive(Debug, Clone, Default)]
pub struct ChantClassifier {
    fitted: Option<Fitted>,
}

impl ChantClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_trained(&self) -> bool {
        self.fitted.is_some()
    }

    /// Fit encoders and tree from the extract.
    pub fn train(&mut self, extract: &Extract) -> TrainOutcome {
        if extract.is_empty() {
            warn!("training skipped: extract is empty");
            return TrainOutcome::SkippedEmpty;
        }

        let encoders = EncoderSet::fit(extract);
        let mut samples: Vec<(Vec<usize>, usize)> = Vec::with_capacity(extract.len());
        for row in extract.rows() {
            let mut codes = Vec::with_capacity(Feature::DECISION.len());
            for feature in Feature::DECISION {
                match encoders.encode_feature(feature, row.value(feature)) {
                    Ok(code) => codes.push(code),
                    Err(e) => {
                        warn!(error = %e, "training aborted: encoding fault");
                        return TrainOutcome::Failed {
                            reason: e.to_string(),
                        };
                    }
                }
            }
            samples.push((codes, encoders.target().encode(&row.target)));
        }

        match DecisionTree::fit(&samples, encoders.target().len()) {
            Ok(tree) => {
                let outcome = TrainOutcome::Trained {
                    rows: samples.len(),
                    classes: tree.n_classes(),
                };
                self.fitted = Some(Fitted { encoders, tree });
                outcome
            }
            Err(e) => {
                warn!(error = %e, "training aborted: tree fit fault");
                TrainOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Encode the answered context into the decision feature vector.
    /// Missing features default to `"None"`; unseen values land on the
    /// unknown sentinel inside the encoder.
    fn encode_context(
        fitted: &Fitted,
        answers: &AnswerMap,
    ) -> Result<Vec<usize>, ClassifierError> {
        let mut codes = Vec::with_capacity(Feature::DECISION.len());
        for feature in Feature::DECISION {
            let value = answers
                .get(&feature)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .unwrap_or(NONE_VALUE);
            codes.push(fitted.encoders.encode_feature(feature, value)?);
        }
        Ok(codes)
    }

    /// Best prediction, or `None` when untrained, faulted, or when the
    /// maximum class probability is below `floor`.
    pub fn predict(&self, answers: &AnswerMap, floor: f64) -> Option<String> {
        let fitted = self.fitted.as_ref()?;
        let codes = match Self::encode_context(fitted, answers) {
            Ok(codes) => codes,
            Err(e) => {
                warn!(error = %e, "prediction degraded to no-match");
                return None;
            }
        };

        let proba = fitted.tree.predict_proba(&codes);
        let (code, max_p) = argmax(&proba)?;
        if max_p < floor {
            debug!(max_p, floor, "prediction below confidence floor");
            return None;
        }
        fitted.encoders.target().decode(code).map(str::to_string)
    }

    /// Ranked top-N candidates, descending probability, ties by class code,
    /// zero-probability entries excluded. Empty when untrained or faulted.
    pub fn top_candidates(&self, answers: &AnswerMap, n: usize) -> Vec<Candidate> {
        let fitted = match self.fitted.as_ref() {
            Some(f) => f,
            None => return Vec::new(),
        };
        let codes = match Self::encode_context(fitted, answers) {
            Ok(codes) => codes,
            Err(e) => {
                warn!(error = %e, "candidate ranking degraded to empty");
                return Vec::new();
            }
        };

        let proba = fitted.tree.predict_proba(&codes);
        let mut ranked: Vec<(usize, f64)> = proba
            .iter()
            .enumerate()
            .filter(|(_, &p)| p > 0.0)
            .map(|(code, &p)| (code, p))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(n);

        ranked
            .into_iter()
            .filter_map(|(code, p)| {
                fitted.encoders.target().decode(code).map(|target| Candidate {
                    target: target.to_string(),
                    probability_pct: (p * 10_000.0).round() / 100.0,
                })
            })
            .collect()
    }
}

/// Index and value of the maximum entry; ties toward the lowest index.
fn argmax(values: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if best.map(|(_, bv)| v > bv).unwrap_or(true) {
            best = Some((i, v));
        }
    }
    best
}
