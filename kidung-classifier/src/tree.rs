//! Multiway categorical decision tree with entropy splitting.
//!
//! Inputs are already label-encoded, so features and classes are plain
//! code ranges. Leaves keep the full class distribution of their training
//! subset; an unseen branch code at inference time falls back to the
//! distribution of the node it stopped at instead of failing.

use std::collections::HashMap;

use kidung_core::errors::ClassifierError;

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        distribution: Vec<f64>,
    },
    Split {
        feature: usize,
        branches: HashMap<usize, Node>,
        /// Fallback distribution for codes with no branch.
        distribution: Vec<f64>,
    },
}

/// Fitted tree. Immutable once built; retraining builds a new tree.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    root: Node,
    n_classes: usize,
}

/// Normalized class counts of a sample subset.
fn distribution(samples: &[(Vec<usize>, usize)], n_classes: usize) -> Vec<f64> {
    let mut counts = vec![0.0; n_classes];
    for (_, class) in samples {
        if *class < n_classes {
            counts[*class] += 1.0;
        }
    }
    let total: f64 = counts.iter().sum();
    if total > 0.0 {
        for c in &mut counts {
            *c /= total;
        }
    }
    counts
}

/// Shannon entropy in bits.
fn entropy(dist: &[f64]) -> f64 {
    -dist
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.log2())
        .sum::<f64>()
}

/// Information gain of splitting `samples` on `feature`.
fn information_gain(
    samples: &[(Vec<usize>, usize)],
    feature: usize,
    n_classes: usize,
    parent_entropy: f64,
) -> f64 {
    let mut partitions: HashMap<usize, Vec<(Vec<usize>, usize)>> = HashMap::new();
    for sample in samples {
        partitions
            .entry(sample.0[feature])
            .or_default()
            .push(sample.clone());
    }
    let total = samples.len() as f64;
    let weighted: f64 = partitions
        .values()
        .map(|subset| {
            let dist = distribution(subset, n_classes);
            (subset.len() as f64 / total) * entropy(&dist)
        })
        .sum();
    parent_entropy - weighted
}

fn build(samples: &[(Vec<usize>, usize)], available: &[usize], n_classes: usize) -> Node {
    let dist = distribution(samples, n_classes);
    let parent_entropy = entropy(&dist);

    if parent_entropy == 0.0 || available.is_empty() {
        return Node::Leaf { distribution: dist };
    }

    let mut best: Option<(usize, f64)> = None;
    for &feature in available {
        let gain = information_gain(samples, feature, n_classes, parent_entropy);
        if best.map(|(_, g)| gain > g).unwrap_or(true) {
            best = Some((feature, gain));
        }
    }
    let (feature, gain) = match best {
        Some(b) => b,
        None => return Node::Leaf { distribution: dist },
    };
    if gain <= f64::EPSILON {
        return Node::Leaf { distribution: dist };
    }

    let mut partitions: HashMap<usize, Vec<(Vec<usize>, usize)>> = HashMap::new();
    for sample in samples {
        partitions
            .entry(sample.0[feature])
            .or_default()
            .push(sample.clone());
    }
    let remaining: Vec<usize> = available.iter().copied().filter(|&f| f != feature).collect();
    let branches = partitions
        .into_iter()
        .map(|(code, subset)| (code, build(&subset, &remaining, n_classes)))
        .collect();

    Node::Split {
        feature,
        branches,
        distribution: dist,
    }
}

impl DecisionTree {
    /// Fit from encoded samples: `(feature codes, target class)` pairs.
    pub fn fit(
        samples: &[(Vec<usize>, usize)],
        n_classes: usize,
    ) -> Result<Self, ClassifierError> {
        if samples.is_empty() || n_classes == 0 {
            return Err(ClassifierError::EmptyTrainingSet);
        }
        let n_features = samples[0].0.len();
        if samples.iter().any(|(f, _)| f.len() != n_features) {
            return Err(ClassifierError::EncodingFailed {
                reason: "inconsistent feature vector length".to_string(),
            });
        }
        let available: Vec<usize> = (0..n_features).collect();
        Ok(Self {
            root: build(samples, &available, n_classes),
            n_classes,
        })
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Class probability distribution for an encoded input. Total: unseen
    /// branch codes stop at the nearest node's own distribution.
    pub fn predict_proba(&self, features: &[usize]) -> Vec<f64> {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { distribution } => return distribution.clone(),
                Node::Split {
                    feature,
                    branches,
                    distribution,
                } => {
                    let code = match features.get(*feature) {
                        Some(code) => code,
                        None => return distribution.clone(),
                    };
                    match branches.get(code) {
                        Some(child) => node = child,
                        None => return distribution.clone(),
                    }
                }
            }
        }
    }

    /// Most probable class; ties break toward the lowest class code.
    pub fn predict(&self, features: &[usize]) -> Option<usize> {
        let proba = self.predict_proba(features);
        let mut best: Option<(usize, f64)> = None;
        for (code, &p) in proba.iter().enumerate() {
            if best.map(|(_, bp)| p > bp).unwrap_or(true) {
                best = Some((code, p));
            }
        }
        best.map(|(code, _)| code)
    }
}
