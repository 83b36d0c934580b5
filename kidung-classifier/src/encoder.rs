//! Bijective label ↔ code mapping with forced sentinel classes.

use std::collections::HashMap;

use kidung_core::constants::{NONE_VALUE, UNKNOWN_VALUE};
use kidung_core::errors::ClassifierError;
use kidung_core::feature::Feature;
use kidung_extract::Extract;

/// Per-column encoder. Fitted once per training pass; every fitted value
/// maps to a unique code in `[0, len)` and back. The `"None"` and
/// `"unknown"` sentinels are always part of the vocabulary, so encoding an
/// unseen value never fails — it lands on the unknown sentinel.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelEncoder {
    /// Fit from an observed value set. Classes are sorted for determinism;
    /// sentinels are appended to the vocabulary if the data lacked them.
    pub fn fit<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !classes.contains(&value) {
                classes.push(value);
            }
        }
        for sentinel in [NONE_VALUE, UNKNOWN_VALUE] {
            if !classes.iter().any(|c| c == sentinel) {
                classes.push(sentinel.to_string());
            }
        }
        classes.sort();
        let index = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Self { classes, index }
    }

    /// Number of classes (observed values plus sentinels).
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Total encode: unseen values map through the unknown sentinel.
    pub fn encode(&self, value: &str) -> usize {
        if let Some(&code) = self.index.get(value.trim()) {
            return code;
        }
        // Fitting always inserts both sentinels, so this lookup cannot miss.
        self.index
            .get(UNKNOWN_VALUE)
            .or_else(|| self.index.get(NONE_VALUE))
            .copied()
            .unwrap_or(0)
    }

    /// Total decode on the fitted range.
    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    /// Whether a value was observed (or is a sentinel).
    pub fn knows(&self, value: &str) -> bool {
        self.index.contains_key(value.trim())
    }

    /// The fitted classes in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// One encoder per decision feature, plus one for the target column.
#[derive(Debug, Clone)]
pub struct EncoderSet {
    features: HashMap<Feature, LabelEncoder>,
    target: LabelEncoder,
}

impl EncoderSet {
    /// Fit all encoders from the extract's decision columns and targets.
    pub fn fit(extract: &Extract) -> Self {
        let mut features = HashMap::new();
        for feature in Feature::DECISION {
            let encoder = LabelEncoder::fit(
                extract
                    .rows()
                    .iter()
                    .map(|r| r.value(feature).trim().to_string()),
            );
            features.insert(feature, encoder);
        }
        let target = LabelEncoder::fit(extract.rows().iter().map(|r| r.target.clone()));
        Self { features, target }
    }

    /// Encode one decision feature value.
    pub fn encode_feature(&self, feature: Feature, value: &str) -> Result<usize, ClassifierError> {
        self.features
            .get(&feature)
            .map(|e| e.encode(value))
            .ok_or_else(|| ClassifierError::EncodingFailed {
                reason: format!("no encoder fitted for feature {feature}"),
            })
    }

    pub fn target(&self) -> &LabelEncoder {
        &self.target
    }
}
