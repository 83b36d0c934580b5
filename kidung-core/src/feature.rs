//! The categorical feature vocabulary shared by every subsystem.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One of the five nominal context attributes of a chant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Ceremony type (top-level ritual category).
    Yadnya,
    /// Occasion (specific rite within a ceremony type).
    Upacara,
    /// Stage (ordered phase at which a chant is performed).
    Tahap,
    /// Meaning category of the chant.
    Makna,
    /// Location (site/venue attribute, optional disambiguator).
    Pura,
}

impl Feature {
    /// All features, in column order.
    pub const ALL: [Feature; 5] = [
        Feature::Yadnya,
        Feature::Upacara,
        Feature::Tahap,
        Feature::Makna,
        Feature::Pura,
    ];

    /// Question order for the progressive questionnaire.
    /// Meaning is never asked: it describes the chant, not the context.
    pub const QUESTION_SEQUENCE: [Feature; 4] = [
        Feature::Yadnya,
        Feature::Upacara,
        Feature::Tahap,
        Feature::Pura,
    ];

    /// Features the classifier splits on. Stage and meaning are excluded
    /// from the decision boundary: they describe when/why a chant is sung,
    /// which belongs to the filter/ranking stage.
    pub const DECISION: [Feature; 3] = [Feature::Yadnya, Feature::Upacara, Feature::Pura];

    /// Wire/column name of this feature.
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::Yadnya => "yadnya",
            Feature::Upacara => "upacara",
            Feature::Tahap => "tahap",
            Feature::Makna => "makna",
            Feature::Pura => "pura",
        }
    }

}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cumulative answered (feature → value) pairs for one questionnaire walk.
/// Held by the client, transmitted each request, discarded after completion.
pub type AnswerMap = BTreeMap<Feature, String>;
