//! Deterministic, templated justification for a recommendation.

use kidung_core::feature::{AnswerMap, Feature};
use kidung_extract::extract::is_filtering_value;

/// Presentation form of a stored value: underscores become spaces.
fn pretty(value: &str) -> String {
    value.trim().replace('_', " ")
}

/// Build the natural-language justification for a recommended chant.
///
/// Lists the answered context features that matched, in the fixed order
/// ceremony → occasion → stage → location. Sentinel and blank values are
/// omitted; when nothing contributed, a generic justification is returned.
pub fn build_explanation(answers: &AnswerMap, title: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    for feature in Feature::QUESTION_SEQUENCE {
        let value = match answers.get(&feature) {
            Some(v) if is_filtering_value(v) => pretty(v),
            _ => continue,
        };
        let part = match feature {
            Feature::Yadnya => format!("jenis yadnya {value}"),
            Feature::Upacara => format!("upacara {value}"),
            Feature::Tahap => format!("tahap {value}"),
            Feature::Pura => format!("pelaksanaan di {value}"),
            Feature::Makna => continue,
        };
        parts.push(part);
    }

    if parts.is_empty() {
        return format!(
            "{title} direkomendasikan berdasarkan kecocokan umum dengan konteks upacara Anda."
        );
    }
    format!(
        "{title} direkomendasikan karena sesuai dengan {}.",
        parts.join(", ")
    )
}
