//! The tabular extract and its filter helpers.

use tracing::warn;

use kidung_core::constants::{ALL_STAGES, NONE_VALUE};
use kidung_core::errors::KidungResult;
use kidung_core::feature::{AnswerMap, Feature};
use kidung_core::models::{ChantDetail, ChantRow};
use kidung_core::traits::ChantSource;

/// Ordered collection of normalized chant rows.
///
/// Pure value type: filters return new extracts, the original is never
/// touched. An empty knowledge base yields an empty extract with the same
/// schema and behavior — callers never special-case absence.
#[derive(Debug, Clone, Default)]
pub struct Extract {
    rows: Vec<ChantRow>,
}

/// Trim a nominal attribute; absent/blank becomes the `"None"` literal.
fn normalize(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NONE_VALUE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Case-insensitive, whitespace-trimmed equality used by every filter.
fn matches(cell: &str, wanted: &str) -> bool {
    cell.trim().to_lowercase() == wanted.trim().to_lowercase()
}

/// Whether an answered value actually constrains the table. Blank values,
/// the `"None"` literal, and the all-stages sentinel do not filter.
pub fn is_filtering_value(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && !trimmed.eq_ignore_ascii_case(NONE_VALUE)
        && !trimmed.eq_ignore_ascii_case(ALL_STAGES)
}

impl Extract {
    /// Project the whole knowledge base into rows.
    pub fn build(source: &dyn ChantSource) -> KidungResult<Self> {
        Ok(Self::from_details(&source.all()?))
    }

    /// Project a list of detail records. Duplicate targets keep the last
    /// record seen, with a warning.
    pub fn from_details(details: &[ChantDetail]) -> Self {
        let mut rows: Vec<ChantRow> = Vec::with_capacity(details.len());
        for detail in details {
            let row = ChantRow {
                target: detail.target.trim().to_string(),
                judul: detail.judul.trim().to_string(),
                yadnya: normalize(&detail.yadnya),
                upacara: normalize(&detail.upacara),
                tahap: normalize(&detail.tahap),
                makna: normalize(&detail.makna),
                pura: normalize(&detail.pura),
                urutan_tahap: detail.urutan_tahap,
            };
            if let Some(existing) = rows.iter_mut().find(|r| r.target == row.target) {
                warn!(target = %row.target, "duplicate target in knowledge base, last record wins");
                *existing = row;
            } else {
                rows.push(row);
            }
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[ChantRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose `feature` column equals `value` (case-insensitive, trimmed).
    pub fn filter(&self, feature: Feature, value: &str) -> Extract {
        Extract {
            rows: self
                .rows
                .iter()
                .filter(|r| matches(r.value(feature), value))
                .cloned()
                .collect(),
        }
    }

    /// Apply every answered feature that carries a filtering value.
    pub fn retain_answers(&self, answers: &AnswerMap) -> Extract {
        let mut current = self.clone();
        for (&feature, value) in answers {
            if is_filtering_value(value) {
                current = current.filter(feature, value);
            }
        }
        current
    }

    /// Distinct non-sentinel values of a column, sorted lexicographically.
    pub fn distinct(&self, feature: Feature) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for row in &self.rows {
            let value = row.value(feature).trim();
            if value.is_empty() || value.eq_ignore_ascii_case(NONE_VALUE) {
                continue;
            }
            if !values.iter().any(|v| matches(v, value)) {
                values.push(value.to_string());
            }
        }
        values.sort();
        values
    }
}
