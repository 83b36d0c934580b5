//! Progressive-relaxation resolution over the tabular extract.

use serde::{Deserialize, Serialize};
use tracing::warn;

use kidung_core::feature::{AnswerMap, Feature};
use kidung_core::models::{ChantDetail, ContextResult};
use kidung_core::traits::ChantSource;
use kidung_extract::extract::is_filtering_value;
use kidung_extract::Extract;

/// Context attributes to resolve against. `None` fields do not filter;
/// neither do blank values or sentinels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub yadnya: Option<String>,
    pub upacara: Option<String>,
    pub tahap: Option<String>,
    pub pura: Option<String>,
}

impl ResolveRequest {
    /// Build a request from a questionnaire answer set.
    pub fn from_answers(answers: &AnswerMap) -> Self {
        Self {
            yadnya: answers.get(&Feature::Yadnya).cloned(),
            upacara: answers.get(&Feature::Upacara).cloned(),
            tahap: answers.get(&Feature::Tahap).cloned(),
            pura: answers.get(&Feature::Pura).cloned(),
        }
    }

    fn filtering(field: &Option<String>) -> Option<&str> {
        field
            .as_deref()
            .map(str::trim)
            .filter(|v| is_filtering_value(v))
    }
}

/// Resolve the ordered set of chants for a context.
///
/// Ceremony and occasion filter strictly; stage and location are applied
/// only when they leave at least one row (fall back to the broader result
/// rather than an empty one). If everything emptied anyway and a ceremony
/// was given, the original table filtered by ceremony alone is the
/// coarsest possible answer. Surviving rows are resolved to full details
/// and sorted ascending by stage order, sentinel 99 last, ties keeping row
/// order.
pub fn resolve(
    extract: &Extract,
    source: &dyn ChantSource,
    request: &ResolveRequest,
) -> ContextResult {
    let mode_all_stages = ResolveRequest::filtering(&request.tahap).is_none();

    let mut rows = extract.clone();
    if let Some(yadnya) = ResolveRequest::filtering(&request.yadnya) {
        rows = rows.filter(Feature::Yadnya, yadnya);
    }
    if let Some(upacara) = ResolveRequest::filtering(&request.upacara) {
        rows = rows.filter(Feature::Upacara, upacara);
    }
    if let Some(tahap) = ResolveRequest::filtering(&request.tahap) {
        let narrowed = rows.filter(Feature::Tahap, tahap);
        if !narrowed.is_empty() {
            rows = narrowed;
        }
    }
    if let Some(pura) = ResolveRequest::filtering(&request.pura) {
        let narrowed = rows.filter(Feature::Pura, pura);
        if !narrowed.is_empty() {
            rows = narrowed;
        }
    }
    if rows.is_empty() {
        if let Some(yadnya) = ResolveRequest::filtering(&request.yadnya) {
            rows = extract.filter(Feature::Yadnya, yadnya);
        }
    }

    let mut records: Vec<ChantDetail> = Vec::with_capacity(rows.len());
    for row in rows.rows() {
        match source.detail_of(&row.target) {
            Ok(Some(detail)) => records.push(detail),
            Ok(None) => {
                warn!(target = %row.target, "extract row has no detail record, dropped");
            }
            Err(e) => {
                warn!(target = %row.target, error = %e, "detail lookup fault, row dropped");
            }
        }
    }

    // Stable sort: ties keep the row order established above.
    records.sort_by_key(|d| d.urutan_tahap);

    ContextResult {
        records,
        mode_all_stages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kidung_core::errors::{KidungError, KidungResult, SourceError};
    use kidung_core::traits::MutationOp;

    struct VecSource(Vec<ChantDetail>);

    impl ChantSource for VecSource {
        fn all(&self) -> KidungResult<Vec<ChantDetail>> {
            Ok(self.0.clone())
        }
        fn detail_of(&self, target: &str) -> KidungResult<Option<ChantDetail>> {
            Ok(self.0.iter().find(|d| d.target == target).cloned())
        }
        fn apply(&mut self, _op: MutationOp) -> KidungResult<()> {
            Ok(())
        }
    }

    /// Source whose lookups always fault, for degradation tests.
    struct FaultySource;

    impl ChantSource for FaultySource {
        fn all(&self) -> KidungResult<Vec<ChantDetail>> {
            Ok(Vec::new())
        }
        fn detail_of(&self, _target: &str) -> KidungResult<Option<ChantDetail>> {
            Err(KidungError::Source(SourceError::LoadFailed {
                reason: "backing store offline".to_string(),
            }))
        }
        fn apply(&mut self, _op: MutationOp) -> KidungResult<()> {
            Ok(())
        }
    }

    fn detail(target: &str, yadnya: &str, upacara: &str, tahap: &str, urutan: u32) -> ChantDetail {
        serde_json::from_value(serde_json::json!({
            "target": target,
            "judul": target.replace('_', " "),
            "yadnya": yadnya,
            "upacara": upacara,
            "tahap": tahap,
            "urutan_tahap": urutan,
        }))
        .unwrap()
    }

    fn fixture() -> (Extract, VecSource) {
        let details = vec![
            detail("B", "X", "P", "S2", 2),
            detail("A", "X", "P", "S1", 1),
            detail("C", "Y", "Q", "S1", 1),
        ];
        (Extract::from_details(&details), VecSource(details))
    }

    fn request(yadnya: Option<&str>, tahap: Option<&str>) -> ResolveRequest {
        ResolveRequest {
            yadnya: yadnya.map(String::from),
            tahap: tahap.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn all_stages_returns_full_ordered_sequence() {
        let (extract, source) = fixture();
        let result = resolve(&extract, &source, &request(Some("X"), Some("all")));
        assert!(result.mode_all_stages);
        let targets: Vec<&str> = result.records.iter().map(|d| d.target.as_str()).collect();
        assert_eq!(targets, vec!["A", "B"]);
    }

    #[test]
    fn stage_filter_narrows_to_one_row() {
        let (extract, source) = fixture();
        let result = resolve(&extract, &source, &request(Some("X"), Some("S1")));
        assert!(!result.mode_all_stages);
        let targets: Vec<&str> = result.records.iter().map(|d| d.target.as_str()).collect();
        assert_eq!(targets, vec!["A"]);
    }

    #[test]
    fn non_matching_stage_falls_back_to_broader_result() {
        let (extract, source) = fixture();
        let result = resolve(&extract, &source, &request(Some("X"), Some("S9")));
        // S9 would empty the set: the pre-stage-filter rows survive.
        let targets: Vec<&str> = result.records.iter().map(|d| d.target.as_str()).collect();
        assert_eq!(targets, vec!["A", "B"]);
    }

    #[test]
    fn unknown_ceremony_yields_empty_not_error() {
        let (extract, source) = fixture();
        let result = resolve(&extract, &source, &request(Some("Z"), None));
        assert!(result.records.is_empty());
    }

    #[test]
    fn occasion_emptying_falls_back_to_ceremony_alone() {
        let (extract, source) = fixture();
        let result = resolve(
            &extract,
            &source,
            &ResolveRequest {
                yadnya: Some("X".to_string()),
                upacara: Some("Q".to_string()),
                ..Default::default()
            },
        );
        // No X+Q rows exist; the ceremony-alone fallback restores X rows.
        let targets: Vec<&str> = result.records.iter().map(|d| d.target.as_str()).collect();
        assert_eq!(targets, vec!["A", "B"]);
    }

    #[test]
    fn lookup_faults_degrade_to_empty() {
        let (extract, _) = fixture();
        let result = resolve(&extract, &FaultySource, &request(Some("X"), None));
        assert!(result.records.is_empty());
    }

    #[test]
    fn resolve_is_idempotent_on_an_unmutated_extract() {
        let (extract, source) = fixture();
        let req = request(Some("X"), Some("all"));
        let first = resolve(&extract, &source, &req);
        let second = resolve(&extract, &source, &req);
        assert_eq!(first.records, second.records);
    }

    #[test]
    fn unordered_sentinel_sorts_last() {
        let details = vec![
            detail("Penutup", "X", "P", "S3", 99),
            detail("Pembuka", "X", "P", "S1", 1),
        ];
        let source = VecSource(details.clone());
        let extract = Extract::from_details(&details);
        let result = resolve(&extract, &source, &request(Some("X"), Some("all")));
        let targets: Vec<&str> = result.records.iter().map(|d| d.target.as_str()).collect();
        assert_eq!(targets, vec!["Pembuka", "Penutup"]);
    }
}
