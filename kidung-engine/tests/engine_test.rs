//! End-to-end engine tests over the golden chant dataset: boot, the full
//! questionnaire walk, recommendation with fallback, and mutation-triggered
//! retrains with atomic swap semantics.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use kidung_core::config::EngineConfig;
use kidung_core::errors::{KidungResult, SourceError};
use kidung_core::feature::{AnswerMap, Feature};
use kidung_core::models::{ChantDetail, QuestionResult, RecommendationStatus};
use kidung_core::traits::{ChantSource, MutationOp};
use kidung_engine::{InMemorySource, RecommendationEngine};
use kidung_resolve::ResolveRequest;

fn fixture_source() -> InMemorySource {
    InMemorySource::from_json_str(&test_fixtures::chants_json()).expect("golden dataset parses")
}

fn engine() -> RecommendationEngine<InMemorySource> {
    RecommendationEngine::boot(fixture_source(), EngineConfig::default())
}

fn engine_with_floor(floor: f64) -> RecommendationEngine<InMemorySource> {
    RecommendationEngine::boot(
        fixture_source(),
        EngineConfig {
            confidence_floor: floor,
            ..EngineConfig::default()
        },
    )
}

fn answers(pairs: &[(Feature, &str)]) -> AnswerMap {
    pairs.iter().map(|(f, v)| (*f, v.to_string())).collect()
}

fn expect_next(result: QuestionResult) -> kidung_core::models::NextQuestion {
    match result {
        QuestionResult::Next(q) => q,
        QuestionResult::Complete => panic!("expected another question"),
    }
}

#[test]
fn boot_trains_on_the_golden_dataset() {
    let engine = engine();
    let state = engine.snapshot();
    assert_eq!(state.extract.len(), 11);
    assert!(state.classifier.is_trained());
}

#[test]
fn questionnaire_walk_piodalan_full_guide() {
    let engine = engine();

    let q = expect_next(engine.next_question(&AnswerMap::new()));
    assert_eq!(q.feature, Feature::Yadnya);
    assert_eq!(
        q.options,
        vec![
            "Bhuta_Yadnya",
            "Dewa_Yadnya",
            "Manusa_Yadnya",
            "Pitra_Yadnya",
            "Rsi_Yadnya"
        ]
    );
    assert_eq!((q.step, q.total_steps), (1, 4));

    let q = expect_next(engine.next_question(&answers(&[(Feature::Yadnya, "Dewa_Yadnya")])));
    assert_eq!(q.feature, Feature::Upacara);
    assert_eq!(q.options, vec!["Melasti", "Piodalan"]);

    let q = expect_next(engine.next_question(&answers(&[
        (Feature::Yadnya, "Dewa_Yadnya"),
        (Feature::Upacara, "Piodalan"),
    ])));
    assert_eq!(q.feature, Feature::Tahap);
    assert_eq!(
        q.options,
        vec!["all", "Pembukaan", "Penyineban", "Persembahan"]
    );

    let q = expect_next(engine.next_question(&answers(&[
        (Feature::Yadnya, "Dewa_Yadnya"),
        (Feature::Upacara, "Piodalan"),
        (Feature::Tahap, "all"),
    ])));
    assert_eq!(q.feature, Feature::Pura);
    assert_eq!(q.options, vec!["Pura_Desa", "Pura_Puseh"]);

    let result = engine.next_question(&answers(&[
        (Feature::Yadnya, "Dewa_Yadnya"),
        (Feature::Upacara, "Piodalan"),
        (Feature::Tahap, "all"),
        (Feature::Pura, "Pura_Desa"),
    ]));
    assert!(result.is_complete());
}

#[test]
fn single_location_question_is_skipped() {
    let engine = engine();
    // Piodalan openings happen only at Pura_Desa in the dataset: the
    // location question has no discriminative power and the flow ends.
    let result = engine.next_question(&answers(&[
        (Feature::Yadnya, "Dewa_Yadnya"),
        (Feature::Upacara, "Piodalan"),
        (Feature::Tahap, "Pembukaan"),
    ]));
    assert!(result.is_complete());
}

#[test]
fn confident_context_recommends_via_classifier() {
    let engine = engine();
    let recommendation = engine.recommend(&answers(&[
        (Feature::Yadnya, "Rsi_Yadnya"),
        (Feature::Upacara, "Mediksa"),
        (Feature::Pura, "Griya"),
    ]));

    assert_eq!(recommendation.status, RecommendationStatus::Success);
    assert_eq!(recommendation.records.len(), 1);
    assert_eq!(recommendation.records[0].target, "Kidung_Mediksa_Ref");

    let prediction = recommendation.prediction.expect("classifier consulted");
    assert_eq!(prediction.target.as_deref(), Some("Kidung_Mediksa_Ref"));
    assert_eq!(prediction.candidates[0].target, "Kidung_Mediksa_Ref");
    assert_eq!(prediction.candidates[0].probability_pct, 100.0);
    assert!(prediction.explanation.contains("Rsi Yadnya"));
}

#[test]
fn ambiguous_context_above_floor_picks_deterministically() {
    let engine = engine();
    // Ngaben has two chants with identical decision features: the leaf is
    // split 50/50 and ties break toward the lower class code.
    let recommendation = engine.recommend(&answers(&[
        (Feature::Yadnya, "Pitra_Yadnya"),
        (Feature::Upacara, "Ngaben"),
    ]));
    assert_eq!(recommendation.status, RecommendationStatus::Success);
    assert_eq!(recommendation.records[0].target, "Kidung_Aji_Kembang_Ref");
}

#[test]
fn low_confidence_falls_back_to_context_resolution() {
    let engine = engine_with_floor(0.6);
    let recommendation = engine.recommend(&answers(&[
        (Feature::Yadnya, "Pitra_Yadnya"),
        (Feature::Upacara, "Ngaben"),
    ]));

    assert_eq!(recommendation.status, RecommendationStatus::Fallback);
    let targets: Vec<&str> = recommendation
        .records
        .iter()
        .map(|d| d.target.as_str())
        .collect();
    // Full Ngaben sequence in stage order, not a single guess.
    assert_eq!(targets, vec!["Kidung_Girisa_Ref", "Kidung_Aji_Kembang_Ref"]);

    let prediction = recommendation.prediction.expect("model was trained");
    assert_eq!(prediction.target, None);
    assert!(!prediction.candidates.is_empty());
}

#[test]
fn unknown_context_yields_empty_status_not_error() {
    let engine = engine_with_floor(0.2);
    let recommendation = engine.recommend(&answers(&[(Feature::Yadnya, "Saraswati")]));
    assert_eq!(recommendation.status, RecommendationStatus::Empty);
    assert!(recommendation.records.is_empty());
    assert_eq!(
        recommendation.message,
        "Maaf, sistem tidak menemukan Kidung yang sesuai."
    );
}

#[test]
fn browse_untrained_and_unbooted_data_degrades_gracefully() {
    let engine = RecommendationEngine::boot(InMemorySource::default(), EngineConfig::default());
    let state = engine.snapshot();
    assert!(state.extract.is_empty());
    assert!(!state.classifier.is_trained());

    let recommendation = engine.recommend(&answers(&[(Feature::Yadnya, "Dewa_Yadnya")]));
    assert_eq!(recommendation.status, RecommendationStatus::Empty);
    assert_eq!(recommendation.prediction, None);

    let browsed = engine.browse(&ResolveRequest::default());
    assert!(browsed.records.is_empty());
}

#[test]
fn browse_returns_the_ordered_context_set() {
    let engine = engine();
    let result = engine.browse(&ResolveRequest {
        yadnya: Some("Dewa_Yadnya".to_string()),
        upacara: Some("Piodalan".to_string()),
        tahap: Some("all".to_string()),
        ..Default::default()
    });

    assert!(result.mode_all_stages);
    let targets: Vec<&str> = result.records.iter().map(|d| d.target.as_str()).collect();
    assert_eq!(
        targets,
        vec![
            "Kidung_Kawitan_Wargasari_Ref",
            "Kidung_Wargasari_Ref",
            "Kidung_Penyineban_Ref"
        ]
    );
}

#[test]
fn create_mutation_retrains_and_old_snapshots_stay_usable() {
    let engine = engine();
    let before = engine.snapshot();

    let new_chant: ChantDetail = serde_json::from_value(serde_json::json!({
        "target": "Kidung_Banyu_Pinaruh_Ref",
        "judul": "Kidung Banyu Pinaruh",
        "yadnya": "Dewa_Yadnya",
        "upacara": "Banyu_Pinaruh",
        "tahap": "Penyucian",
        "makna": "Penyucian",
        "pura": "Pura_Segara",
        "urutan_tahap": 1
    }))
    .unwrap();
    engine
        .mutate(MutationOp::Create(new_chant))
        .expect("mutation and retrain succeed");

    let after = engine.snapshot();
    assert_eq!(after.extract.len(), 12);
    assert!(after.trained_at >= before.trained_at);

    // The pre-mutation generation is still a coherent pair.
    assert_eq!(before.extract.len(), 11);
    assert!(before.classifier.is_trained());

    // The new chant is immediately predictable.
    let recommendation = engine.recommend(&answers(&[
        (Feature::Yadnya, "Dewa_Yadnya"),
        (Feature::Upacara, "Banyu_Pinaruh"),
    ]));
    assert_eq!(recommendation.status, RecommendationStatus::Success);
    assert_eq!(recommendation.records[0].target, "Kidung_Banyu_Pinaruh_Ref");
}

#[test]
fn failed_mutation_keeps_the_current_generation() {
    let engine = engine();
    let before = engine.snapshot();

    let duplicate: ChantDetail = serde_json::from_value(serde_json::json!({
        "target": "Kidung_Wargasari_Ref",
        "judul": "Kidung Wargasari"
    }))
    .unwrap();
    assert!(engine.mutate(MutationOp::Create(duplicate)).is_err());

    let after = engine.snapshot();
    assert!(Arc::ptr_eq(&before, &after));
}

/// Source that can be switched to fail loads, for retrain-failure tests.
struct FlakySource {
    inner: InMemorySource,
    fail_loads: Arc<AtomicBool>,
}

impl ChantSource for FlakySource {
    fn all(&self) -> KidungResult<Vec<ChantDetail>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(SourceError::LoadFailed {
                reason: "backing store offline".to_string(),
            }
            .into());
        }
        self.inner.all()
    }
    fn detail_of(&self, target: &str) -> KidungResult<Option<ChantDetail>> {
        self.inner.detail_of(target)
    }
    fn apply(&mut self, op: MutationOp) -> KidungResult<()> {
        self.inner.apply(op)
    }
}

#[test]
fn retrain_failure_cannot_corrupt_the_previous_pair() {
    let fail_loads = Arc::new(AtomicBool::new(false));
    let engine = RecommendationEngine::boot(
        FlakySource {
            inner: fixture_source(),
            fail_loads: fail_loads.clone(),
        },
        EngineConfig::default(),
    );
    let before = engine.snapshot();
    assert!(before.classifier.is_trained());

    fail_loads.store(true, Ordering::SeqCst);
    let result = engine.mutate(MutationOp::Delete {
        target: "Kidung_Adri_Ref".to_string(),
    });
    assert!(result.is_err());

    // The mutation applied but the retrain failed: the previously-good
    // pair must still be what readers see.
    let after = engine.snapshot();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(after.extract.len(), 11);
}
