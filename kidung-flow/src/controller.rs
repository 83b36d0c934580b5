//! The questionnaire transition function.

use tracing::debug;

use kidung_core::constants::ALL_STAGES;
use kidung_core::feature::{AnswerMap, Feature};
use kidung_core::models::{NextQuestion, QuestionResult};
use kidung_extract::Extract;

/// Prompt copy per question.
fn hint(feature: Feature) -> Option<String> {
    let copy = match feature {
        Feature::Yadnya => "Pilih jenis yadnya yang akan dilaksanakan.",
        Feature::Upacara => "Pilih upacara yang sedang dipersiapkan.",
        Feature::Tahap => {
            "Pilih tahap upacara, atau pilih panduan lengkap untuk seluruh rangkaian."
        }
        Feature::Pura => "Pilih pura tempat pelaksanaan.",
        Feature::Makna => return None,
    };
    Some(copy.to_string())
}

/// Given the answers so far, filter the extract and return the next
/// unanswered question's valid option set, or `Complete`.
pub fn next_step(extract: &Extract, answers: &AnswerMap) -> QuestionResult {
    let filtered = extract.retain_answers(answers);

    let sequence = Feature::QUESTION_SEQUENCE;
    let answered = answers.len();
    if answered >= sequence.len() {
        return QuestionResult::Complete;
    }
    let feature = sequence[answered];
    debug!(%feature, answered, remaining_rows = filtered.len(), "questionnaire step");

    let options = match feature {
        Feature::Tahap => {
            // The full-guide option is always offered, even over zero rows:
            // selecting it means "do not filter by stage".
            let mut options = vec![ALL_STAGES.to_string()];
            options.extend(filtered.distinct(Feature::Tahap));
            options
        }
        Feature::Pura => {
            // A single-valued or empty location question cannot
            // discriminate, so it is not worth asking.
            let options = filtered.distinct(Feature::Pura);
            if options.len() <= 1 {
                return QuestionResult::Complete;
            }
            options
        }
        _ => {
            let options = filtered.distinct(feature);
            if options.is_empty() {
                return QuestionResult::Complete;
            }
            options
        }
    };

    QuestionResult::Next(NextQuestion {
        feature,
        options,
        step: answered + 1,
        total_steps: sequence.len(),
        hint: hint(feature),
    })
}
