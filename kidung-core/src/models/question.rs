use serde::{Deserialize, Serialize};

use crate::feature::Feature;

/// The next unanswered question of the progressive questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextQuestion {
    /// Feature being asked.
    pub feature: Feature,
    /// Valid options for this feature given the answers so far, in the
    /// order they should be presented.
    pub options: Vec<String>,
    /// 1-based position of this question.
    pub step: usize,
    /// Total number of questions in the sequence.
    pub total_steps: usize,
    /// Prompt copy for the UI.
    pub hint: Option<String>,
}

/// Outcome of one questionnaire transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuestionResult {
    /// Another question remains.
    Next(NextQuestion),
    /// The flow is finished; the client should ask for a recommendation.
    Complete,
}

impl QuestionResult {
    pub fn is_complete(&self) -> bool {
        matches!(self, QuestionResult::Complete)
    }
}
