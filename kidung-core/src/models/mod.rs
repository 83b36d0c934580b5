pub mod chant;
pub mod question;
pub mod recommendation;
pub mod row;

pub use chant::ChantDetail;
pub use question::{NextQuestion, QuestionResult};
pub use recommendation::{
    Candidate, ContextResult, Prediction, Recommendation, RecommendationStatus,
};
pub use row::ChantRow;
