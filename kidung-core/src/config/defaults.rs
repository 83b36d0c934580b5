//! Named default values for all config fields.

/// Minimum classifier max-probability required to accept a prediction.
/// Below this the engine treats the classifier as having abstained and
/// falls back to context resolution. A deliberate precision/recall
/// tradeoff; earlier deployments ran as low as 0.01.
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.05;

/// How many ranked candidates a prediction carries.
pub const DEFAULT_TOP_CANDIDATES: usize = 3;
