/// SariKidung system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Literal stored in place of an absent nominal attribute.
/// Every categorical column is total: absent values are this string, never null.
pub const NONE_VALUE: &str = "None";

/// Sentinel class forced into every encoder so out-of-vocabulary inputs
/// always have somewhere to go.
pub const UNKNOWN_VALUE: &str = "unknown";

/// Wire value of the synthetic stage option meaning "do not filter by stage;
/// return the full ordered stage sequence".
pub const ALL_STAGES: &str = "all";

/// Stage-order sentinel for chants with no defined position: sorts last.
pub const STAGE_ORDER_UNORDERED: u32 = 99;
