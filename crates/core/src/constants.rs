/// Annual benchmark return used for opportunity-cost estimates (12%).
pub const BENCHMARK_ANNUAL_RETURN: f64 = 0.12;

/// Annual inflation erosion estimate (6%).
pub const ANNUAL_INFLATION_RATE: f64 = 0.06;

/// Flat principal-plus-interest multiplier used by the decision analyzer's
/// EMI approximation. Intentionally distinct from the amortized formula in
/// `interest::emi`; the two must not be conflated.
pub const FLAT_EMI_MULTIPLIER: f64 = 1.12;

/// EMI burden above this share of income exceeds the recommended limit.
pub const EMI_BURDEN_WARNING_PCT: f64 = 50.0;

/// EMI burden above this share of income is manageable but limits savings.
pub const EMI_BURDEN_CAUTION_PCT: f64 = 30.0;

/// Analysis duration assumed when a decision kind does not require one.
pub const DEFAULT_DECISION_DURATION_MONTHS: u32 = 12;

/// Points needed to advance one reward level.
pub const POINTS_PER_LEVEL: u32 = 100;

/// Maximum number of goal suggestions returned at once.
pub const MAX_GOAL_SUGGESTIONS: usize = 3;

/// Day count used when converting a months-to-deadline into a calendar date.
pub const DAYS_PER_MONTH_APPROX: i64 = 30;
