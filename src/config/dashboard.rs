//! Dashboard aggregation parameters.
//!
//! These drive the aggregation engine: which year the headline revenue
//! figures target, the year window of the monthly chart, the day windows of
//! the recent-activity feed, and how many companies the ranking keeps.

use serde::Deserialize;

/// Tunable parameters for the dashboard report.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Year the quarter/annual revenue cards target
    pub target_year: i32,
    /// First year included in the monthly rollup window
    pub rollup_start_year: i32,
    /// Last year included in the monthly rollup window (inclusive)
    pub rollup_end_year: i32,
    /// Trailing window of the recent-activity feed, in days
    pub recent_past_days: u64,
    /// Leading window of the recent-activity feed, in days
    pub recent_future_days: u64,
    /// Maximum number of companies in the top ranking
    pub top_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            target_year: 2026,
            rollup_start_year: 2025,
            rollup_end_year: 2029,
            recent_past_days: 30,
            recent_future_days: 60,
            top_limit: 10,
        }
    }
}
