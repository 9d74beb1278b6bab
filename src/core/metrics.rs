//! Dashboard headline metrics.
//!
//! Computes the figures shown on the dashboard's metric cards: how many
//! companies still have payments ahead of them, and expected revenue for the
//! next calendar month, the target first quarter, and the full target year.
//! All "current"/"next" windows are relative to the `today` argument, so
//! repeated calls across a month boundary yield different results.

use crate::core::month;
use crate::entities::Contract;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

/// Headline figures for the dashboard metric cards.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Number of distinct companies with at least one payment strictly after today
    pub active_contracts: usize,
    /// Revenue expected in the calendar month after today's
    pub next_month_revenue: f64,
    /// Revenue expected in Q1 of the target year
    pub current_quarter_revenue: f64,
    /// Display name of that quarter, e.g. "Q1 2026"
    pub current_quarter_name: String,
    /// Total revenue booked for the target year
    pub year_revenue: f64,
    /// The year the annual figure covers
    pub target_year: i32,
}

/// Computes all dashboard metrics in one pass over the contract list.
///
/// A contract counts as "future" when the first day of its payment month is
/// strictly after `today`, so payments due in the current month are already
/// treated as past.
#[must_use]
pub fn calculate_metrics(
    contracts: &[Contract],
    today: NaiveDate,
    target_year: i32,
) -> DashboardMetrics {
    let next_month = month::next_month_period(today);

    let mut future_companies: HashSet<&str> = HashSet::new();
    let mut next_month_revenue = 0.0;
    let mut current_quarter_revenue = 0.0;
    let mut year_revenue = 0.0;

    for contract in contracts {
        if month::month_start(&contract.payment_date)
            .is_some_and(|start| start > today)
        {
            future_companies.insert(contract.company.as_str());
        }

        if contract.payment_date == next_month {
            next_month_revenue += contract.amount;
        }

        if let Some((year, month_num)) = month::split_period(&contract.payment_date) {
            if year == target_year && month_num <= 3 {
                current_quarter_revenue += contract.amount;
            }
        }

        if contract.year == target_year {
            year_revenue += contract.amount;
        }
    }

    DashboardMetrics {
        active_contracts: future_companies.len(),
        next_month_revenue,
        current_quarter_revenue,
        current_quarter_name: format!("Q1 {target_year}"),
        year_revenue,
        target_year,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::sample_contract;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_active_contracts_counts_distinct_future_companies() {
        let contracts = vec![
            sample_contract("Acme", "2025-07", 100.0),
            sample_contract("Acme", "2025-08", 100.0),
            sample_contract("Beta", "2025-09", 50.0),
            sample_contract("Gamma", "2025-01", 75.0), // past only
        ];

        let metrics = calculate_metrics(&contracts, fixed_today(), 2026);
        assert_eq!(metrics.active_contracts, 2);
    }

    #[test]
    fn test_current_month_is_not_future() {
        // Payment in today's month starts before today, so it is not future.
        let contracts = vec![sample_contract("Acme", "2025-06", 100.0)];

        let metrics = calculate_metrics(&contracts, fixed_today(), 2026);
        assert_eq!(metrics.active_contracts, 0);
    }

    #[test]
    fn test_next_month_revenue_sums_only_next_month() {
        let contracts = vec![
            sample_contract("Acme", "2025-07", 100.0),
            sample_contract("Beta", "2025-07", 40.0),
            sample_contract("Gamma", "2025-08", 1000.0),
        ];

        let metrics = calculate_metrics(&contracts, fixed_today(), 2026);
        assert_eq!(metrics.next_month_revenue, 140.0);
    }

    #[test]
    fn test_next_month_rolls_over_december() {
        let december = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        let contracts = vec![
            sample_contract("Acme", "2026-01", 250.0),
            sample_contract("Beta", "2025-12", 99.0),
        ];

        let metrics = calculate_metrics(&contracts, december, 2026);
        assert_eq!(metrics.next_month_revenue, 250.0);
    }

    #[test]
    fn test_quarter_and_year_revenue_use_target_year() {
        let contracts = vec![
            sample_contract("Acme", "2026-01", 100.0),
            sample_contract("Acme", "2026-03", 200.0),
            sample_contract("Beta", "2026-04", 400.0), // Q2, year only
            sample_contract("Gamma", "2025-02", 50.0), // wrong year
        ];

        let metrics = calculate_metrics(&contracts, fixed_today(), 2026);
        assert_eq!(metrics.current_quarter_revenue, 300.0);
        assert_eq!(metrics.current_quarter_name, "Q1 2026");
        assert_eq!(metrics.year_revenue, 700.0);
        assert_eq!(metrics.target_year, 2026);
    }

    #[test]
    fn test_empty_input() {
        let metrics = calculate_metrics(&[], fixed_today(), 2026);
        assert_eq!(metrics.active_contracts, 0);
        assert_eq!(metrics.next_month_revenue, 0.0);
        assert_eq!(metrics.current_quarter_revenue, 0.0);
        assert_eq!(metrics.year_revenue, 0.0);
    }
}
