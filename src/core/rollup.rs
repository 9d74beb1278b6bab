//! Time-bucketed revenue rollups.
//!
//! `monthly_totals` is the base series: one bucket per payment month with the
//! contributing (company, amount) pairs. The quarterly and yearly views are
//! derived from the monthly series by re-bucketing, never from the raw
//! contract list, so their totals are exact sums of the monthly totals they
//! cover.

use crate::core::month;
use crate::entities::Contract;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// One contributing slice of a rollup bucket.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractShare {
    /// Company the amount belongs to
    pub company: String,
    /// Amount contributed to the bucket
    pub amount: f64,
}

/// Total payments for a single calendar month.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    /// Payment month in `YYYY-MM` form
    pub month: String,
    /// Sum of all contract amounts in this month
    pub total: f64,
    /// Contributing contracts, sorted descending by amount
    pub contracts: Vec<ContractShare>,
}

/// Total payments for a re-bucketed period (quarter or year).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotal {
    /// Period label: `YYYY-Qn` for quarters, `YYYY` for years
    pub period: String,
    /// Sum of the constituent monthly totals
    pub total: f64,
    /// Contributing contracts across the period, sorted descending by amount
    pub contracts: Vec<ContractShare>,
    /// Whether the period lies strictly after today's quarter/year
    pub is_future: bool,
}

fn sort_shares_descending(shares: &mut [ContractShare]) {
    shares.sort_by(|a, b| b.amount.total_cmp(&a.amount));
}

/// Groups contracts by payment month within the inclusive
/// `[start_year, end_year]` window.
///
/// Output is ordered ascending by month; the zero-padded `YYYY-MM` form makes
/// lexicographic order chronological. Contracts whose payment date does not
/// parse are left out of the series.
#[must_use]
pub fn monthly_totals(
    contracts: &[Contract],
    start_year: i32,
    end_year: i32,
) -> Vec<MonthlyTotal> {
    let mut buckets: BTreeMap<&str, Vec<ContractShare>> = BTreeMap::new();

    for contract in contracts {
        if month::split_period(&contract.payment_date).is_none() {
            continue;
        }
        if contract.year < start_year || contract.year > end_year {
            continue;
        }
        buckets
            .entry(contract.payment_date.as_str())
            .or_default()
            .push(ContractShare {
                company: contract.company.clone(),
                amount: contract.amount,
            });
    }

    buckets
        .into_iter()
        .map(|(period, mut shares)| {
            sort_shares_descending(&mut shares);
            MonthlyTotal {
                month: period.to_string(),
                total: shares.iter().map(|s| s.amount).sum(),
                contracts: shares,
            }
        })
        .collect()
}

/// Re-buckets a monthly series by calendar quarter.
///
/// A quarter is flagged future when it is strictly after today's quarter.
/// Contributor lists merged across months are re-sorted descending by amount
/// so every bucket presents contributors the same way.
#[must_use]
pub fn quarterly_totals(monthly: &[MonthlyTotal], today: NaiveDate) -> Vec<PeriodTotal> {
    let current = (today.year(), month::quarter_of(today.month()));

    rebucket(monthly, |year, month_num| {
        let quarter = month::quarter_of(month_num);
        let label = format!("{year}-Q{quarter}");
        (label, (year, quarter) > current)
    })
}

/// Re-buckets a monthly series by calendar year. A year is flagged future
/// when it is strictly after today's year.
#[must_use]
pub fn yearly_totals(monthly: &[MonthlyTotal], today: NaiveDate) -> Vec<PeriodTotal> {
    let current_year = today.year();

    rebucket(monthly, |year, _| (format!("{year}"), year > current_year))
}

fn rebucket(
    monthly: &[MonthlyTotal],
    bucket_of: impl Fn(i32, u32) -> (String, bool),
) -> Vec<PeriodTotal> {
    let mut buckets: BTreeMap<String, PeriodTotal> = BTreeMap::new();

    for month_total in monthly {
        let Some((year, month_num)) = month::split_period(&month_total.month) else {
            continue;
        };
        let (label, is_future) = bucket_of(year, month_num);

        let bucket = buckets.entry(label.clone()).or_insert_with(|| PeriodTotal {
            period: label,
            total: 0.0,
            contracts: Vec::new(),
            is_future,
        });
        bucket.total += month_total.total;
        bucket.contracts.extend(month_total.contracts.iter().cloned());
    }

    let mut periods: Vec<PeriodTotal> = buckets.into_values().collect();
    for period in &mut periods {
        sort_shares_descending(&mut period.contracts);
    }
    periods
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
    fn test_monthly_totals_groups_and_sums() {
        let contracts = vec![
            sample_contract("Acme", "2025-01", 1000.0),
            sample_contract("Acme", "2025-02", 500.0),
            sample_contract("Beta", "2025-01", 300.0),
        ];

        let monthly = monthly_totals(&contracts, 2025, 2029);
        assert_eq!(monthly.len(), 2);

        assert_eq!(monthly[0].month, "2025-01");
        assert_eq!(monthly[0].total, 1300.0);
        assert_eq!(monthly[1].month, "2025-02");
        assert_eq!(monthly[1].total, 500.0);
    }

    #[test]
    fn test_monthly_totals_ordered_ascending_across_years() {
        let contracts = vec![
            sample_contract("Acme", "2026-01", 1.0),
            sample_contract("Acme", "2025-12", 1.0),
            sample_contract("Acme", "2025-02", 1.0),
        ];

        let monthly = monthly_totals(&contracts, 2025, 2029);
        let months: Vec<&str> = monthly.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["2025-02", "2025-12", "2026-01"]);
    }

    #[test]
    fn test_monthly_totals_contributors_sorted_descending() {
        let contracts = vec![
            sample_contract("Small", "2025-01", 10.0),
            sample_contract("Large", "2025-01", 1000.0),
            sample_contract("Medium", "2025-01", 100.0),
        ];

        let monthly = monthly_totals(&contracts, 2025, 2029);
        let companies: Vec<&str> = monthly[0]
            .contracts
            .iter()
            .map(|s| s.company.as_str())
            .collect();
        assert_eq!(companies, vec!["Large", "Medium", "Small"]);
    }

    #[test]
    fn test_monthly_totals_respects_year_window() {
        let contracts = vec![
            sample_contract("Old", "2024-12", 100.0),
            sample_contract("InRange", "2025-01", 100.0),
            sample_contract("Late", "2030-01", 100.0),
        ];

        let monthly = monthly_totals(&contracts, 2025, 2029);
        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly[0].month, "2025-01");
    }

    #[test]
    fn test_quarterly_totals_sum_constituent_months() {
        let contracts = vec![
            sample_contract("Acme", "2025-01", 100.0),
            sample_contract("Acme", "2025-02", 200.0),
            sample_contract("Beta", "2025-03", 300.0),
            sample_contract("Beta", "2025-04", 400.0),
        ];

        let monthly = monthly_totals(&contracts, 2025, 2029);
        let quarterly = quarterly_totals(&monthly, fixed_today());

        assert_eq!(quarterly.len(), 2);
        assert_eq!(quarterly[0].period, "2025-Q1");
        assert_eq!(quarterly[0].total, 600.0);
        assert_eq!(quarterly[1].period, "2025-Q2");
        assert_eq!(quarterly[1].total, 400.0);
    }

    #[test]
    fn test_quarterly_future_flag_is_strict() {
        let contracts = vec![
            sample_contract("Acme", "2025-05", 1.0), // Q2 2025, current quarter
            sample_contract("Acme", "2025-07", 1.0), // Q3 2025
            sample_contract("Acme", "2024-11", 1.0), // Q4 2024
        ];

        let monthly = monthly_totals(&contracts, 2024, 2029);
        let quarterly = quarterly_totals(&monthly, fixed_today());

        let by_period: Vec<(&str, bool)> = quarterly
            .iter()
            .map(|p| (p.period.as_str(), p.is_future))
            .collect();
        assert_eq!(
            by_period,
            vec![("2024-Q4", false), ("2025-Q2", false), ("2025-Q3", true)]
        );
    }

    #[test]
    fn test_quarterly_contributors_resorted_after_merge() {
        // The large February amount must rank above January's small ones after
        // the months merge into Q1.
        let contracts = vec![
            sample_contract("Tiny", "2025-01", 10.0),
            sample_contract("Big", "2025-02", 500.0),
            sample_contract("Mid", "2025-01", 100.0),
        ];

        let monthly = monthly_totals(&contracts, 2025, 2029);
        let quarterly = quarterly_totals(&monthly, fixed_today());

        let companies: Vec<&str> = quarterly[0]
            .contracts
            .iter()
            .map(|s| s.company.as_str())
            .collect();
        assert_eq!(companies, vec!["Big", "Mid", "Tiny"]);
    }

    #[test]
    fn test_yearly_totals_sum_and_flag() {
        let contracts = vec![
            sample_contract("Acme", "2025-01", 100.0),
            sample_contract("Acme", "2025-09", 200.0),
            sample_contract("Beta", "2026-01", 400.0),
        ];

        let monthly = monthly_totals(&contracts, 2025, 2029);
        let yearly = yearly_totals(&monthly, fixed_today());

        assert_eq!(yearly.len(), 2);
        assert_eq!(yearly[0].period, "2025");
        assert_eq!(yearly[0].total, 300.0);
        assert!(!yearly[0].is_future);
        assert_eq!(yearly[1].period, "2026");
        assert_eq!(yearly[1].total, 400.0);
        assert!(yearly[1].is_future);
    }

    #[test]
    fn test_empty_input_produces_empty_series() {
        let monthly = monthly_totals(&[], 2025, 2029);
        assert!(monthly.is_empty());
        assert!(quarterly_totals(&monthly, fixed_today()).is_empty());
        assert!(yearly_totals(&monthly, fixed_today()).is_empty());
    }
}
