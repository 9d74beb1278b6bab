//! Recent and upcoming payment feed.
//!
//! Selects contracts whose payment month falls inside a trailing/leading
//! window around today and tags each as past or upcoming. Presentation
//! callers slice the result further (e.g. last five past plus next five
//! upcoming); that slicing is a view concern and stays out of this module.

use crate::core::month;
use crate::entities::Contract;
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// One entry of the recent-activity feed.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPayment {
    /// Company display name
    pub company: String,
    /// Payment amount in dollars
    pub amount: f64,
    /// Payment month in `YYYY-MM` form
    pub payment_date: String,
    /// Whether the payment month started before today
    pub is_past: bool,
}

/// Returns payments whose month start lies strictly inside
/// `(today - past_days, today + future_days)`, ascending by payment month.
///
/// Contracts with an unparseable payment date are excluded from the feed.
#[must_use]
pub fn recent_activity(
    contracts: &[Contract],
    today: NaiveDate,
    past_days: u64,
    future_days: u64,
) -> Vec<RecentPayment> {
    let Some(window_start) = today.checked_sub_days(Days::new(past_days)) else {
        return Vec::new();
    };
    let Some(window_end) = today.checked_add_days(Days::new(future_days)) else {
        return Vec::new();
    };

    let mut payments: Vec<RecentPayment> = contracts
        .iter()
        .filter_map(|contract| {
            let start = month::month_start(&contract.payment_date)?;
            if start > window_start && start < window_end {
                Some(RecentPayment {
                    company: contract.company.clone(),
                    amount: contract.amount,
                    payment_date: contract.payment_date.clone(),
                    is_past: start < today,
                })
            } else {
                None
            }
        })
        .collect();

    payments.sort_by(|a, b| a.payment_date.cmp(&b.payment_date));
    payments
}
