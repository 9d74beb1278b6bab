//! Top-company ranking.
//!
//! Rolls the contract list up per company: total value, contract count, and
//! the chronologically nearest future payment. Companies with equal totals
//! keep their first-seen order, so the truncated ranking is deterministic for
//! a given input order.

use crate::core::month;
use crate::entities::Contract;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Per-company rollup row for the top-contracts table.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyTotal {
    /// Company display name
    pub company: String,
    /// Sum of all contract amounts for this company
    pub total_value: f64,
    /// Number of contract rows for this company
    pub contract_count: usize,
    /// Earliest future payment month, absent when none is scheduled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_payment: Option<String>,
}

/// Ranks companies by total contract value, descending, truncated to `limit`.
///
/// "Next payment" is the minimum `YYYY-MM` among this company's rows whose
/// month starts strictly after `today`.
#[must_use]
pub fn top_companies(contracts: &[Contract], today: NaiveDate, limit: usize) -> Vec<CompanyTotal> {
    let mut totals: Vec<CompanyTotal> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();

    for contract in contracts {
        let is_future = month::month_start(&contract.payment_date)
            .is_some_and(|start| start > today);

        let index = match index_of.get(&contract.company) {
            Some(&i) => i,
            None => {
                index_of.insert(contract.company.clone(), totals.len());
                totals.push(CompanyTotal {
                    company: contract.company.clone(),
                    total_value: 0.0,
                    contract_count: 0,
                    next_payment: None,
                });
                totals.len() - 1
            }
        };

        let entry = &mut totals[index];
        entry.total_value += contract.amount;
        entry.contract_count += 1;
        if is_future {
            let is_sooner = entry
                .next_payment
                .as_deref()
                .is_none_or(|current| contract.payment_date.as_str() < current);
            if is_sooner {
                entry.next_payment = Some(contract.payment_date.clone());
            }
        }
    }

    // Stable sort keeps first-seen order between companies with equal totals.
    totals.sort_by(|a, b| b.total_value.total_cmp(&a.total_value));
    totals.truncate(limit);
    totals
}
