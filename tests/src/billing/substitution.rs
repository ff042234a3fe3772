#![cfg(test)]
//! Swapping the injected policy must change the price and nothing else.

use std::sync::Arc;

use libris_common::library::LoanRecord;
use libris_core::capability::Registry;
use libris_core::notification::RecordingSink;
use libris_core::policy::{CostPolicy, PremiumPolicy, StandardPolicy};
use libris_core::services::{FullService, LoanService};

use crate::support::{book, loan};

/// A pricing rule added outside the core, without touching any service.
struct FlatFeePolicy;

impl CostPolicy for FlatFeePolicy {
    fn calculate_cost(&self, _loan: &LoanRecord) -> f64 {
        2.0
    }

    fn policy_name(&self) -> &str {
        "Flat Fee"
    }
}

fn policies() -> Vec<Arc<dyn CostPolicy>> {
    vec![
        Arc::new(StandardPolicy),
        Arc::new(PremiumPolicy),
        Arc::new(FlatFeePolicy),
    ]
}

/// Replaces the cost and policy name so only the structure remains.
fn shape(message: &str, cost: f64, policy: &str) -> String {
    message
        .replace(&format!("{cost:.2}"), "<cost>")
        .replace(policy, "<policy>")
}

#[test]
fn loan_service_message_shape_is_policy_independent() {
    let shelf = book("Clean Code", "978-0-13-235088-4");
    let l = loan(&shelf, "Carlos", 20);

    let shapes: Vec<String> = policies()
        .into_iter()
        .map(|policy| {
            let name = policy.policy_name().to_string();
            let sink = Arc::new(RecordingSink::new());
            let cost = LoanService::new(policy, sink.clone()).process_loan(&l);
            shape(&sink.last().unwrap(), cost, &name)
        })
        .collect();

    assert!(shapes.windows(2).all(|w| w[0] == w[1]), "{shapes:?}");
}

#[test]
fn full_service_registry_is_policy_independent() {
    let shelf = book("DDD", "978-0-321-12521-5");
    let loans: Vec<LoanRecord> = (1..=5).map(|d| loan(&shelf, "Diego", d * 6)).collect();

    for policy in policies() {
        let name = policy.policy_name().to_string();
        let sink = Arc::new(RecordingSink::new());
        let mut service = FullService::new(policy, sink.clone());

        let total: f64 = loans.iter().map(|l| service.process_loan_fully(l)).sum();

        assert_eq!(service.total_loans_processed(), loans.len(), "{name}");
        assert!((service.total_revenue() - total).abs() < 1e-9, "{name}");
        assert_eq!(sink.len(), loans.len(), "{name}");
    }
}

#[test]
fn custom_policy_plugs_in_unchanged() {
    let shelf = book("Refactoring", "978-0-13-475759-9");
    let mut service = FullService::new(Arc::new(FlatFeePolicy), Arc::new(RecordingSink::new()));

    service.process_loan_fully(&loan(&shelf, "Ana", 1));
    service.process_loan_fully(&loan(&shelf, "Luis", 300));

    assert_eq!(service.to_string(), "FullService[Flat Fee, loans=2, revenue=4.00]");
}
