#![cfg(test)]
use std::sync::Arc;

use libris_common::error::ValidationError;
use libris_common::library::{BookRecord, LoanRecord};
use libris_core::capability::{CostCalculator, Notifier, Registry};
use libris_core::notification::{NotificationSink, RecordingSink};
use libris_core::policy::{CostPolicy, PremiumPolicy, StandardPolicy};
use libris_core::services::{FullService, StatsService};
use libris_core::wiring::ServiceConfig;

use crate::support::{approx_eq, book, loan};

/// Every documented price point, end to end through a cost-only service.
#[test]
fn documented_price_points() {
    let clean_code = book("Clean Code", "978-0-13-235088-4");
    let standard = ServiceConfig::new()
        .with_policy(Arc::new(StandardPolicy))
        .build_cost_only()
        .unwrap();
    let premium = ServiceConfig::new()
        .with_policy(Arc::new(PremiumPolicy))
        .build_cost_only()
        .unwrap();

    for days in 1..=14 {
        let cost = standard.calculate_cost(&loan(&clean_code, "María", days));
        assert!(approx_eq(cost, days as f64), "{days} days cost {cost}");
    }
    assert!(approx_eq(standard.calculate_cost(&loan(&clean_code, "Carlos", 20)), 23.0));
    assert!(approx_eq(premium.calculate_cost(&loan(&clean_code, "María", 5)), 3.75));
    assert!(approx_eq(premium.calculate_cost(&loan(&clean_code, "Carlos", 20)), 13.5));
}

#[test]
fn invalid_records_are_rejected() {
    assert!(matches!(
        BookRecord::new("", "Author", "123"),
        Err(ValidationError::EmptyField { field: "title" })
    ));

    let quijote = book("Don Quijote", "978-84-376-0494-7");
    assert!(matches!(
        LoanRecord::new(quijote, "Pedro", -5),
        Err(ValidationError::NonPositiveDays(-5))
    ));
}

#[test]
fn books_with_same_isbn_are_equal() {
    let a = BookRecord::new("1984", "George Orwell", "978-0-452-28423-4").unwrap();
    let b = BookRecord::new("Animal Farm", "Orwell", "978-0-452-28423-4").unwrap();
    assert_eq!(a, b);
}

#[test]
fn full_service_accumulates_in_call_order() -> anyhow::Result<()> {
    let sink = Arc::new(RecordingSink::new());
    let mut service = ServiceConfig::new()
        .with_policy(Arc::new(StandardPolicy))
        .with_sink(sink.clone())
        .build_full_service()?;

    let shelf = book("The Pragmatic Programmer", "978-0-13-595705-9");
    let borrowers = ["Sara", "Diego", "Elena", "Pablo"];
    let mut expected_revenue = 0.0;

    for (i, borrower) in borrowers.iter().enumerate() {
        let before = service.total_loans_processed();
        let cost = service.process_loan_fully(&loan(&shelf, borrower, 5 + 4 * i as i64));
        expected_revenue += cost;

        assert_eq!(service.total_loans_processed(), before + 1);
        assert!(approx_eq(service.total_revenue(), expected_revenue));
    }

    let order: Vec<&str> = service.loans().iter().map(|l| l.borrower_name()).collect();
    assert_eq!(order, borrowers);
    assert_eq!(sink.len(), borrowers.len());
    Ok(())
}

#[test]
fn only_costed_registration_moves_revenue() -> anyhow::Result<()> {
    let ddd = book("DDD", "978-0-321-12521-5");
    let mut stats = StatsService::new();

    stats.register_loan(&loan(&ddd, "Diego", 25));
    assert_eq!(stats.total_loans_processed(), 1);
    assert_eq!(stats.total_revenue(), 0.0);

    stats.register_loan_with_cost(&loan(&ddd, "Sara", 12), 12.0)?;
    assert_eq!(stats.total_loans_processed(), 2);
    assert!(approx_eq(stats.total_revenue(), 12.0));
    Ok(())
}

/// Code written against one capability accepts any service offering it.
#[test]
fn capabilities_are_consumed_independently() {
    fn price_all(calc: &dyn CostCalculator, loans: &[LoanRecord]) -> f64 {
        loans.iter().map(|l| calc.calculate_cost(l)).sum()
    }

    fn record_all(registry: &mut dyn Registry, loans: &[LoanRecord]) {
        for l in loans {
            registry.register_loan(l);
        }
    }

    fn announce(notifier: &dyn Notifier, loan: &LoanRecord) {
        notifier.notify_loan(loan, "ready for pickup");
    }

    let shelf = book("Refactoring", "978-0-13-475759-9");
    let loans = vec![loan(&shelf, "Ana", 3), loan(&shelf, "Luis", 16)];

    let sink = Arc::new(RecordingSink::new());
    let policy: Arc<dyn CostPolicy> = Arc::new(StandardPolicy);
    let cost_only = ServiceConfig::new()
        .with_policy(Arc::clone(&policy))
        .build_cost_only()
        .unwrap();
    let mut full = FullService::new(policy, sink.clone());
    let mut stats = StatsService::new();

    assert!(approx_eq(price_all(&cost_only, &loans), price_all(&full, &loans)));

    record_all(&mut stats, &loans);
    record_all(&mut full, &loans);
    assert_eq!(stats.total_loans_processed(), full.total_loans_processed());

    announce(&full, &loans[0]);
    assert_eq!(
        sink.last().as_deref(),
        Some("Loan of 'Refactoring' to Ana: ready for pickup")
    );
}

#[test]
fn services_share_one_sink() {
    let sink = Arc::new(RecordingSink::new());
    let shared: Arc<dyn NotificationSink> = sink.clone();
    let cfg = ServiceConfig::new()
        .with_policy(Arc::new(PremiumPolicy))
        .with_sink(shared);

    let simple = cfg.build_loan_service().unwrap();
    let mut full = cfg.build_full_service().unwrap();
    let shelf = book("Design Patterns", "978-0-201-63361-0");

    simple.process_loan(&loan(&shelf, "Elena", 10));
    full.process_loan_fully(&loan(&shelf, "Pablo", 4));
    full.send_notification("");

    assert_eq!(
        sink.messages(),
        vec![
            "Loan processed - Book: 'Design Patterns' | Borrower: Elena | Days: 10 | Cost: 6.75 | Policy: Premium Policy",
            "Loan of 'Design Patterns' to Pablo: Cost: 3.00 (Premium Policy)",
            "(empty message)",
        ]
    );
}
