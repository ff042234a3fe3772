//! Guided tour of the billing core using a handful of sample loans.

use std::sync::Arc;

use colored::*;
use libris_common::config::Config;
use libris_common::library::{BookRecord, LoanRecord};
use libris_core::capability::{CostCalculator, Registry};
use libris_core::notification::{ConsoleSink, NotificationSink};
use libris_core::policy::{PremiumPolicy, StandardPolicy};
use libris_core::services::{CostOnlyService, StatsService};
use libris_core::wiring::ServiceConfig;

use crate::commands::PolicyKind;
use crate::mprint;
use crate::terminal::print;

pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    records(cfg)?;
    policies(cfg)?;
    injected_services(cfg)?;
    segregated_capabilities(cfg)?;
    Ok(())
}

fn book(title: &str, author: &str, isbn: &str) -> anyhow::Result<Arc<BookRecord>> {
    Ok(Arc::new(BookRecord::new(title, author, isbn)?))
}

fn records(cfg: &Config) -> anyhow::Result<()> {
    print::header("records", cfg.quiet);

    let quijote = book("Don Quijote", "Cervantes", "978-84-376-0494-7")?;
    let orwell = book("1984", "George Orwell", "978-0-452-28423-4")?;
    print::aligned_line("Book", quijote.to_string());
    print::aligned_line("Book", orwell.to_string());

    match BookRecord::new("", "Author", "123") {
        Ok(_) => anyhow::bail!("a book without a title was accepted"),
        Err(e) => print::rejected("Empty title", e),
    }

    let first = LoanRecord::new(Arc::clone(&quijote), "Ana García", 7)?;
    let second = LoanRecord::new(orwell, "Luis Martínez", 21)?;
    print::aligned_line("Loan", first.to_string());
    print::aligned_line("Loan", second.to_string());

    match LoanRecord::new(quijote, "Pedro", -5) {
        Ok(_) => anyhow::bail!("a loan of -5 days was accepted"),
        Err(e) => print::rejected("Negative days", e),
    }

    mprint!();
    Ok(())
}

fn policies(cfg: &Config) -> anyhow::Result<()> {
    print::header("pricing policies", cfg.quiet);

    let clean_code = book("Clean Code", "Robert Martin", "978-0-13-235088-4")?;
    let short = LoanRecord::new(Arc::clone(&clean_code), "María", 5)?;
    let long = LoanRecord::new(clean_code, "Carlos", 20)?;

    for (idx, policy) in PolicyKind::All.policies().iter().enumerate() {
        print::tree_head(idx, &policy.summary());
        print::as_tree_one_level(vec![
            ("5 days".to_string(), print::cost(policy.calculate_cost(&short))),
            ("20 days".to_string(), print::cost(policy.calculate_cost(&long))),
        ]);
    }

    mprint!();
    Ok(())
}

fn injected_services(cfg: &Config) -> anyhow::Result<()> {
    print::header("injected collaborators", cfg.quiet);

    let patterns = book("Design Patterns", "GoF", "978-0-201-63361-0")?;
    let refactoring = book("Refactoring", "Fowler", "978-0-13-475759-9")?;
    let first = LoanRecord::new(patterns, "Elena", 10)?;
    let second = LoanRecord::new(refactoring, "Pablo", 18)?;

    let sink: Arc<dyn NotificationSink> = Arc::new(ConsoleSink::new());
    let service = ServiceConfig::new()
        .with_policy(Arc::new(StandardPolicy::new()))
        .with_sink(Arc::clone(&sink))
        .build_loan_service()?;
    print::aligned_line("Policy", service.policy_info());
    print::aligned_line("Channel", service.channel_info());

    let standard_cost = service.process_loan(&first);
    service.process_loan(&second);

    // Same workflow, different policy: only the numbers change.
    let premium_service = ServiceConfig::new()
        .with_policy(Arc::new(PremiumPolicy::new()))
        .with_sink(sink)
        .build_loan_service()?;
    let premium_cost = premium_service.process_loan(&first);

    print::aligned_line(
        "Same loan",
        format!(
            "standard {} / premium {}",
            print::cost(standard_cost),
            print::cost(premium_cost)
        ),
    );

    mprint!();
    Ok(())
}

/// Books every loan into `stats` at the price `calculator` gives it.
fn tally(
    stats: &mut StatsService,
    calculator: &dyn CostCalculator,
    loans: &[&LoanRecord],
) -> anyhow::Result<()> {
    for loan in loans {
        stats.register_loan_with_cost(loan, calculator.calculate_cost(loan))?;
    }
    Ok(())
}

fn segregated_capabilities(cfg: &Config) -> anyhow::Result<()> {
    print::header("segregated capabilities", cfg.quiet);

    let pragmatic = book("The Pragmatic Programmer", "Hunt", "978-0-13-595705-9")?;
    let ddd = book("DDD", "Eric Evans", "978-0-321-12521-5")?;
    let first = LoanRecord::new(pragmatic, "Sara", 12)?;
    let second = LoanRecord::new(ddd, "Diego", 25)?;

    let standard = ServiceConfig::new().with_policy(Arc::new(StandardPolicy::new()));
    let calculator: CostOnlyService = standard.build_cost_only()?;
    print::tree_head(0, &calculator.to_string());
    print::as_tree_one_level(vec![
        ("Loan 1".to_string(), print::cost(calculator.calculate_cost(&first))),
        ("Loan 2".to_string(), print::cost(calculator.calculate_cost(&second))),
    ]);

    let mut stats: StatsService = standard.build_stats();
    tally(&mut stats, &calculator, &[&first, &second])?;
    print::tree_head(1, "StatsService");
    print::aligned_line("Statistics", stats.statistics().to_string());

    let mut full = ServiceConfig::new()
        .with_policy(Arc::new(PremiumPolicy::new()))
        .with_sink(Arc::new(ConsoleSink::new()))
        .build_full_service()?;
    full.process_loan_fully(&first);
    full.process_loan_fully(&second);
    print::tree_head(2, &full.to_string());

    let as_calculator: &dyn CostCalculator = &full;
    let as_registry: &dyn Registry = &full;
    print::as_tree_one_level(vec![
        ("Calculator".to_string(), print::cost(as_calculator.calculate_cost(&first))),
        (
            "Registry".to_string(),
            format!("{} loans", as_registry.total_loans_processed()).normal(),
        ),
    ]);

    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
