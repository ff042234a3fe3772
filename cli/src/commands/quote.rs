use std::sync::Arc;

use anyhow::Context;
use colored::*;
use libris_common::config::Config;
use libris_common::library::{BookRecord, LoanRecord};
use libris_core::capability::CostCalculator;
use libris_core::services::CostOnlyService;

use crate::commands::PolicyKind;
use crate::terminal::print;

const QUOTE_TITLE: &str = "Quote";
const QUOTE_AUTHOR: &str = "Library";
const QUOTE_ISBN: &str = "quote";
const QUOTE_BORROWER: &str = "Guest";

/// Prices `days` under each selected policy. Nothing is recorded or announced.
pub fn quote(days: i64, kind: PolicyKind, cfg: &Config) -> anyhow::Result<()> {
    let book = Arc::new(BookRecord::new(QUOTE_TITLE, QUOTE_AUTHOR, QUOTE_ISBN)?);
    let loan = LoanRecord::new(book, QUOTE_BORROWER, days)
        .with_context(|| format!("cannot quote a loan of {days} days"))?;

    for policy in kind.policies() {
        let calculator = CostOnlyService::new(policy);
        let name = calculator.policy_name();
        let cost = calculator.calculate_cost(&loan);

        match cfg.quiet {
            0 => print::aligned_line(name, print::cost(cost)),
            _ => print::print(&format!("{name}: {cost:.2}")),
        }
    }

    if cfg.quiet == 0 {
        print::print_status(format!("{} days quoted", days.to_string().bold()));
    }
    Ok(())
}
