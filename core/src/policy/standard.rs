use std::fmt;

use libris_common::library::LoanRecord;

use super::CostPolicy;

const DAILY_RATE: f64 = 1.00;
const BASE_DAYS: u32 = 14;
const LATE_SURCHARGE: f64 = 0.50;

/// Flat daily rate for the first two weeks, surcharged after that.
///
/// Only the days past [`BASE_DAYS`] pay the surcharge.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPolicy;

impl StandardPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl CostPolicy for StandardPolicy {
    fn calculate_cost(&self, loan: &LoanRecord) -> f64 {
        let days = loan.days_loaned();
        if days <= BASE_DAYS {
            return f64::from(days) * DAILY_RATE;
        }

        let base = f64::from(BASE_DAYS) * DAILY_RATE;
        let extra_days = f64::from(days - BASE_DAYS);
        base + extra_days * (DAILY_RATE + LATE_SURCHARGE)
    }

    fn policy_name(&self) -> &str {
        "Standard Policy"
    }

    fn summary(&self) -> String {
        format!(
            "{} ({DAILY_RATE:.2}/day, {:.2}/day after {BASE_DAYS} days)",
            self.policy_name(),
            DAILY_RATE + LATE_SURCHARGE
        )
    }
}

impl fmt::Display for StandardPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
