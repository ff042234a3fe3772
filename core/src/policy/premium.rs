use std::fmt;

use libris_common::library::LoanRecord;

use super::CostPolicy;

const DAILY_RATE: f64 = 0.75;
const DISCOUNT_AFTER_DAYS: u32 = 7;
const DISCOUNT: f64 = 0.10;

/// Reduced daily rate, with a discount on the whole amount for long loans.
///
/// Unlike [`super::StandardPolicy`] the adjustment is not marginal: once a loan
/// passes [`DISCOUNT_AFTER_DAYS`], every day is discounted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PremiumPolicy;

impl PremiumPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl CostPolicy for PremiumPolicy {
    fn calculate_cost(&self, loan: &LoanRecord) -> f64 {
        let days = loan.days_loaned();
        let cost = f64::from(days) * DAILY_RATE;

        if days > DISCOUNT_AFTER_DAYS {
            cost * (1.0 - DISCOUNT)
        } else {
            cost
        }
    }

    fn policy_name(&self) -> &str {
        "Premium Policy"
    }

    fn summary(&self) -> String {
        format!(
            "{} ({DAILY_RATE:.2}/day, {:.0}% off after {DISCOUNT_AFTER_DAYS} days)",
            self.policy_name(),
            DISCOUNT * 100.0
        )
    }
}

impl fmt::Display for PremiumPolicy {
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
