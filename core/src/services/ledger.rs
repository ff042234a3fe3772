//! Accumulator shared by the registry-capable services.

use std::fmt;

use libris_common::library::LoanRecord;

/// Ordered list of registered loans plus a running revenue total.
///
/// The two halves are updated independently: registering a loan does not add
/// revenue, and revenue can be booked without a loan.
#[derive(Debug, Clone, Default)]
pub(crate) struct LoanLedger {
    loans: Vec<LoanRecord>,
    revenue: f64,
}

impl LoanLedger {
    pub(crate) fn append(&mut self, loan: &LoanRecord) {
        self.loans.push(loan.clone());
    }

    pub(crate) fn book_revenue(&mut self, amount: f64) {
        self.revenue += amount;
    }

    pub(crate) fn loans(&self) -> &[LoanRecord] {
        &self.loans
    }

    pub(crate) fn count(&self) -> usize {
        self.loans.len()
    }

    pub(crate) fn revenue(&self) -> f64 {
        self.revenue
    }

    pub(crate) fn statistics(&self) -> LoanStatistics {
        LoanStatistics {
            total_loans: self.count(),
            total_revenue: self.revenue,
        }
    }
}

/// Point-in-time view of a registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanStatistics {
    pub total_loans: usize,
    pub total_revenue: f64,
}

impl fmt::Display for LoanStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} loans, {:.2} revenue",
            self.total_loans, self.total_revenue
        )
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
