use libris_common::error::{ValidationError, ValidationResult};
use libris_common::library::LoanRecord;
use tracing::info;

use super::ledger::{LoanLedger, LoanStatistics};
use crate::capability::Registry;

/// Keeps loan statistics. Prices nothing, notifies nobody.
#[derive(Debug, Default)]
pub struct StatsService {
    ledger: LoanLedger,
}

impl StatsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `loan` and books `cost` as revenue in one step.
    ///
    /// This is the only way revenue grows. A negative or non-finite `cost` is
    /// rejected before anything is recorded.
    pub fn register_loan_with_cost(&mut self, loan: &LoanRecord, cost: f64) -> ValidationResult<()> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(ValidationError::InvalidCost(cost));
        }
        self.register_loan(loan);
        self.ledger.book_revenue(cost);
        Ok(())
    }

    pub fn statistics(&self) -> LoanStatistics {
        self.ledger.statistics()
    }
}

impl Registry for StatsService {
    fn register_loan(&mut self, loan: &LoanRecord) {
        self.ledger.append(loan);
        info!("Loan registered: {}", loan);
    }

    fn total_loans_processed(&self) -> usize {
        self.ledger.count()
    }

    fn total_revenue(&self) -> f64 {
        self.ledger.revenue()
    }

    fn loans(&self) -> &[LoanRecord] {
        self.ledger.loans()
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

#[cfg(test)]
mod tests {
    use super::*;
    use libris_common::library::BookRecord;
    use std::sync::Arc;

    fn loans() -> (LoanRecord, LoanRecord) {
        let pragmatic = Arc::new(BookRecord::new("The Pragmatic Programmer", "Hunt", "978-0-13-595705-9").unwrap());
        let ddd = Arc::new(BookRecord::new("DDD", "Eric Evans", "978-0-321-12521-5").unwrap());
        (
            LoanRecord::new(pragmatic, "Sara", 12).unwrap(),
            LoanRecord::new(ddd, "Diego", 25).unwrap(),
        )
    }

    #[test]
    fn test_register_loan_leaves_revenue_alone() {
        let (first, second) = loans();
        let mut stats = StatsService::new();

        stats.register_loan(&first);
        stats.register_loan(&second);

        assert_eq!(stats.total_loans_processed(), 2);
        assert_eq!(stats.total_revenue(), 0.0);
    }

    #[test]
    fn test_register_with_cost_accumulates() {
        let (first, second) = loans();
        let mut stats = StatsService::new();

        stats.register_loan_with_cost(&first, 12.0).unwrap();
        stats.register_loan_with_cost(&second, 23.0).unwrap();

        assert_eq!(
            stats.statistics(),
            LoanStatistics {
                total_loans: 2,
                total_revenue: 35.0
            }
        );
        let borrowers: Vec<&str> = stats.loans().iter().map(|l| l.borrower_name()).collect();
        assert_eq!(borrowers, ["Sara", "Diego"]);
    }

    #[test]
    fn test_register_with_invalid_cost_records_nothing() {
        let (first, _) = loans();
        let mut stats = StatsService::new();

        assert_eq!(
            stats.register_loan_with_cost(&first, -1.0),
            Err(ValidationError::InvalidCost(-1.0))
        );
        assert!(stats.register_loan_with_cost(&first, f64::NAN).is_err());
        assert!(stats.register_loan_with_cost(&first, f64::INFINITY).is_err());

        assert_eq!(stats.total_loans_processed(), 0);
        assert_eq!(stats.total_revenue(), 0.0);
    }
}
