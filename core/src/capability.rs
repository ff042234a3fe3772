//! # Capabilities
//!
//! Three small, unrelated traits. A service implements the ones it actually
//! offers and nothing else, so callers can ask for exactly the slice they use
//! (`&dyn CostCalculator`, `&mut dyn Registry`, ...) and no implementer ever
//! has to stub out a method it has no use for.

use libris_common::library::LoanRecord;

/// Prices a loan.
pub trait CostCalculator {
    fn calculate_cost(&self, loan: &LoanRecord) -> f64;
}

/// Sends loan-related messages.
pub trait Notifier {
    /// Prefixes `message` with the loan's title and borrower, then sends it.
    fn notify_loan(&self, loan: &LoanRecord, message: &str);

    /// Sends `message` untouched.
    fn send_notification(&self, message: &str);
}

/// Keeps track of processed loans.
pub trait Registry {
    /// Appends `loan` to the record. Does not touch revenue.
    fn register_loan(&mut self, loan: &LoanRecord);

    fn total_loans_processed(&self) -> usize;

    fn total_revenue(&self) -> f64;

    /// Registered loans, oldest first.
    fn loans(&self) -> &[LoanRecord];
}

/// Standard wording for [`Notifier::notify_loan`].
pub fn loan_message(loan: &LoanRecord, message: &str) -> String {
    format!(
        "Loan of '{}' to {}: {}",
        loan.book().title(),
        loan.borrower_name(),
        message
    )
}
