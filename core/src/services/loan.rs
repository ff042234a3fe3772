use std::sync::Arc;

use libris_common::library::LoanRecord;
use tracing::debug;

use crate::notification::NotificationSink;
use crate::policy::CostPolicy;

/// Prices a loan and announces the result on its notification channel.
///
/// Keeps no record of what it processed.
pub struct LoanService {
    policy: Arc<dyn CostPolicy>,
    sink: Arc<dyn NotificationSink>,
}

impl LoanService {
    pub fn new(policy: Arc<dyn CostPolicy>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { policy, sink }
    }

    /// Computes the cost of `loan`, sends a summary line and returns the cost.
    pub fn process_loan(&self, loan: &LoanRecord) -> f64 {
        let cost = self.policy.calculate_cost(loan);
        debug!(days = loan.days_loaned(), cost, "loan priced");

        let message = format!(
            "Loan processed - Book: '{}' | Borrower: {} | Days: {} | Cost: {:.2} | Policy: {}",
            loan.book().title(),
            loan.borrower_name(),
            loan.days_loaned(),
            cost,
            self.policy.policy_name()
        );
        self.sink.send(&message);

        cost
    }

    pub fn policy_info(&self) -> String {
        self.policy.summary()
    }

    pub fn channel_info(&self) -> String {
        format!("Channel: {}", self.sink.channel_name())
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
