use std::fmt;
use std::sync::Arc;

use libris_common::library::LoanRecord;
use tracing::info;

use super::ledger::{LoanLedger, LoanStatistics};
use crate::capability::{CostCalculator, Notifier, Registry, loan_message};
use crate::notification::NotificationSink;
use crate::policy::CostPolicy;

/// Prices, records and announces loans.
///
/// The only service offering all three capabilities. Revenue is booked
/// separately from the loan itself, see [`FullService::process_loan_fully`].
pub struct FullService {
    policy: Arc<dyn CostPolicy>,
    sink: Arc<dyn NotificationSink>,
    ledger: LoanLedger,
}

impl FullService {
    pub fn new(policy: Arc<dyn CostPolicy>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            policy,
            sink,
            ledger: LoanLedger::default(),
        }
    }

    /// Runs the whole workflow for `loan` and returns its cost.
    ///
    /// Steps, always in this order:
    /// 1. price the loan with the injected policy,
    /// 2. append the loan to the registry (without its cost),
    /// 3. add the cost to the running revenue,
    /// 4. send a notification naming the cost and the policy.
    pub fn process_loan_fully(&mut self, loan: &LoanRecord) -> f64 {
        let cost = self.calculate_cost(loan);
        self.register_loan(loan);
        self.ledger.book_revenue(cost);

        let message = format!("Cost: {:.2} ({})", cost, self.policy.policy_name());
        self.notify_loan(loan, &message);

        cost
    }

    pub fn statistics(&self) -> LoanStatistics {
        self.ledger.statistics()
    }
}

impl CostCalculator for FullService {
    fn calculate_cost(&self, loan: &LoanRecord) -> f64 {
        self.policy.calculate_cost(loan)
    }
}

impl Notifier for FullService {
    fn notify_loan(&self, loan: &LoanRecord, message: &str) {
        self.sink.send(&loan_message(loan, message));
    }

    fn send_notification(&self, message: &str) {
        self.sink.send(message);
    }
}

impl Registry for FullService {
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

impl fmt::Display for FullService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FullService[{}, loans={}, revenue={:.2}]",
            self.policy.policy_name(),
            self.total_loans_processed(),
            self.total_revenue()
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
