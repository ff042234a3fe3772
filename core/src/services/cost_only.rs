use std::fmt;
use std::sync::Arc;

use libris_common::library::LoanRecord;

use crate::capability::CostCalculator;
use crate::policy::CostPolicy;

/// Prices loans and does nothing else.
pub struct CostOnlyService {
    policy: Arc<dyn CostPolicy>,
}

impl CostOnlyService {
    pub fn new(policy: Arc<dyn CostPolicy>) -> Self {
        Self { policy }
    }

    pub fn policy_name(&self) -> &str {
        self.policy.policy_name()
    }
}

impl CostCalculator for CostOnlyService {
    fn calculate_cost(&self, loan: &LoanRecord) -> f64 {
        self.policy.calculate_cost(loan)
    }
}

impl fmt::Display for CostOnlyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CostOnlyService with {}", self.policy.policy_name())
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
