//! Explicit collaborator wiring.
//!
//! [`ServiceConfig`] collects the policy and sink chosen at the call site and
//! hands them to whichever service is built from it. A service that needs a
//! collaborator which was never supplied is not built.

use std::sync::Arc;

use libris_common::error::{ValidationError, ValidationResult};

use crate::notification::NotificationSink;
use crate::policy::CostPolicy;
use crate::services::{CostOnlyService, FullService, LoanService, StatsService};

#[derive(Clone, Default)]
pub struct ServiceConfig {
    pub policy: Option<Arc<dyn CostPolicy>>,
    pub sink: Option<Arc<dyn NotificationSink>>,
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: Arc<dyn CostPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build_cost_only(&self) -> ValidationResult<CostOnlyService> {
        Ok(CostOnlyService::new(self.policy()?))
    }

    pub fn build_loan_service(&self) -> ValidationResult<LoanService> {
        Ok(LoanService::new(self.policy()?, self.sink()?))
    }

    pub fn build_full_service(&self) -> ValidationResult<FullService> {
        Ok(FullService::new(self.policy()?, self.sink()?))
    }

    /// Statistics need no collaborators; provided for symmetry.
    pub fn build_stats(&self) -> StatsService {
        StatsService::new()
    }

    fn policy(&self) -> ValidationResult<Arc<dyn CostPolicy>> {
        self.policy
            .clone()
            .ok_or(ValidationError::MissingDependency("policy"))
    }

    fn sink(&self) -> ValidationResult<Arc<dyn NotificationSink>> {
        self.sink
            .clone()
            .ok_or(ValidationError::MissingDependency("sink"))
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
    use crate::capability::Registry;
    use crate::notification::RecordingSink;
    use crate::policy::StandardPolicy;

    #[test]
    fn test_missing_policy() {
        let cfg = ServiceConfig::new().with_sink(Arc::new(RecordingSink::new()));

        assert_eq!(
            cfg.build_cost_only().err(),
            Some(ValidationError::MissingDependency("policy"))
        );
        assert_eq!(
            cfg.build_loan_service().err(),
            Some(ValidationError::MissingDependency("policy"))
        );
    }

    #[test]
    fn test_missing_sink() {
        let cfg = ServiceConfig::new().with_policy(Arc::new(StandardPolicy));

        assert!(cfg.build_cost_only().is_ok());
        assert_eq!(
            cfg.build_full_service().err(),
            Some(ValidationError::MissingDependency("sink"))
        );
    }

    #[test]
    fn test_collaborators_are_shared() {
        let policy: Arc<dyn CostPolicy> = Arc::new(StandardPolicy);
        let cfg = ServiceConfig::new()
            .with_policy(Arc::clone(&policy))
            .with_sink(Arc::new(RecordingSink::new()));

        let _loans = cfg.build_loan_service().unwrap();
        let _full = cfg.build_full_service().unwrap();

        // cfg + two services + local handle
        assert_eq!(Arc::strong_count(&policy), 4);
    }

    #[test]
    fn test_build_stats_starts_empty() {
        let stats = ServiceConfig::new().build_stats();
        assert_eq!(stats.total_loans_processed(), 0);
    }
}
