//! Pricing strategies.
//!
//! A [`CostPolicy`] maps a loan to a cost. Implementations are stateless and
//! free of side effects, so any one can stand in for another and a single
//! instance can be shared by every service through an `Arc`.
//!
//! Adding a pricing rule means adding a type that implements [`CostPolicy`];
//! nothing in this module or in [`crate::services`] changes.

use libris_common::library::LoanRecord;

mod premium;
mod standard;

pub use premium::PremiumPolicy;
pub use standard::StandardPolicy;

/// A replaceable pricing rule.
pub trait CostPolicy: Send + Sync {
    /// Cost of `loan` in the single billing unit. Never negative.
    fn calculate_cost(&self, loan: &LoanRecord) -> f64;

    /// Short name shown next to computed costs.
    fn policy_name(&self) -> &str;

    /// Name plus a one-line description of the rates.
    fn summary(&self) -> String {
        self.policy_name().to_string()
    }
}
