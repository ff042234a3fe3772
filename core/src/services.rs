//! # Composition Services
//!
//! Workflows assembled from injected collaborators. None of them creates a
//! policy or a sink; they are handed in by the caller (directly, or through
//! [`crate::wiring::ServiceConfig`]).
//!
//! ## Available Services
//! * [`cost_only::CostOnlyService`]: prices loans, nothing else.
//! * [`stats::StatsService`]: counts loans and revenue, nothing else.
//! * [`loan::LoanService`]: prices a loan and announces it.
//! * [`full::FullService`]: prices, records and announces.

pub mod cost_only;
pub mod full;
pub mod ledger;
pub mod loan;
pub mod stats;

pub use cost_only::CostOnlyService;
pub use full::FullService;
pub use ledger::LoanStatistics;
pub use loan::LoanService;
pub use stats::StatsService;
