//! # Libris Core
//!
//! Loan billing built from small, swappable parts.
//!
//! * **[`policy`]**: pricing strategies turning a loan duration into a cost.
//! * **[`notification`]**: outbound channels for human-readable messages.
//! * **[`capability`]**: the three independent traits services pick from.
//! * **[`services`]**: concrete workflows composed from injected collaborators.
//! * **[`wiring`]**: the config struct that hands collaborators to services.
//!
//! High-level code depends on the traits in [`policy`], [`notification`] and
//! [`capability`], never on a concrete policy or sink. Collaborators are always
//! created by the caller and passed in.

pub mod capability;
pub mod notification;
pub mod policy;
pub mod services;
pub mod wiring;
