//! Shared building blocks for the `libris` workspace.
//!
//! * **[`library`]**: the value objects every other crate passes around
//!   ([`library::BookRecord`], [`library::LoanRecord`]).
//! * **[`error`]**: the single validation error kind.
//! * **[`config`]**: runtime switches filled in by the CLI.

pub mod config;
pub mod error;
pub mod library;
