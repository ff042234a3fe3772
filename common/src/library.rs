//! # Library Records
//!
//! Value objects describing what is lent and to whom.
//!
//! * [`book::BookRecord`]: a title identified by its ISBN.
//! * [`loan::LoanRecord`]: one book lent to one borrower for a number of days.
//!
//! Both validate eagerly in their constructors and expose no setters, so a
//! value that exists is always valid. Neither knows about prices or
//! notifications.

pub mod book;
pub mod loan;

pub use book::BookRecord;
pub use loan::LoanRecord;
