#![cfg(test)]
use std::sync::Arc;

use libris_common::library::{BookRecord, LoanRecord};

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub fn book(title: &str, isbn: &str) -> Arc<BookRecord> {
    Arc::new(BookRecord::new(title, "Test Author", isbn).expect("valid book"))
}

pub fn loan(book: &Arc<BookRecord>, borrower: &str, days: i64) -> LoanRecord {
    LoanRecord::new(Arc::clone(book), borrower, days).expect("valid loan")
}
