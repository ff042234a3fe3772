use std::fmt;
use std::sync::Arc;

use crate::error::{ValidationError, ValidationResult, require_text};
use crate::library::book::BookRecord;

/// One book lent to one borrower for a whole number of days.
///
/// The book is shared, not copied: every loan of the same title points at the
/// same [`BookRecord`].
#[derive(Debug, Clone)]
pub struct LoanRecord {
    book: Arc<BookRecord>,
    borrower_name: String,
    days_loaned: u32,
}

impl LoanRecord {
    /// Fails when `borrower_name` is blank or `days_loaned` is not positive.
    ///
    /// `days_loaned` is signed so that nonsense input from callers is reported
    /// as [`ValidationError::NonPositiveDays`] rather than wrapping around.
    pub fn new(
        book: Arc<BookRecord>,
        borrower_name: &str,
        days_loaned: i64,
    ) -> ValidationResult<Self> {
        let borrower_name = require_text("borrower name", borrower_name)?;
        if days_loaned <= 0 {
            return Err(ValidationError::NonPositiveDays(days_loaned));
        }
        let days_loaned =
            u32::try_from(days_loaned).map_err(|_| ValidationError::DaysOutOfRange(days_loaned))?;

        Ok(Self {
            book,
            borrower_name,
            days_loaned,
        })
    }

    pub fn book(&self) -> &BookRecord {
        &self.book
    }

    /// The shared handle, for callers that build further loans of the same book.
    pub fn shared_book(&self) -> Arc<BookRecord> {
        Arc::clone(&self.book)
    }

    pub fn borrower_name(&self) -> &str {
        &self.borrower_name
    }

    pub fn days_loaned(&self) -> u32 {
        self.days_loaned
    }
}

impl fmt::Display for LoanRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loan[book='{}', borrower='{}', days={}]",
            self.book.title(),
            self.borrower_name,
            self.days_loaned
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
