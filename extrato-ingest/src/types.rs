use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normalized output of statement parsing, before classification.
///
/// Every row reaching the core has a valid posting date; the parser drops
/// rows where the bank printed none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    pub posted_on: NaiveDate,
    pub booked_on: NaiveDate,
    pub title: String,
    pub description: String,
    /// Credit amount, >= 0
    pub credit: Decimal,
    /// Debit amount, >= 0
    pub debit: Decimal,
    /// Day-end running balance as printed by the bank (may be negative)
    pub balance: Decimal,
}
