//! extrato-ingest: C6 Bank statement ingestion and classification glue.

pub mod parsers;
pub mod types;

pub use parsers::c6_bank::{parse_c6_statement, read_statement};
pub use types::StatementRow;

use extrato_core::{Classifier, Transaction};

/// Turn normalized rows into classified transactions. This is the only
/// place rows become entities; the engine itself never sees raw rows.
pub fn classify_rows(rows: Vec<StatementRow>, classifier: &Classifier) -> Vec<Transaction> {
    rows.into_iter()
        .map(|row| {
            let (kind, category) =
                classifier.classify(&row.title, &row.description, row.credit, row.debit);
            Transaction {
                posted_on: row.posted_on,
                booked_on: row.booked_on,
                title: row.title,
                description: row.description,
                credit: row.credit,
                debit: row.debit,
                balance: row.balance,
                kind,
                category,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use extrato_core::{Category, TransactionKind};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_classify_rows_carries_fields_through() {
        let classifier = Classifier::new().unwrap();
        let rows = vec![StatementRow {
            posted_on: NaiveDate::from_ymd_opt(2025, 1, 16).unwrap(),
            booked_on: NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
            title: "Compra Cartão".to_string(),
            description: "IFOOD *PEDIDO".to_string(),
            credit: Decimal::ZERO,
            debit: dec!(48.90),
            balance: dec!(1491.32),
        }];

        let txns = classify_rows(rows, &classifier);
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].kind, TransactionKind::Expense);
        assert_eq!(txns[0].category, Category::Food);
        assert_eq!(txns[0].booked_on, NaiveDate::from_ymd_opt(2025, 1, 17).unwrap());
        assert_eq!(txns[0].balance, dec!(1491.32));
    }
}
