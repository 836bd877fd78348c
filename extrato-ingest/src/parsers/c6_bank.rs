//! C6 Bank statement parser (CSV export).
//!
//! The export carries bank preamble lines before the real header:
//!
//!   C6 Bank - Extrato
//!   Agência: 0001  Conta: ...
//!   Data Lançamento,Data Contábil,Título,Descrição,Entrada(R$),Saída(R$),Saldo do Dia(R$)
//!   15/01/2025,15/01/2025,Pix recebido,Maria Souza,300.00,0.00,1540.22
//!
//! Amounts use a plain decimal point; dates are DD/MM/YYYY.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;

use crate::types::StatementRow;

const HEADER_MARKER: &str = "Data Lançamento";
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Column indices resolved from the header row, so reordered exports
/// still parse.
struct Columns {
    posted: usize,
    booked: usize,
    title: usize,
    description: usize,
    credit: usize,
    debit: usize,
    balance: usize,
}

impl Columns {
    fn from_header(record: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| {
            record
                .iter()
                .position(|field| field.trim() == name)
                .with_context(|| format!("statement header is missing column '{name}'"))
        };

        Ok(Self {
            posted: find("Data Lançamento")?,
            booked: find("Data Contábil")?,
            title: find("Título")?,
            description: find("Descrição")?,
            credit: find("Entrada(R$)")?,
            debit: find("Saída(R$)")?,
            balance: find("Saldo do Dia(R$)")?,
        })
    }
}

/// Parse C6 statement text into normalized rows.
///
/// Preamble lines are skipped until the header row is found. Rows without
/// a parseable posting date are dropped (the core never sees them); a bad
/// accounting date falls back to the posting date; malformed amounts
/// become zero.
pub fn parse_c6_statement(text: &str) -> Result<Vec<StatementRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(text.as_bytes());

    let mut columns: Option<Columns> = None;
    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result?;

        let Some(cols) = columns.as_ref() else {
            if record.iter().any(|field| field.trim() == HEADER_MARKER) {
                columns = Some(Columns::from_header(&record)?);
            }
            continue;
        };

        let posted_raw = record.get(cols.posted).unwrap_or("").trim();
        let posted_on = match NaiveDate::parse_from_str(posted_raw, DATE_FORMAT) {
            Ok(date) => date,
            Err(_) => continue, // summary lines, blanks, malformed rows
        };

        let booked_raw = record.get(cols.booked).unwrap_or("").trim();
        let booked_on = NaiveDate::parse_from_str(booked_raw, DATE_FORMAT).unwrap_or(posted_on);

        rows.push(StatementRow {
            posted_on,
            booked_on,
            title: record.get(cols.title).unwrap_or("").trim().to_string(),
            description: record.get(cols.description).unwrap_or("").trim().to_string(),
            credit: parse_amount(record.get(cols.credit)),
            debit: parse_amount(record.get(cols.debit)),
            balance: parse_amount(record.get(cols.balance)),
        });
    }

    Ok(rows)
}

fn parse_amount(field: Option<&str>) -> Decimal {
    field
        .unwrap_or("")
        .trim()
        .parse()
        .unwrap_or(Decimal::ZERO)
}

/// Read and decode a statement file.
///
/// C6 exports are not reliably UTF-8; bytes that fail UTF-8 validation are
/// re-read as Latin-1 (a plain byte-to-char mapping).
pub fn read_statement(path: impl AsRef<Path>) -> Result<Vec<StatementRow>> {
    let bytes = std::fs::read(path.as_ref())
        .with_context(|| format!("reading {}", path.as_ref().display()))?;

    let text = match String::from_utf8(bytes) {
        Ok(utf8) => utf8,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    };

    parse_c6_statement(&text)
}
