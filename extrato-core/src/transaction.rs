//! Transaction entities: one classified statement line and its kind/category.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether money came in or went out on this line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    #[serde(rename = "entrada")]
    Income,
    #[serde(rename = "saida")]
    Expense,
}

/// Closed set of statement categories. Serialized as the display label so
/// reports group under the same names the statement reader expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    // Income
    #[serde(rename = "Salário/Renda")]
    Salary,
    #[serde(rename = "Pix Recebido")]
    IncomingTransfer,
    #[serde(rename = "Estorno/Devolução")]
    Refund,

    // Essential expenses
    #[serde(rename = "Alimentação")]
    Food,
    #[serde(rename = "Supermercado")]
    Groceries,
    #[serde(rename = "Transporte")]
    Transport,
    #[serde(rename = "Saúde/Farmácia")]
    Health,
    #[serde(rename = "Moradia")]
    Housing,
    #[serde(rename = "Tarifas Bancárias")]
    BankFees,

    // Lifestyle expenses
    #[serde(rename = "Lazer/Entretenimento")]
    Leisure,
    #[serde(rename = "Restaurantes/Bares")]
    Restaurants,
    #[serde(rename = "Compras")]
    Shopping,
    #[serde(rename = "Serviços")]
    Services,
    #[serde(rename = "Assinaturas/Apps")]
    Subscriptions,

    // Transfers
    #[serde(rename = "Transferência Pessoal")]
    PersonalTransfer,
    #[serde(rename = "Pix Enviado")]
    BusinessTransfer,

    // Other
    #[serde(rename = "Saque")]
    Withdrawal,
    #[serde(rename = "Outros")]
    Uncategorized,
}

impl Category {
    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Salary => "Salário/Renda",
            Category::IncomingTransfer => "Pix Recebido",
            Category::Refund => "Estorno/Devolução",
            Category::Food => "Alimentação",
            Category::Groceries => "Supermercado",
            Category::Transport => "Transporte",
            Category::Health => "Saúde/Farmácia",
            Category::Housing => "Moradia",
            Category::BankFees => "Tarifas Bancárias",
            Category::Leisure => "Lazer/Entretenimento",
            Category::Restaurants => "Restaurantes/Bares",
            Category::Shopping => "Compras",
            Category::Services => "Serviços",
            Category::Subscriptions => "Assinaturas/Apps",
            Category::PersonalTransfer => "Transferência Pessoal",
            Category::BusinessTransfer => "Pix Enviado",
            Category::Withdrawal => "Saque",
            Category::Uncategorized => "Outros",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the statement, already classified.
///
/// Exactly one of `credit`/`debit` is expected to be non-zero; the kind is
/// derived from the amounts either way, so degenerate rows still classify.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Posting date; drives all period math
    pub posted_on: NaiveDate,
    /// Accounting date as printed by the bank
    pub booked_on: NaiveDate,
    pub title: String,
    pub description: String,
    /// Credit amount, >= 0
    pub credit: Decimal,
    /// Debit amount, >= 0
    pub debit: Decimal,
    /// Running balance at the close of the posting day, statement-authoritative
    pub balance: Decimal,
    pub kind: TransactionKind,
    pub category: Category,
}

impl Transaction {
    /// Signed value: `+credit` for income, `-debit` for expense.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.credit,
            TransactionKind::Expense => -self.debit,
        }
    }

    /// Absolute value: whichever of credit/debit is non-zero.
    pub fn amount(&self) -> Decimal {
        if self.credit > Decimal::ZERO {
            self.credit
        } else {
            self.debit
        }
    }

    /// Calendar month key, "YYYY-MM".
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.posted_on.year(), self.posted_on.month())
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}
