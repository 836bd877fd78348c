//! Aggregation over a classified statement snapshot.
//!
//! `Analysis` owns an immutable, date-sorted copy of the transaction
//! collection; every report is recomputed on demand from that snapshot, so
//! a snapshot and its derived summaries can never disagree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::transaction::{Category, Transaction, TransactionKind};

/// Monetary rounding happens here and only here, when a report struct is
/// built. Accumulation stays at full precision.
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Whole-period financial summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// Day-end balance of the chronologically last transaction, exactly as
    /// the statement reports it — never income minus expense.
    pub ending_balance: Decimal,
    /// Percentage of income kept: (income - expense) / income * 100.
    /// Zero when there was no income.
    pub savings_rate: Decimal,
    pub average_daily_expense: Decimal,
    pub largest_expense: Decimal,
    pub largest_income: Decimal,
    pub transaction_count: usize,
}

/// Summary of a single calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    /// "YYYY-MM"
    pub month: String,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_balance: Decimal,
    pub savings_rate: Decimal,
    /// Expense-side transactions only (debit > 0)
    pub expenses_by_category: BTreeMap<Category, Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

/// Eating-out view: Alimentação plus Restaurantes/Bares combined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodSpendReport {
    pub total: Decimal,
    pub transaction_count: usize,
    pub average_per_transaction: Decimal,
    /// Percentage of the period's total expense
    pub share_of_expenses: Decimal,
    /// "YYYY-MM" -> total spent that month
    pub monthly_totals: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopTransaction {
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipientTotal {
    pub name: String,
    pub total: Decimal,
}

/// PIX sent to people (Transferência Pessoal only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalTransfersReport {
    pub total_sent: Decimal,
    pub transfer_count: usize,
    /// Top 10 recipients by total sent, grouped by transaction title —
    /// the statement carries no structured recipient field.
    pub top_recipients: Vec<RecipientTotal>,
}

/// One loaded statement, classified and date-sorted.
pub struct Analysis {
    transactions: Vec<Transaction>,
}

impl Analysis {
    /// Takes ownership of the collection and sorts it by posting date
    /// (stable), so period math never depends on input order.
    pub fn new(mut transactions: Vec<Transaction>) -> Self {
        transactions.sort_by_key(|t| t.posted_on);
        Self { transactions }
    }

    /// The classified snapshot, oldest first. Exposed for downstream
    /// consumers (prompt construction, exports) to quote verbatim.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn period_summary(&self) -> PeriodSummary {
        let total_income: Decimal = self.transactions.iter().map(|t| t.credit).sum();
        let total_expense: Decimal = self.transactions.iter().map(|t| t.debit).sum();

        let ending_balance = self
            .transactions
            .last()
            .map(|t| t.balance)
            .unwrap_or(Decimal::ZERO);

        let savings_rate = if total_income > Decimal::ZERO {
            (total_income - total_expense) / total_income * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        let average_daily_expense = match (self.transactions.first(), self.transactions.last()) {
            (Some(first), Some(last)) => {
                let days = (last.posted_on - first.posted_on).num_days().max(1);
                total_expense / Decimal::from(days)
            }
            _ => Decimal::ZERO,
        };

        let largest_expense = self
            .transactions
            .iter()
            .map(|t| t.debit)
            .max()
            .unwrap_or(Decimal::ZERO);
        let largest_income = self
            .transactions
            .iter()
            .map(|t| t.credit)
            .max()
            .unwrap_or(Decimal::ZERO);

        PeriodSummary {
            total_income: round2(total_income),
            total_expense: round2(total_expense),
            ending_balance: round2(ending_balance),
            savings_rate: round2(savings_rate),
            average_daily_expense: round2(average_daily_expense),
            largest_expense: round2(largest_expense),
            largest_income: round2(largest_income),
            transaction_count: self.transactions.len(),
        }
    }

    /// One summary per calendar month present, ascending by month key.
    pub fn monthly_summaries(&self) -> Vec<MonthlySummary> {
        let mut months: BTreeMap<String, Vec<&Transaction>> = BTreeMap::new();
        for t in &self.transactions {
            months.entry(t.month_key()).or_default().push(t);
        }

        months
            .into_iter()
            .map(|(month, txns)| {
                let income: Decimal = txns.iter().map(|t| t.credit).sum();
                let expense: Decimal = txns.iter().map(|t| t.debit).sum();
                let net = income - expense;
                let rate = if income > Decimal::ZERO {
                    net / income * Decimal::ONE_HUNDRED
                } else {
                    Decimal::ZERO
                };

                let mut by_category: BTreeMap<Category, Decimal> = BTreeMap::new();
                for t in txns.iter().filter(|t| t.debit > Decimal::ZERO) {
                    *by_category.entry(t.category).or_insert(Decimal::ZERO) += t.debit;
                }

                MonthlySummary {
                    month,
                    total_income: round2(income),
                    total_expense: round2(expense),
                    net_balance: round2(net),
                    savings_rate: round2(rate),
                    expenses_by_category: by_category
                        .into_iter()
                        .map(|(c, v)| (c, round2(v)))
                        .collect(),
                }
            })
            .collect()
    }

    /// Per-category totals for one direction, largest first.
    pub fn category_breakdown(&self, kind: TransactionKind) -> Vec<CategoryTotal> {
        let mut totals: BTreeMap<Category, Decimal> = BTreeMap::new();
        for t in &self.transactions {
            let amount = match kind {
                TransactionKind::Income => t.credit,
                TransactionKind::Expense => t.debit,
            };
            if amount > Decimal::ZERO {
                *totals.entry(t.category).or_insert(Decimal::ZERO) += amount;
            }
        }

        let mut breakdown: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category,
                total: round2(total),
            })
            .collect();
        breakdown.sort_by(|a, b| b.total.cmp(&a.total));
        breakdown
    }

    pub fn food_spend_report(&self) -> FoodSpendReport {
        let food: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| matches!(t.category, Category::Food | Category::Restaurants))
            .collect();

        let total: Decimal = food.iter().map(|t| t.debit).sum();
        let count = food.len();
        let average = if count > 0 {
            total / Decimal::from(count as u64)
        } else {
            Decimal::ZERO
        };

        let total_expense: Decimal = self.transactions.iter().map(|t| t.debit).sum();
        let share = if total_expense > Decimal::ZERO {
            total / total_expense * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        let mut monthly: BTreeMap<String, Decimal> = BTreeMap::new();
        for t in &food {
            *monthly.entry(t.month_key()).or_insert(Decimal::ZERO) += t.debit;
        }

        FoodSpendReport {
            total: round2(total),
            transaction_count: count,
            average_per_transaction: round2(average),
            share_of_expenses: round2(share),
            monthly_totals: monthly.into_iter().map(|(m, v)| (m, round2(v))).collect(),
        }
    }

    /// The `limit` largest single transactions of one direction. Stable
    /// sort: ties at the boundary keep posting order.
    pub fn top_transactions(&self, kind: TransactionKind, limit: usize) -> Vec<TopTransaction> {
        let amount_of = |t: &Transaction| match kind {
            TransactionKind::Income => t.credit,
            TransactionKind::Expense => t.debit,
        };

        let mut rows: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| amount_of(t) > Decimal::ZERO)
            .collect();
        rows.sort_by(|a, b| amount_of(b).cmp(&amount_of(a)));

        rows.into_iter()
            .take(limit)
            .map(|t| TopTransaction {
                date: t.posted_on,
                title: t.title.clone(),
                description: t.description.clone(),
                amount: round2(amount_of(t)),
                category: t.category,
            })
            .collect()
    }

    pub fn personal_transfers_report(&self) -> PersonalTransfersReport {
        let transfers: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.category == Category::PersonalTransfer)
            .collect();

        let total_sent: Decimal = transfers.iter().map(|t| t.debit).sum();

        let mut by_recipient: BTreeMap<&str, Decimal> = BTreeMap::new();
        for t in &transfers {
            *by_recipient
                .entry(t.title.as_str())
                .or_insert(Decimal::ZERO) += t.debit;
        }

        let mut top: Vec<RecipientTotal> = by_recipient
            .into_iter()
            .map(|(name, total)| RecipientTotal {
                name: name.to_string(),
                total: round2(total),
            })
            .collect();
        top.sort_by(|a, b| b.total.cmp(&a.total));
        top.truncate(10);

        PersonalTransfersReport {
            total_sent: round2(total_sent),
            transfer_count: transfers.len(),
            top_recipients: top,
        }
    }
}
