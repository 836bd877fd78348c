//! extrato-core: pure analysis core for personal bank-statement data.
//!
//! Raw rows come in from the ingestion layer, get classified into
//! [`Transaction`]s by the [`Classifier`], and an [`Analysis`] snapshot
//! derives every report from there. No I/O, no shared mutable state: the
//! classifier is immutable after construction and the snapshot is built
//! once per statement load and passed by reference.

pub mod analysis;
pub mod classify;
pub mod insights;
pub mod transaction;

pub use analysis::{
    Analysis, CategoryTotal, FoodSpendReport, MonthlySummary, PeriodSummary,
    PersonalTransfersReport, RecipientTotal, TopTransaction,
};
pub use classify::Classifier;
pub use insights::generate_insights;
pub use transaction::{Category, Transaction, TransactionKind};
