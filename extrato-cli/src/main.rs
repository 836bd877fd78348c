use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use extrato_core::{Analysis, Classifier, TransactionKind};
use extrato_ingest::{classify_rows, read_statement};

mod config;
mod report;

#[derive(Parser, Debug)]
#[command(name = "extrato", version, about = "Analisador de extrato C6 Bank")]
struct Cli {
    /// Statement CSV (falls back to config, then ./extrato.csv)
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Period summary plus advisory insights
    Summary,

    /// One summary per calendar month
    Monthly,

    /// Totals per category, largest first
    Categories {
        /// Break down income instead of expenses
        #[arg(long)]
        income: bool,
    },

    /// Eating-out report (Alimentação + Restaurantes/Bares)
    Food,

    /// Largest single transactions
    Top {
        /// Rank income instead of expenses
        #[arg(long)]
        income: bool,

        /// How many rows to print (default: config report.top_limit)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// PIX sent to people: total and top recipients
    Transfers,

    /// Advisory insights only
    Insights,

    /// Full report bundle as JSON
    Json,

    /// Write the default config to ~/.extrato/config.toml
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match cli.command {
        Command::Init => config::init_config()?,

        Command::Summary => report::print_summary(&load_analysis(cli.csv, &cfg)?),

        Command::Monthly => report::print_monthly(&load_analysis(cli.csv, &cfg)?),

        Command::Categories { income } => {
            report::print_categories(&load_analysis(cli.csv, &cfg)?, direction(income));
        }

        Command::Food => report::print_food(&load_analysis(cli.csv, &cfg)?),

        Command::Top { income, limit } => {
            let limit = limit.unwrap_or(cfg.report.top_limit);
            report::print_top(&load_analysis(cli.csv, &cfg)?, direction(income), limit);
        }

        Command::Transfers => report::print_transfers(&load_analysis(cli.csv, &cfg)?),

        Command::Insights => report::print_insights(&load_analysis(cli.csv, &cfg)?),

        Command::Json => {
            let top_limit = cfg.report.top_limit;
            report::print_json(&load_analysis(cli.csv, &cfg)?, top_limit)?;
        }
    }

    Ok(())
}

fn direction(income: bool) -> TransactionKind {
    if income {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    }
}

/// Load, classify and snapshot the statement once; every report reads
/// from the same snapshot.
fn load_analysis(csv: Option<PathBuf>, cfg: &config::Config) -> Result<Analysis> {
    let csv_path = csv.unwrap_or_else(|| PathBuf::from(&cfg.statement.path));
    if !csv_path.exists() {
        bail!("statement not found: {} (pass --csv <path>)", csv_path.display());
    }

    let classifier = Classifier::new()?;
    let rows =
        read_statement(&csv_path).with_context(|| format!("parsing {}", csv_path.display()))?;
    Ok(Analysis::new(classify_rows(rows, &classifier)))
}
