//! Terminal and JSON rendering of the core reports.

use anyhow::Result;
use serde::Serialize;

use extrato_core::{
    Analysis, CategoryTotal, FoodSpendReport, MonthlySummary, PeriodSummary,
    PersonalTransfersReport, TopTransaction, Transaction, TransactionKind, generate_insights,
};

pub(crate) fn print_summary(analysis: &Analysis) {
    let summary = analysis.period_summary();

    println!("Resumo do período");
    println!("{}", "─".repeat(46));
    println!("  Entradas:            R$ {:>12.2}", summary.total_income);
    println!("  Saídas:              R$ {:>12.2}", summary.total_expense);
    println!("  Saldo (extrato):     R$ {:>12.2}", summary.ending_balance);
    println!("  Taxa de poupança:    {:>14.2} %", summary.savings_rate);
    println!("  Gasto médio diário:  R$ {:>12.2}", summary.average_daily_expense);
    println!("  Maior gasto:         R$ {:>12.2}", summary.largest_expense);
    println!("  Maior entrada:       R$ {:>12.2}", summary.largest_income);
    println!("  Transações:          {:>15}", summary.transaction_count);

    let insights = collect_insights(analysis);
    if !insights.is_empty() {
        println!();
        for line in &insights {
            println!("  {line}");
        }
    }
}

pub(crate) fn print_monthly(analysis: &Analysis) {
    let monthly = analysis.monthly_summaries();
    if monthly.is_empty() {
        println!("Nenhuma transação no extrato");
        return;
    }

    println!(
        "{:<9} {:>12} {:>12} {:>12} {:>9}",
        "Mês", "Entradas", "Saídas", "Saldo", "Poupança"
    );
    println!("{}", "─".repeat(58));
    for m in &monthly {
        println!(
            "{:<9} {:>12.2} {:>12.2} {:>12.2} {:>8.1}%",
            m.month, m.total_income, m.total_expense, m.net_balance, m.savings_rate
        );
    }
}

pub(crate) fn print_categories(analysis: &Analysis, kind: TransactionKind) {
    let breakdown = analysis.category_breakdown(kind);
    if breakdown.is_empty() {
        println!("Nenhuma transação nessa direção");
        return;
    }

    let heading = match kind {
        TransactionKind::Income => "Entradas por categoria",
        TransactionKind::Expense => "Gastos por categoria",
    };
    println!("{heading}");
    println!("{}", "─".repeat(46));
    for row in &breakdown {
        println!("  {:<28} R$ {:>12.2}", row.category.label(), row.total);
    }
}

pub(crate) fn print_food(analysis: &Analysis) {
    let report = analysis.food_spend_report();

    println!("Alimentação fora de casa");
    println!("{}", "─".repeat(46));
    println!("  Total:               R$ {:>12.2}", report.total);
    println!("  Transações:          {:>15}", report.transaction_count);
    println!("  Média por pedido:    R$ {:>12.2}", report.average_per_transaction);
    println!("  % dos gastos:        {:>14.2} %", report.share_of_expenses);

    if !report.monthly_totals.is_empty() {
        println!();
        for (month, total) in &report.monthly_totals {
            println!("  {month}  R$ {total:>12.2}");
        }
    }
}

pub(crate) fn print_top(analysis: &Analysis, kind: TransactionKind, limit: usize) {
    let rows = analysis.top_transactions(kind, limit);
    if rows.is_empty() {
        println!("Nenhuma transação nessa direção");
        return;
    }

    for (i, t) in rows.iter().enumerate() {
        println!(
            "{:>2}. {}  R$ {:>10.2}  {:<24} {}",
            i + 1,
            t.date.format("%d/%m/%Y"),
            t.amount,
            t.category.label(),
            t.title
        );
    }
}

pub(crate) fn print_transfers(analysis: &Analysis) {
    let report = analysis.personal_transfers_report();

    println!("Transferências pessoais (PIX)");
    println!("{}", "─".repeat(46));
    println!("  Total enviado:       R$ {:>12.2}", report.total_sent);
    println!("  Transferências:      {:>15}", report.transfer_count);

    if !report.top_recipients.is_empty() {
        println!();
        println!("Maiores destinatários:");
        for r in &report.top_recipients {
            println!("  {:<32} R$ {:>12.2}", r.name, r.total);
        }
    }
}

pub(crate) fn print_insights(analysis: &Analysis) {
    let insights = collect_insights(analysis);
    if insights.is_empty() {
        println!("Nenhum insight para o período");
        return;
    }
    for line in &insights {
        println!("{line}");
    }
}

/// Everything at once, serialized as-is for downstream consumers.
#[derive(Serialize)]
struct ReportBundle<'a> {
    summary: PeriodSummary,
    monthly: Vec<MonthlySummary>,
    expenses_by_category: Vec<CategoryTotal>,
    income_by_category: Vec<CategoryTotal>,
    food: FoodSpendReport,
    personal_transfers: PersonalTransfersReport,
    top_expenses: Vec<TopTransaction>,
    top_income: Vec<TopTransaction>,
    insights: Vec<String>,
    transactions: &'a [Transaction],
}

pub(crate) fn print_json(analysis: &Analysis, top_limit: usize) -> Result<()> {
    let bundle = ReportBundle {
        summary: analysis.period_summary(),
        monthly: analysis.monthly_summaries(),
        expenses_by_category: analysis.category_breakdown(TransactionKind::Expense),
        income_by_category: analysis.category_breakdown(TransactionKind::Income),
        food: analysis.food_spend_report(),
        personal_transfers: analysis.personal_transfers_report(),
        top_expenses: analysis.top_transactions(TransactionKind::Expense, top_limit),
        top_income: analysis.top_transactions(TransactionKind::Income, top_limit),
        insights: collect_insights(analysis),
        transactions: analysis.transactions(),
    };

    println!("{}", serde_json::to_string_pretty(&bundle)?);
    Ok(())
}

fn collect_insights(analysis: &Analysis) -> Vec<String> {
    let summary = analysis.period_summary();
    let expenses = analysis.category_breakdown(TransactionKind::Expense);
    let food = analysis.food_spend_report();
    generate_insights(&summary, &expenses, &food)
}
