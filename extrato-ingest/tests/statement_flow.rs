//! End-to-end: CSV text -> rows -> classification -> aggregation -> insights.

use extrato_core::{Analysis, Category, Classifier, TransactionKind, generate_insights};
use extrato_ingest::{classify_rows, parse_c6_statement, read_statement};
use rust_decimal_macros::dec;

// Two months, deliberately out of chronological order: the analysis must
// sort before reading the ending balance.
const STATEMENT: &str = "\
C6 Bank - Extrato de Conta Corrente
Período: 01/01/2025 a 28/02/2025
Data Lançamento,Data Contábil,Título,Descrição,Entrada(R$),Saída(R$),Saldo do Dia(R$)
05/02/2025,05/02/2025,Salario,ACME COMERCIO LTDA,6000.00,0.00,11150.00
08/02/2025,08/02/2025,Uber,UBER *TRIP,0.00,50.00,11100.00
10/02/2025,10/02/2025,Farmacia Sao Joao,COMPRA CARTAO,0.00,120.00,10980.00
12/02/2025,12/02/2025,Pix enviado acme distribuidora ltda,TRANSFERENCIA PIX,0.00,300.00,10680.00
15/02/2025,15/02/2025,Netflix,ASSINATURA,0.00,55.90,10624.10
05/01/2025,05/01/2025,Salario,ACME COMERCIO LTDA,6000.00,0.00,6000.00
10/01/2025,10/01/2025,iFood,PEDIDO *1234,0.00,100.00,5900.00
12/01/2025,12/01/2025,Supermercado Bistek,COMPRA CARTAO,0.00,400.00,5500.00
15/01/2025,15/01/2025,Pix enviado joao silva,TRANSFERENCIA PIX,0.00,150.00,5350.00
18/01/2025,18/01/2025,Outback,COMPRA CARTAO,0.00,200.00,5150.00
";

fn analysis() -> Analysis {
    let classifier = Classifier::new().unwrap();
    let rows = parse_c6_statement(STATEMENT).unwrap();
    assert_eq!(rows.len(), 10);
    Analysis::new(classify_rows(rows, &classifier))
}

#[test]
fn test_full_flow_period_summary() {
    let summary = analysis().period_summary();

    assert_eq!(summary.total_income, dec!(12000.00));
    assert_eq!(summary.total_expense, dec!(1375.90));
    // Last transaction chronologically is Feb 15, not the last CSV line.
    assert_eq!(summary.ending_balance, dec!(10624.10));
    assert_eq!(summary.savings_rate, dec!(88.53));
    assert_eq!(summary.largest_income, dec!(6000.00));
    assert_eq!(summary.largest_expense, dec!(400.00));
    assert_eq!(summary.transaction_count, 10);
}

#[test]
fn test_full_flow_monthly_rollup() {
    let analysis = analysis();
    let monthly = analysis.monthly_summaries();

    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0].month, "2025-01");
    assert_eq!(monthly[0].total_expense, dec!(850.00));
    assert_eq!(monthly[1].month, "2025-02");
    assert_eq!(monthly[1].total_expense, dec!(525.90));

    // PIX to a company with no retail match lands in the transfer bucket,
    // PIX to a person stays personal.
    assert_eq!(
        monthly[1].expenses_by_category.get(&Category::BusinessTransfer),
        Some(&dec!(300.00))
    );
    assert_eq!(
        monthly[0].expenses_by_category.get(&Category::PersonalTransfer),
        Some(&dec!(150.00))
    );

    let rollup: rust_decimal::Decimal = monthly.iter().map(|m| m.total_expense).sum();
    assert_eq!(rollup, analysis.period_summary().total_expense);
}

#[test]
fn test_full_flow_reports_and_insights() {
    let analysis = analysis();

    let expenses = analysis.category_breakdown(TransactionKind::Expense);
    assert_eq!(expenses[0].category, Category::Groceries);
    assert_eq!(expenses[0].total, dec!(400.00));

    let food = analysis.food_spend_report();
    // iFood (Alimentação) + Outback (Restaurantes/Bares).
    assert_eq!(food.total, dec!(300.00));
    assert_eq!(food.transaction_count, 2);
    assert_eq!(food.share_of_expenses, dec!(21.80));

    let transfers = analysis.personal_transfers_report();
    assert_eq!(transfers.total_sent, dec!(150.00));
    assert_eq!(transfers.transfer_count, 1);
    assert_eq!(transfers.top_recipients[0].name, "Pix enviado joao silva");

    let insights = generate_insights(&analysis.period_summary(), &expenses, &food);
    // Savings rate 88.53 earns the positive line; food share 21.80 stays
    // under the 25% alert; the largest-category line always closes.
    assert_eq!(insights.len(), 2);
    assert!(insights[0].contains("Excelente"));
    assert!(insights[1].contains("Supermercado"));
}

#[test]
fn test_read_statement_decodes_latin1() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("extrato.csv");

    let text = "\
Data Lançamento,Data Contábil,Título,Descrição,Entrada(R$),Saída(R$),Saldo do Dia(R$)
15/01/2025,15/01/2025,Compra Cartão,FARMÁCIA PANVEL,0.00,35.00,965.00
";
    // Encode as Latin-1: every char in a C6 export fits one byte.
    let latin1: Vec<u8> = text.chars().map(|c| c as u8).collect();
    std::fs::write(&path, latin1).unwrap();

    let rows = read_statement(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Compra Cartão");
    assert_eq!(rows[0].description, "FARMÁCIA PANVEL");
    assert_eq!(rows[0].debit, dec!(35.00));
}
