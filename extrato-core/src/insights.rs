//! Rule-driven advisory strings over the aggregates.
//!
//! Rules run in a fixed order and are independent: each appends at most
//! one line and none reads another's outcome. The three savings-rate
//! rules are a single three-way branch, not separate checks.

use rust_decimal::Decimal;

use crate::analysis::{CategoryTotal, FoodSpendReport, PeriodSummary};

/// Generate advisory lines for the period.
///
/// `expenses` is the expense-side category breakdown, largest first, as
/// produced by `Analysis::category_breakdown`.
pub fn generate_insights(
    summary: &PeriodSummary,
    expenses: &[CategoryTotal],
    food: &FoodSpendReport,
) -> Vec<String> {
    let mut insights = Vec::new();

    // With no income at all the savings rate is pinned to zero by policy;
    // reading that as "low savings" would be noise, so the whole branch
    // is skipped.
    if summary.total_income > Decimal::ZERO {
        if summary.savings_rate < Decimal::ZERO {
            let shortfall = summary.total_expense - summary.total_income;
            insights.push(format!(
                "⚠️ ALERTA: Você gastou mais do que ganhou no período. \
                 Déficit de R$ {shortfall:.2}"
            ));
        } else if summary.savings_rate < Decimal::TEN {
            insights.push(format!(
                "📊 Sua taxa de poupança está em {:.1}%. \
                 O recomendado é poupar pelo menos 20% da renda.",
                summary.savings_rate
            ));
        } else if summary.savings_rate >= Decimal::from(20) {
            insights.push(format!(
                "✅ Excelente! Sua taxa de poupança de {:.1}% \
                 está acima do recomendado.",
                summary.savings_rate
            ));
        }
    }

    if food.share_of_expenses > Decimal::from(25) {
        insights.push(format!(
            "🍔 Gastos com alimentação fora representam {:.1}% dos seus \
             gastos totais. Considere preparar mais refeições em casa.",
            food.share_of_expenses
        ));
    }

    if let Some(largest) = expenses.first() {
        insights.push(format!(
            "💰 Sua maior categoria de gasto é '{}' com R$ {:.2} no período.",
            largest.category, largest.total
        ));
    }

    insights
}
