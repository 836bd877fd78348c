//! Classification engine: ordered regex rules over statement text.
//!
//! The rule table is data, not branching: an ordered list of
//! (category, patterns) groups where the first matching group wins.
//! Group order is part of the contract — `uber eats` must be claimed by
//! Alimentação before Transporte ever sees `uber`, and a cafe chain that
//! also looks like a bar stays under Alimentação because that group is
//! declared first.

use anyhow::Result;
use regex::Regex;
use rust_decimal::Decimal;

use crate::transaction::{Category, TransactionKind};

/// Ordered rule table. Patterns within a group are interchangeable;
/// across groups, declaration order is the sole tie-break.
const RULES: &[(Category, &[&str])] = &[
    // Income
    (
        Category::Salary,
        &[
            r"salario",
            r"salário",
            r"pagamento\s+de\s+salario",
            r"folha\s+de\s+pagamento",
            r"pro-labore",
            r"prolabore",
        ],
    ),
    (
        Category::Refund,
        &[
            r"estorno",
            r"devolucao",
            r"devolução",
            r"reembolso",
            r"credito\s+de\s+devolucao",
        ],
    ),
    // Essential expenses
    (
        Category::Food,
        &[
            r"ifood",
            r"i\s*food",
            r"rappi",
            r"uber\s*eats",
            r"lanchonete",
            r"padaria",
            r"hot\s*dog",
            r"hamburgueria",
            r"burger",
            r"mcdonalds",
            r"mc\s*donalds",
            r"arcos\s+dourados",
            r"subway",
            r"pizza",
            r"sushi",
            r"açaí",
            r"acai",
            r"sorvete",
            r"doceria",
            r"confeitaria",
            r"cafe",
            r"café",
            r"bakery",
            r"lanche",
            r"fast\s*food",
            r"cozinha",
            r"cowboy\s+burger",
            r"poke",
            r"restaurante\s+do",
            r"galo\s+ko",
            r"ab7\s+lanchonete",
        ],
    ),
    (
        Category::Groceries,
        &[
            r"supermercado",
            r"mercado",
            r"angeloni",
            r"imperatriz",
            r"bistek",
            r"giassi",
            r"\bbig\b",
            r"carrefour",
            r"extra",
            r"pao\s+de\s+acucar",
            r"hipermercado",
            r"atacadao",
            r"assai",
            r"atacado",
            r"vitamar",
            r"mundialmix",
            r"comercio\s+de\s+alimentos",
            r"mercado\s+\d+hs",
        ],
    ),
    (
        Category::Transport,
        &[
            // `uber eats` never reaches this group: Alimentação is declared first
            r"uber",
            r"99\s*(?:pop|taxi)",
            r"taxi",
            r"táxi",
            r"combustivel",
            r"combustível",
            r"gasolina",
            r"alcool",
            r"etanol",
            r"diesel",
            r"posto",
            r"shell",
            r"ipiranga",
            r"br\s+distribuidora",
            r"petrobras",
            r"estacionamento",
            r"parking",
            r"park",
            r"passagem",
            r"onibus",
            r"ônibus",
            r"metro",
            r"metrô",
            r"brt",
            r"raizen",
            r"quero\s+passagem",
            r"redpark",
        ],
    ),
    (
        Category::Health,
        &[
            r"farmacia",
            r"farmácia",
            r"drogaria",
            r"panvel",
            r"droga\s*raia",
            r"pacheco",
            r"pague\s*menos",
            r"drogasil",
            r"hospital",
            r"clinica",
            r"clínica",
            r"medico",
            r"médico",
            r"laboratorio",
            r"laboratório",
            r"exame",
            r"consulta",
            r"dentista",
            r"odonto",
            r"plano\s+de\s+saude",
            r"unimed",
            r"hapvida",
            r"amil",
        ],
    ),
    (
        Category::Housing,
        &[
            r"aluguel",
            r"condominio",
            r"condomínio",
            r"iptu",
            r"agua",
            r"água",
            r"luz",
            r"energia",
            r"celesc",
            r"eletricidade",
            r"gas",
            r"gás",
            r"internet",
            r"telefone",
            r"celular",
            r"vivo",
            r"claro",
            r"\btim\b",
            r"\boi\b",
        ],
    ),
    (
        Category::BankFees,
        &[
            r"tarifa",
            r"tar\s+saque",
            r"taxa",
            r"manutencao\s+cp",
            r"manutencao\s+conta",
            r"manutenção",
            r"anuidade",
            r"iof",
            r"juros",
            r"multa\s+bancaria",
        ],
    ),
    // Lifestyle expenses
    (
        Category::Leisure,
        &[
            r"cinema",
            r"cinemark",
            r"redecine",
            r"teatro",
            r"show",
            r"ingresso",
            r"evento",
            r"festa",
            r"balada",
            r"boate",
            r"parque",
            r"museu",
            r"turismo",
            r"viagem",
            r"hotel",
            r"pousada",
            r"airbnb",
            r"booking",
            r"comedy\s+club",
            r"pensa\s+entretenimento",
            r"aventura\s+na\s+ilha",
        ],
    ),
    (
        Category::Restaurants,
        &[
            r"restaurante",
            r"bar\b",
            r"pub\b",
            r"boteco",
            r"buteco",
            r"churrascaria",
            r"pizzaria",
            r"rodizio",
            r"rodízio",
            r"bistr[oô]",
            r"trattoria",
            r"outback",
            r"madero",
            r"coco\s+bambu",
            r"espartano",
            r"balburdia",
            r"santo\s+gole",
            r"coffee\s+shop",
            r"bacio\s+di\s+latte",
            r"il\s+campanar",
            r"vacuno",
            r"afonso\s+burguer",
            r"tenente\s+restaurante",
        ],
    ),
    (
        Category::Shopping,
        &[
            r"shopping",
            r"loja",
            r"store",
            r"americanas",
            r"amazon",
            r"magazine",
            r"magalu",
            r"casas\s+bahia",
            r"renner",
            r"riachuelo",
            r"cea",
            r"zara",
            r"hering",
            r"centauro",
            r"netshoes",
            r"mercado\s+livre",
            r"shopee",
            r"aliexpress",
            r"john\s+john",
            r"sephora",
            r"kiko\s+cosmetics",
            r"cosmeticos",
            r"like\s+case",
            r"noclass",
            r"hemera",
        ],
    ),
    (
        Category::Services,
        &[
            r"barbearia",
            r"barbeiro",
            r"cabeleireiro",
            r"salao",
            r"salão",
            r"estetica",
            r"estética",
            r"manicure",
            r"lavanderia",
            r"conserto",
            r"reparo",
            r"assistencia",
            r"tecnico",
            r"técnico",
            r"servico",
            r"serviço",
            r"academia",
            r"gym",
            r"fitness",
            r"crossfit",
            r"copias",
            r"impressos",
            r"lusandro",
        ],
    ),
    (
        Category::Subscriptions,
        &[
            r"netflix",
            r"spotify",
            r"amazon\s+prime",
            r"disney",
            r"hbo",
            r"globoplay",
            r"youtube\s+premium",
            r"deezer",
            r"apple\s+music",
            r"xbox",
            r"playstation",
            r"steam",
            r"twitch",
            r"patreon",
            r"onlyfans",
            r"boacompra",
            r"okto\s+tech",
            r"mooz",
            r"afinz",
            r"ip\s+afinz",
        ],
    ),
    // Withdrawals
    (
        Category::Withdrawal,
        &[
            r"saque",
            r"banco\s+24h",
            r"terminal\s+tecban",
            r"caixa\s+eletronico",
            r"atm",
        ],
    ),
];

/// Signals that a transfer went to an organization rather than a person:
/// legal suffixes, venue words, known merchants and payment processors.
const BUSINESS_INDICATORS: &[&str] = &[
    r"ltda",
    r"\bs\.?a\.?\b",
    r"eireli",
    r"\bme\b",
    r"epp",
    r"comercio",
    r"comércio",
    r"loja",
    r"servicos",
    r"serviços",
    r"restaurante",
    r"supermercado",
    r"farmacia",
    r"farmácia",
    r"posto",
    r"hotel",
    r"pousada",
    r"academia",
    r"clinica",
    r"clínica",
    r"hospital",
    r"ifood",
    r"uber",
    r"rappi",
    r"pagseguro",
    r"mercado\s+pago",
    r"picpay",
    r"nubank",
    r"tesouro\s+nacional",
];

const RECEIVED_TRANSFER: &str = r"pix\s+recebido";
const SENT_TRANSFER: &str = r"pix\s+enviado|transf\s+enviada\s+pix";

/// Compiled classification rules. Build once, share by reference.
pub struct Classifier {
    groups: Vec<(Category, Vec<Regex>)>,
    business: Vec<Regex>,
    received_transfer: Regex,
    sent_transfer: Regex,
}

impl Classifier {
    /// Compile the built-in rule table. The table is static, so this only
    /// fails if a pattern in it is broken (covered by tests).
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| Regex::new(&format!("(?i){pattern}"));

        let mut groups = Vec::with_capacity(RULES.len());
        for (category, patterns) in RULES {
            let compiled = patterns
                .iter()
                .map(|p| compile(p))
                .collect::<Result<Vec<_>, _>>()?;
            groups.push((*category, compiled));
        }

        let business = BUSINESS_INDICATORS
            .iter()
            .map(|p| compile(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            groups,
            business,
            received_transfer: compile(RECEIVED_TRANSFER)?,
            sent_transfer: compile(SENT_TRANSFER)?,
        })
    }

    /// Classify one statement line. Total: always returns a category,
    /// falling back to `Uncategorized` when nothing matches.
    pub fn classify(
        &self,
        title: &str,
        description: &str,
        credit: Decimal,
        _debit: Decimal,
    ) -> (TransactionKind, Category) {
        let kind = if credit > Decimal::ZERO {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };

        let text = format!("{title} {description}");

        // Received transfers outrank the rule table for income rows.
        if kind == TransactionKind::Income && self.received_transfer.is_match(&text) {
            return (kind, Category::IncomingTransfer);
        }

        // Sent transfers: decide person vs organization before falling
        // back to the table. A PIX to a pharmacy is Saúde, not a generic
        // business transfer; a PIX to a bare personal name is a personal
        // transfer, full stop.
        if kind == TransactionKind::Expense && self.sent_transfer.is_match(&text) {
            if self.is_business(&text) {
                let category = self.match_table(&text);
                if category != Category::Uncategorized {
                    return (kind, category);
                }
                return (kind, Category::BusinessTransfer);
            }
            return (kind, Category::PersonalTransfer);
        }

        (kind, self.match_table(&text))
    }

    /// First matching group wins; group order is the tie-break.
    fn match_table(&self, text: &str) -> Category {
        for (category, patterns) in &self.groups {
            if patterns.iter().any(|p| p.is_match(text)) {
                return *category;
            }
        }
        Category::Uncategorized
    }

    fn is_business(&self, text: &str) -> bool {
        self.business.iter().any(|p| p.is_match(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn classifier() -> Classifier {
        Classifier::new().expect("built-in rule table must compile")
    }

    fn expense(c: &Classifier, title: &str, description: &str) -> (TransactionKind, Category) {
        c.classify(title, description, Decimal::ZERO, dec!(50.00))
    }

    #[test]
    fn test_kind_follows_credit() {
        let c = classifier();
        let (kind, category) = c.classify("Salario mensal", "", dec!(5000.00), Decimal::ZERO);
        assert_eq!(kind, TransactionKind::Income);
        assert_eq!(category, Category::Salary);

        let (kind, _) = c.classify("Compra qualquer", "", Decimal::ZERO, dec!(10.00));
        assert_eq!(kind, TransactionKind::Expense);

        // Degenerate both-zero row still classifies, as an expense.
        let (kind, category) = c.classify("", "", Decimal::ZERO, Decimal::ZERO);
        assert_eq!(kind, TransactionKind::Expense);
        assert_eq!(category, Category::Uncategorized);
    }

    #[test]
    fn test_received_pix_outranks_rule_table() {
        let c = classifier();
        // "salario" would hit the Salary group, but the received-transfer
        // check runs first for income rows.
        let (kind, category) =
            c.classify("Pix recebido", "adiantamento salario", dec!(800.00), Decimal::ZERO);
        assert_eq!(kind, TransactionKind::Income);
        assert_eq!(category, Category::IncomingTransfer);
    }

    #[test]
    fn test_sent_pix_to_person() {
        let c = classifier();
        let (kind, category) = expense(&c, "Pix enviado", "joao silva");
        assert_eq!(kind, TransactionKind::Expense);
        assert_eq!(category, Category::PersonalTransfer);
    }

    #[test]
    fn test_sent_pix_to_business_without_table_hit() {
        let c = classifier();
        let (_, category) = expense(&c, "Pix enviado", "xyz distribuicao ltda");
        assert_eq!(category, Category::BusinessTransfer);
    }

    #[test]
    fn test_sent_pix_to_business_recovers_table_category() {
        let c = classifier();
        // Business indicator plus a Health pattern: the table result wins
        // over the generic business-transfer bucket.
        let (_, category) = expense(&c, "Pix enviado", "farmacia sao joao ltda");
        assert_eq!(category, Category::Health);
    }

    #[test]
    fn test_company_suffix_never_personal() {
        let c = classifier();
        let (_, category) = expense(&c, "Pix enviado", "acme comercio de pecas s.a.");
        assert_ne!(category, Category::PersonalTransfer);
    }

    #[test]
    fn test_group_order_breaks_ties() {
        let c = classifier();
        // "pizza" (Alimentação) and "pizzaria" (Restaurantes/Bares) both
        // match; Alimentação is declared first and must win.
        let (_, category) = expense(&c, "Cartao", "pizza da pizzaria bella");
        assert_eq!(category, Category::Food);

        // "uber eats" also matches Transporte's "uber", but Alimentação
        // comes first in the table.
        let (_, category) = expense(&c, "Cartao", "uber eats pedido 1234");
        assert_eq!(category, Category::Food);

        // Plain "uber" still lands in Transporte.
        let (_, category) = expense(&c, "Cartao", "uber viagem centro");
        assert_eq!(category, Category::Transport);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let c = classifier();
        let (_, category) = expense(&c, "IFOOD PEDIDO", "");
        assert_eq!(category, Category::Food);

        let (_, category) = expense(&c, "FARMÁCIA PANVEL", "");
        assert_eq!(category, Category::Health);
    }

    #[test]
    fn test_no_match_is_uncategorized() {
        let c = classifier();
        let (kind, category) = expense(&c, "Debito autorizado", "xpto qwerty");
        assert_eq!(kind, TransactionKind::Expense);
        assert_eq!(category, Category::Uncategorized);
    }

    #[test]
    fn test_withdrawal() {
        let c = classifier();
        let (_, category) = expense(&c, "Saque Banco 24h", "");
        assert_eq!(category, Category::Withdrawal);
    }
}
