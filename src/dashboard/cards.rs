//! Summary cards for the balance: income, outcome and the total.

use maud::{Markup, html};

use crate::{
    balance::{Amount, Balance},
    currency::{CURRENCY_SYMBOL, format_amount},
    html::static_path,
};

/// The three balance figures shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SummaryCard {
    Income,
    Outcome,
    Total,
}

impl SummaryCard {
    const ALL: [SummaryCard; 3] = [SummaryCard::Income, SummaryCard::Outcome, SummaryCard::Total];

    fn label(self) -> &'static str {
        match self {
            SummaryCard::Income => "Entradas",
            SummaryCard::Outcome => "Saídas",
            SummaryCard::Total => "Total",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            SummaryCard::Income => "income.svg",
            SummaryCard::Outcome => "outcome.svg",
            SummaryCard::Total => "total.svg",
        }
    }

    fn icon_alt(self) -> &'static str {
        match self {
            SummaryCard::Income => "Income",
            SummaryCard::Outcome => "Outcome",
            SummaryCard::Total => "Total",
        }
    }

    fn test_id(self) -> &'static str {
        match self {
            SummaryCard::Income => "balance-income",
            SummaryCard::Outcome => "balance-outcome",
            SummaryCard::Total => "balance-total",
        }
    }

    fn class(self) -> &'static str {
        match self {
            SummaryCard::Total => "card total",
            _ => "card",
        }
    }

    fn amount(self, balance: &Balance) -> &Amount {
        match self {
            SummaryCard::Income => &balance.income,
            SummaryCard::Outcome => &balance.outcome,
            SummaryCard::Total => &balance.total,
        }
    }
}

/// Renders the income, outcome and total cards for `balance`.
///
/// A balance that has not been loaded shows "R$ NaN" in every card.
pub(super) fn balance_cards_view(balance: &Balance) -> Markup {
    html! {
        section class="card-container" {
            @for card in SummaryCard::ALL {
                (summary_card(card, card.amount(balance)))
            }
        }
    }
}

fn summary_card(card: SummaryCard, amount: &Amount) -> Markup {
    html! {
        div class=(card.class()) {
            header {
                p { (card.label()) }
                img src=(static_path(card.icon())) alt=(card.icon_alt());
            }
            h1 data-testid=(card.test_id()) {
                (CURRENCY_SYMBOL) " " (format_amount(amount.value()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use crate::{
        balance::{Amount, Balance},
        test_utils::{element_text, must_select},
    };

    use super::balance_cards_view;

    fn card_values(balance: &Balance) -> Vec<String> {
        let html = Html::parse_fragment(&balance_cards_view(balance).into_string());

        ["balance-income", "balance-outcome", "balance-total"]
            .iter()
            .map(|test_id| {
                let selector = format!("h1[data-testid='{test_id}']");
                element_text(&must_select(&html, &selector)[0])
            })
            .collect()
    }

    #[test]
    fn shows_formatted_balance() {
        let balance = Balance {
            income: Amount::new("1500.5"),
            outcome: Amount::new("250"),
            total: Amount::new("1250.5"),
        };

        assert_eq!(
            card_values(&balance),
            vec!["R$ 1.500,50", "R$ 250,00", "R$ 1.250,50"]
        );
    }

    #[test]
    fn shows_not_a_number_before_balance_is_loaded() {
        assert_eq!(
            card_values(&Balance::default()),
            vec!["R$ NaN", "R$ NaN", "R$ NaN"]
        );
    }

    #[test]
    fn labels_cards_in_order() {
        let html = Html::parse_fragment(&balance_cards_view(&Balance::default()).into_string());

        let labels: Vec<String> = must_select(&html, ".card header p")
            .iter()
            .map(element_text)
            .collect();

        assert_eq!(labels, vec!["Entradas", "Saídas", "Total"]);
    }

    #[test]
    fn only_total_card_is_highlighted() {
        let html = Html::parse_fragment(&balance_cards_view(&Balance::default()).into_string());

        let highlighted = must_select(&html, ".card.total");

        assert_eq!(highlighted.len(), 1);
        assert_eq!(
            element_text(&must_select(&html, ".card.total header p")[0]),
            "Total"
        );
    }
}
