//! The table listing every transaction.

use maud::{Markup, html};

use crate::transaction::{FormattedTransaction, TransactionType};

/// Renders one row per transaction, in the order given.
pub(super) fn transactions_table(transactions: &[FormattedTransaction]) -> Markup {
    html! {
        section class="table-container" {
            table {
                thead {
                    tr {
                        th { "Título" }
                        th { "Preço" }
                        th { "Categoria" }
                        th { "Data" }
                    }
                }

                tbody {
                    @for row in transactions {
                        (transaction_row(row))
                    }
                }
            }
        }
    }
}

fn transaction_row(row: &FormattedTransaction) -> Markup {
    let transaction = &row.transaction;
    let value_class = transaction.transaction_type.css_class();

    html! {
        tr {
            td class="title" { (transaction.title) }
            td class=(value_class) {
                @if transaction.transaction_type == TransactionType::Outcome {
                    "- "
                }
                (row.formatted_value)
            }
            td { (transaction.category.title) }
            td { (row.formatted_date) }
        }
    }
}
