//! Dashboard HTTP handler.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error, api::ApiClient, dashboard::view::DashboardView,
    transaction::TransactionFormatter,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The client for fetching transactions and the balance.
    pub api_client: ApiClient,
    /// Formats transactions for display in the local timezone.
    pub transaction_formatter: TransactionFormatter,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
            transaction_formatter: state.transaction_formatter.clone(),
        }
    }
}

/// Display the balance summary and the list of transactions.
///
/// If the transactions API cannot be reached or sends a malformed response,
/// the page is still shown, just without any data.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let mut view = DashboardView::mount(state.api_client, state.transaction_formatter);
    view.settle().await?;

    Ok(view.render()?.into_response())
}
