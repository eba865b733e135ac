//! GoFinances is a web app for keeping track of personal finances.
//!
//! This library serves the dashboard as HTML pages. The dashboard shows the
//! balance across all transactions and lists every transaction, both fetched
//! from the transactions API on each page view.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod balance;
mod currency;
mod dashboard;
mod endpoints;
mod error;
mod error_pages;
mod header;
mod html;
mod routing;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api::{ApiClient, DEFAULT_TIMEOUT, TRANSACTIONS_RESOURCE, TransactionsResponse};
pub use app_state::AppState;
pub use balance::{Amount, Balance};
pub use currency::{format_amount, format_value};
pub use dashboard::{DashboardView, ViewState};
pub use error::Error;
pub use routing::build_router;
pub use transaction::{
    Category, CreatedAt, FormattedTransaction, Transaction, TransactionFormatter, TransactionId,
    TransactionType,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
