//! The dashboard view: its state, the one-off load that fills it and the
//! page rendered from it.

use std::sync::{
    Arc, RwLock,
    atomic::{AtomicBool, Ordering},
};

use maud::{Markup, html};
use tokio::task::JoinHandle;

use crate::{
    Error,
    api::ApiClient,
    balance::Balance,
    dashboard::{cards::balance_cards_view, tables::transactions_table},
    endpoints,
    header::Header,
    html::base,
    transaction::{FormattedTransaction, TransactionFormatter},
};

/// Everything the dashboard page is rendered from.
///
/// Starts out empty and is filled in at most once, when the load finishes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// The transactions shown in the table.
    pub transactions: Vec<FormattedTransaction>,
    /// The balance shown in the summary cards.
    pub balance: Balance,
}

/// Tracks whether a view is still mounted.
///
/// Shared between a [DashboardView] and its load task so that results which
/// arrive after the view is gone are thrown away.
#[derive(Debug, Clone)]
struct MountToken(Arc<AtomicBool>);

impl MountToken {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A mounted dashboard.
///
/// Mounting starts the single load of transactions and balance. The view
/// is unmounted when dropped, which also cancels a load still in flight.
pub struct DashboardView {
    state: Arc<RwLock<ViewState>>,
    mount_token: MountToken,
    load_task: Option<JoinHandle<()>>,
}

impl DashboardView {
    /// Mount a new dashboard and start loading its data with `client`.
    ///
    /// Returns straight away, the load runs on the tokio runtime. Must be
    /// called from within a tokio runtime.
    pub fn mount(client: ApiClient, formatter: TransactionFormatter) -> Self {
        let state = Arc::new(RwLock::new(ViewState::default()));
        let mount_token = MountToken::new();

        let load_task = tokio::spawn(load(
            client,
            formatter,
            Arc::clone(&state),
            mount_token.clone(),
        ));

        Self {
            state,
            mount_token,
            load_task: Some(load_task),
        }
    }

    /// Wait for the load started by [DashboardView::mount] to finish.
    ///
    /// Succeeds whether or not the load managed to fetch any data.
    ///
    /// # Errors
    /// Returns [Error::LoadTaskFailed] if the load task panicked.
    pub async fn settle(&mut self) -> Result<(), Error> {
        if let Some(load_task) = self.load_task.take() {
            load_task
                .await
                .inspect_err(|error| tracing::error!("dashboard load task failed: {error}"))
                .map_err(|error| Error::LoadTaskFailed(error.to_string()))?;
        }

        Ok(())
    }

    /// Render the dashboard page from the current state.
    ///
    /// # Errors
    /// Returns [Error::ViewStateLock] if the state lock is poisoned.
    pub fn render(&self) -> Result<Markup, Error> {
        let state = self
            .state
            .read()
            .inspect_err(|error| tracing::error!("could not acquire view state lock: {error}"))
            .map_err(|_| Error::ViewStateLock)?;

        Ok(dashboard_view(&state))
    }
}

impl Drop for DashboardView {
    fn drop(&mut self) {
        self.mount_token.unmount();

        if let Some(load_task) = self.load_task.take() {
            load_task.abort();
        }
    }
}

/// Fetch, format and apply the dashboard data.
///
/// Failures are logged and leave the state empty.
async fn load(
    client: ApiClient,
    formatter: TransactionFormatter,
    state: Arc<RwLock<ViewState>>,
    mount_token: MountToken,
) {
    let response = match client.get_transactions().await {
        Ok(response) => response,
        Err(error) => {
            tracing::error!("could not load dashboard data: {error}");
            return;
        }
    };

    let transactions = formatter.format_all(response.transactions);

    let mut state = match state.write() {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("could not acquire view state lock: {error}");
            return;
        }
    };

    if !mount_token.is_mounted() {
        tracing::debug!("dashboard was unmounted before its data arrived, discarding it");
        return;
    }

    *state = ViewState {
        transactions,
        balance: response.balance,
    };
    tracing::debug!("loaded {} transactions", state.transactions.len());
}

/// Renders the full dashboard page.
pub(super) fn dashboard_view(state: &ViewState) -> Markup {
    let content = html! {
        (Header::new(endpoints::DASHBOARD_VIEW).into_html())

        main class="container" {
            (balance_cards_view(&state.balance))
            (transactions_table(&state.transactions))
        }
    };

    base("Dashboard", &content)
}
