//! Dashboard module
//!
//! Provides the landing page: a summary of the balance and a table of every
//! transaction, both fetched from the transactions API each time the page is
//! viewed.

mod cards;
mod handlers;
mod tables;
mod view;

pub use handlers::{DashboardState, get_dashboard_page};
pub use view::{DashboardView, ViewState};
