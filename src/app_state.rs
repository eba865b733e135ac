//! Implements a struct that holds the state of the web server.

use std::time::Duration;

use crate::{Error, api::ApiClient, transaction::TransactionFormatter};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the transactions API.
    pub api_client: ApiClient,

    /// Formats transactions, showing dates in the configured timezone.
    pub transaction_formatter: TransactionFormatter,
}

impl AppState {
    /// Create a new [AppState] for the transactions API at `api_url`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "America/Sao_Paulo".
    /// Requests to the API are abandoned after `api_timeout`, if set.
    ///
    /// # Errors
    /// Returns an error if `api_url` is not a valid http(s) URL or
    /// `local_timezone` is not a known timezone.
    pub fn new(
        api_url: &str,
        api_timeout: Option<Duration>,
        local_timezone: &str,
    ) -> Result<Self, Error> {
        Ok(Self {
            api_client: ApiClient::new(api_url, api_timeout)?,
            transaction_formatter: TransactionFormatter::new(local_timezone)?,
        })
    }
}
