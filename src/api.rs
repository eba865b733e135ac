//! Client for the transactions API that backs the dashboard.

use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

use crate::{Error, balance::Balance, transaction::Transaction};

/// The resource, relative to the API base URL, listing all transactions.
pub const TRANSACTIONS_RESOURCE: &str = "transactions";

/// How long to wait for the API before giving up, unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The body of a successful `GET /transactions` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionsResponse {
    /// Every transaction, in the order the API listed them.
    pub transactions: Vec<Transaction>,
    /// The totals across `transactions`.
    pub balance: Balance,
}

/// Fetches data from the transactions API.
///
/// Cloning is cheap, clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    transactions_url: Url,
}

impl ApiClient {
    /// Create a client for the API at `base_url`, e.g. "http://localhost:3333".
    ///
    /// Requests taking longer than `timeout` are abandoned, `None` waits
    /// indefinitely.
    ///
    /// # Errors
    /// Returns [Error::InvalidApiUrl] if `base_url` is not an absolute http(s)
    /// URL, or [Error::HttpClient] if the HTTP client cannot be initialised.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, Error> {
        let transactions_url = resource_url(base_url, TRANSACTIONS_RESOURCE)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .inspect_err(|error| tracing::error!("could not build HTTP client: {error}"))
            .map_err(|error| Error::HttpClient(error.to_string()))?;

        Ok(Self {
            http,
            transactions_url,
        })
    }

    /// The full URL of the transactions resource.
    pub fn transactions_url(&self) -> &Url {
        &self.transactions_url
    }

    /// Get all transactions and the balance across them.
    ///
    /// Makes exactly one request, failures are not retried.
    ///
    /// # Errors
    /// Returns [Error::Fetch] if the request fails or the API responds with a
    /// non-success status, and [Error::Validation] if the body does not match
    /// [TransactionsResponse].
    pub async fn get_transactions(&self) -> Result<TransactionsResponse, Error> {
        tracing::debug!("GET {}", self.transactions_url);

        let response = self
            .http
            .get(self.transactions_url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .inspect_err(|error| {
                tracing::error!("request to {} failed: {error}", self.transactions_url)
            })
            .map_err(|error| Error::Fetch(error.to_string()))?;

        let body = response
            .bytes()
            .await
            .inspect_err(|error| tracing::error!("could not read transactions body: {error}"))
            .map_err(|error| Error::Fetch(error.to_string()))?;

        parse_transactions_response(&body)
    }
}

/// Parse and validate the body of a `GET /transactions` response.
///
/// # Errors
/// Returns [Error::Validation] if `body` is not JSON of the expected shape.
pub fn parse_transactions_response(body: &[u8]) -> Result<TransactionsResponse, Error> {
    serde_json::from_slice(body)
        .inspect_err(|error| tracing::error!("invalid transactions response: {error}"))
        .map_err(|error| Error::Validation(error.to_string()))
}

/// Join `resource` onto `base_url` with exactly one slash between them.
fn resource_url(base_url: &str, resource: &str) -> Result<Url, Error> {
    let invalid_url = || Error::InvalidApiUrl(base_url.to_owned());

    let url = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        resource.trim_start_matches('/')
    );
    let url = Url::parse(&url).map_err(|_| invalid_url())?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(invalid_url()),
    }
}
