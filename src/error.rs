//! Defines the app level error type and its conversion to rendered HTML pages.
use axum::response::{IntoResponse, Response};

use crate::error_pages::ErrorPage;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The base URL for the transactions API could not be parsed, or is not
    /// an absolute http(s) URL.
    #[error("invalid API base URL \"{0}\"")]
    InvalidApiUrl(String),

    /// The HTTP client used to talk to the transactions API could not be
    /// created.
    #[error("could not build the HTTP client: {0}")]
    HttpClient(String),

    /// The request to the transactions API failed.
    ///
    /// This covers connection errors, timeouts and non-success status codes.
    #[error("could not fetch transactions: {0}")]
    Fetch(String),

    /// The transactions API responded with a body that does not match the
    /// expected shape.
    #[error("the transactions response is malformed: {0}")]
    Validation(String),

    /// An error occurred while getting a timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// The lock guarding a dashboard's view state was poisoned.
    #[error("could not acquire the view state lock")]
    ViewStateLock,

    /// The task loading a dashboard's data panicked or was aborted.
    #[error("the dashboard load task failed: {0}")]
    LoadTaskFailed(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezone(timezone) => ErrorPage::internal_server_error_with(
                "Invalid Timezone Settings",
                &format!(
                    "Could not get timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            )
            .into_response(),
            Error::ViewStateLock => ErrorPage::internal_server_error().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::internal_server_error().into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::Error;

    #[test]
    fn errors_render_as_internal_server_error() {
        let errors = [
            Error::ViewStateLock,
            Error::InvalidTimezone("Mars/Olympus_Mons".to_owned()),
            Error::LoadTaskFailed("task panicked".to_owned()),
        ];

        for error in errors {
            let response = error.into_response();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
