//! Full page responses for requests that cannot be served: unknown routes
//! and internal server errors.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// An error page with a large status header, a description of what went
/// wrong and a suggested fix.
pub struct ErrorPage<'a> {
    pub status: StatusCode,
    pub description: &'a str,
    pub fix: &'a str,
}

impl<'a> ErrorPage<'a> {
    /// The page for a route that does not exist.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            description: "Something's missing.",
            fix: "Sorry, we can't find that page. You'll find lots to explore on the home page.",
        }
    }

    /// The page for an unexpected server side failure.
    pub fn internal_server_error() -> Self {
        Self::internal_server_error_with(
            "Sorry, something went wrong.",
            "Try again later or check the server logs",
        )
    }

    /// The internal server error page with a custom description and fix.
    pub fn internal_server_error_with(description: &'a str, fix: &'a str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            description,
            fix,
        }
    }

    fn title(&self) -> &'static str {
        match self.status {
            StatusCode::NOT_FOUND => "Not Found",
            _ => "Internal Server Error",
        }
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        let markup = error_view(
            self.title(),
            self.status.as_str(),
            self.description,
            self.fix,
        );

        (self.status, Html(markup.into_string())).into_response()
    }
}

/// Route fallback for unknown paths.
pub async fn get_404_not_found() -> Response {
    ErrorPage::not_found().into_response()
}

/// The page to redirect to when a request fails in an unexpected way.
pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::internal_server_error().into_response()
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use scraper::Selector;

    use crate::test_utils::{assert_valid_html, element_text, parse_html_document};

    use super::ErrorPage;

    #[tokio::test]
    async fn not_found_page_shows_status_code() {
        let response = ErrorPage::not_found().into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let header = html
            .select(&Selector::parse("h1").unwrap())
            .next()
            .expect("Could not find h1 header");
        assert_eq!(element_text(&header), "404");
    }

    #[tokio::test]
    async fn internal_server_error_page_shows_fix() {
        let response =
            ErrorPage::internal_server_error_with("Broken", "Restart the backend").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = parse_html_document(response).await;
        let paragraphs: Vec<String> = html
            .select(&Selector::parse("p").unwrap())
            .map(|p| element_text(&p))
            .collect();
        assert_eq!(paragraphs, vec!["Broken", "Restart the backend"]);
    }
}
