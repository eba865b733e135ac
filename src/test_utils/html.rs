use axum::{body::Body, response::Response};
use scraper::{ElementRef, Html, Selector};

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_document(&text)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// Select every element matching the CSS `selector`, panicking if there are none.
#[track_caller]
pub(crate) fn must_select<'a>(html: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    let parsed_selector = Selector::parse(selector).unwrap();
    let elements: Vec<_> = html.select(&parsed_selector).collect();

    assert!(
        !elements.is_empty(),
        "Could not find any elements matching \"{selector}\""
    );

    elements
}

/// The trimmed text content of `element`.
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}
