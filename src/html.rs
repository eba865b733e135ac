//! Shared page layout and markup helpers.

use maud::{DOCTYPE, Markup, html};

use crate::endpoints;

/// The name shown in page titles and the header.
pub const APP_NAME: &str = "GoFinances";

/// Wrap `content` in the HTML document shared by every page.
///
/// `title` is shown in the browser tab as "{title} - GoFinances".
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (APP_NAME) }
                link rel="icon" type="image/svg+xml" href=(static_path("logo.svg"));
                link href=(static_path("main.css")) rel="stylesheet";
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="error-page"
        {
            h1 class="error-page__status" { (header) }

            p class="error-page__description" { (description) }

            p class="error-page__fix" { (fix) }

            a href=(endpoints::ROOT) class="error-page__home" { "Back to Homepage" }
        }
    );

    base(title, &content)
}

/// The URL of a file in the static assets directory.
pub fn static_path(file_name: &str) -> String {
    format!("{}/{file_name}", endpoints::STATIC)
}
