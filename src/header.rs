//! The page header with the app logo and navigation links.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{APP_NAME, static_path},
};

/// A link in the header navigation.
///
/// Only one link should be marked as current at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let class = if self.is_current {
            "header__link header__link--current"
        } else {
            "header__link"
        };

        html!(
            a
                href=(self.url)
                class=(class)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct Header<'a> {
    links: Vec<Link<'a>>,
}

impl Header<'_> {
    /// Get the header.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as the current page.
    pub fn new(active_endpoint: &str) -> Header<'_> {
        let links = vec![Link {
            url: endpoints::DASHBOARD_VIEW,
            title: "Listagem",
            is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
        }];

        Header { links }
    }

    pub fn into_html(self) -> Markup {
        html!(
            header class="header"
            {
                div class="header__content"
                {
                    a href=(endpoints::ROOT) class="header__logo"
                    {
                        img src=(static_path("logo.svg")) alt=(APP_NAME);
                    }

                    nav
                    {
                        @for link in self.links {
                            (link.into_html())
                        }
                    }
                }
            }
        )
    }
}
