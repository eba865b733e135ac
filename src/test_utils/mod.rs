#![allow(missing_docs)]

pub(crate) mod api;
pub(crate) mod html;

pub(crate) use api::{salary_body, spawn_api, transactions_api};
pub(crate) use html::{assert_valid_html, element_text, must_select, parse_html_document};
