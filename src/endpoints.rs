//! The URIs served by the dashboard server.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The page listing transactions with the balance summary.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";
