//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}',
//! use [format_endpoint].

/// The root route which redirects to the consumer home page.
pub const ROOT: &str = "/";
/// The consumer home page with the account balance and recent transactions.
pub const HOME_VIEW: &str = "/home";
/// The page for displaying the consumer's transactions grouped by day.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The detail page for a single consumer transaction.
pub const TRANSACTION_VIEW: &str = "/transactions/{transaction_id}";
/// The consumer points (rewards) page.
pub const POINTS_VIEW: &str = "/points";
/// The vendor dashboard with the business balance and recent payments.
pub const BUSINESS_VIEW: &str = "/business";
/// The page for displaying the vendor's transactions grouped by day.
pub const BUSINESS_TRANSACTIONS_VIEW: &str = "/business/transactions";
/// The detail page for a single vendor transaction.
pub const BUSINESS_TRANSACTION_VIEW: &str = "/business/transactions/{transaction_id}";
/// The vendor analytics page with sales charts and tables.
pub const ANALYTICS_VIEW: &str = "/business/analytics";
/// The vendor campaigns page.
pub const CAMPAIGNS_VIEW: &str = "/business/campaigns";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route that returns the rows of the transaction data file as JSON.
pub const TRANSACTIONS_API: &str = "/api/transactions";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_static` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::HOME_VIEW);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::POINTS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::BUSINESS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::BUSINESS_TRANSACTIONS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::ANALYTICS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::CAMPAIGNS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_API);
    }

    #[test]
    fn format_endpoint_produces_valid_uri() {
        let formatted_path = format_endpoint(endpoints::TRANSACTION_VIEW, "mcdonalds1");

        assert_eq!(formatted_path, "/transactions/mcdonalds1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn format_endpoint_returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", "1");

        assert_eq!(formatted_path, "/hello/world");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn format_endpoint_replaces_parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", "1");

        assert_eq!(formatted_path, "/hello/1/bye");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
