//! Defines the route handlers for the vendor transactions pages.

use axum::extract::Path;
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    html::{SCREEN_HEADER_STYLE, SCREEN_STYLE, base, link},
    navigation::NavBar,
    transaction::{
        bucket_list_view, fixtures::business_transactions, grouping::group_by_date,
        transaction_detail_view,
    },
};

/// Render the vendor's transactions grouped by day with per-day subtotals.
///
/// Rows older than yesterday land in named-date buckets (e.g. "3 May")
/// whose totals are computed from their member rows like any other
/// bucket.
pub async fn get_business_transactions_page() -> Result<Markup, Error> {
    let buckets = group_by_date(business_transactions())?;
    let nav_bar = NavBar::business(endpoints::BUSINESS_TRANSACTIONS_VIEW).into_html();

    let content = html!(
        section class=(SCREEN_STYLE)
        {
            header class=(SCREEN_HEADER_STYLE)
            {
                h1 class="text-4xl font-bold mb-6" { "Transactions" }
            }

            div class="flex-1 px-4"
            {
                (bucket_list_view(&buckets, endpoints::BUSINESS_TRANSACTION_VIEW))
            }

            (nav_bar)
        }
    );

    Ok(base("Business Transactions", &[], &content))
}

/// Render the detail panel for a single vendor transaction.
///
/// Returns [Error::NotFound] when `transaction_id` does not match any
/// displayed transaction.
pub async fn get_business_transaction_page(
    Path(transaction_id): Path<String>,
) -> Result<Markup, Error> {
    let transaction = business_transactions()
        .iter()
        .find(|transaction| transaction.id == transaction_id)
        .ok_or(Error::NotFound)?;

    let nav_bar = NavBar::business(endpoints::BUSINESS_TRANSACTIONS_VIEW).into_html();

    let content = html!(
        section class=(SCREEN_STYLE)
        {
            header class="px-4 py-4"
            {
                (link(endpoints::BUSINESS_TRANSACTIONS_VIEW, "Back to transactions"))
            }

            (transaction_detail_view(transaction))

            (nav_bar)
        }
    );

    Ok(base(transaction.merchant, &[], &content))
}
