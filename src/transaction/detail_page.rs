//! Defines the route handler for the consumer transaction detail page.

use axum::extract::Path;
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    html::{SCREEN_STYLE, base, link},
    navigation::NavBar,
};

use super::{fixtures::consumer_transactions, view::transaction_detail_view};

/// Render the detail panel for a single consumer transaction.
///
/// Returns [Error::NotFound] when `transaction_id` does not match any
/// displayed transaction.
pub async fn get_transaction_page(
    Path(transaction_id): Path<String>,
) -> Result<Markup, Error> {
    let transaction = consumer_transactions()
        .iter()
        .find(|transaction| transaction.id == transaction_id)
        .ok_or(Error::NotFound)?;

    let nav_bar = NavBar::consumer(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html!(
        section class=(SCREEN_STYLE)
        {
            header class="px-4 py-4"
            {
                (link(endpoints::TRANSACTIONS_VIEW, "Back to transactions"))
            }

            (transaction_detail_view(transaction))

            (nav_bar)
        }
    );

    Ok(base(transaction.merchant, &[], &content))
}
