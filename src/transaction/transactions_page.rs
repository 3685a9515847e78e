//! Defines the route handler for the consumer transactions page.

use maud::{Markup, html};

use crate::{
    Error, endpoints,
    html::{SCREEN_HEADER_STYLE, SCREEN_STYLE, base},
    navigation::NavBar,
};

use super::{fixtures::consumer_transactions, grouping::group_by_date, view::bucket_list_view};

/// Render the consumer's transactions grouped by day with per-day subtotals.
pub async fn get_transactions_page() -> Result<Markup, Error> {
    let buckets = group_by_date(consumer_transactions())?;
    let nav_bar = NavBar::consumer(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html!(
        section class=(SCREEN_STYLE)
        {
            header class=(SCREEN_HEADER_STYLE)
            {
                h1 class="text-4xl font-bold mb-6" { "Transactions" }
            }

            div class="flex-1 px-4"
            {
                (bucket_list_view(&buckets, endpoints::TRANSACTION_VIEW))
            }

            (nav_bar)
        }
    );

    Ok(base("Transactions", &[], &content))
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::get_transactions_page;

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    #[tokio::test]
    async fn transactions_page_shows_buckets_with_subtotals() {
        let markup = get_transactions_page().await.unwrap();

        let html = Html::parse_document(&markup.into_string());
        assert_valid_html(&html);

        let heading_selector = Selector::parse("h2").unwrap();
        let headings: Vec<String> = html
            .select(&heading_selector)
            .map(|h| h.text().collect::<String>().trim().to_owned())
            .collect();
        assert_eq!(headings, ["Today", "Yesterday"]);

        let total_selector = Selector::parse("span[data-bucket-total='true']").unwrap();
        let totals: Vec<String> = html
            .select(&total_selector)
            .map(|t| t.text().collect::<String>().trim().to_owned())
            .collect();
        assert_eq!(totals, ["-4,71 €", "-23,50 €"]);
    }

    #[tokio::test]
    async fn transactions_page_lists_every_fixture_row() {
        let markup = get_transactions_page().await.unwrap();

        let html = Html::parse_document(&markup.into_string());
        let row_selector = Selector::parse("a[data-transaction-row='true']").unwrap();

        assert_eq!(html.select(&row_selector).count(), 7);
    }

    #[tokio::test]
    async fn transaction_rows_link_to_detail_pages() {
        let markup = get_transactions_page().await.unwrap();

        let html = Html::parse_document(&markup.into_string());
        let row_selector = Selector::parse("a[data-transaction-row='true']").unwrap();

        let first_href = html
            .select(&row_selector)
            .next()
            .expect("No transaction rows found")
            .value()
            .attr("href")
            .expect("Transaction row missing href");

        assert_eq!(first_href, "/transactions/mcdonalds1");
    }
}
