//! Defines the route handler for the consumer points (rewards) page.

use maud::{Markup, html};

use crate::{
    Error, endpoints,
    html::{LIST_CARD_STYLE, LIST_ROW_STYLE, SCREEN_HEADER_STYLE, SCREEN_STYLE, base},
    money::{format_points, parse_amount, points_earned},
    navigation::NavBar,
    transaction::fixtures::consumer_transactions,
};

/// The consumer's points balance. Display data only, nothing accrues here.
const POINTS_BALANCE: i64 = 70;

/// The earn rate shown under the points balance.
const EARN_RATE_LABEL: &str = "1 point / 2 € spent";

/// Render the points page: the points balance, the earn rate and the
/// points earned per transaction.
///
/// The per-transaction points are computed from the displayed amounts
/// with the earn rate, not taken from the fixtures.
pub async fn get_points_page() -> Result<Markup, Error> {
    let earned = consumer_transactions()
        .iter()
        .map(|transaction| {
            let amount = parse_amount(transaction.amount)?;
            Ok((transaction, format_points(points_earned(amount))))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let nav_bar = NavBar::consumer(endpoints::POINTS_VIEW).into_html();

    let content = html!(
        section class=(SCREEN_STYLE)
        {
            header class=(SCREEN_HEADER_STYLE)
            {
                h1 class="text-2xl font-bold" { "Points" }
            }

            div class="flex flex-col items-center justify-center mt-8 mb-6"
            {
                div class="text-6xl font-semibold" data-points-balance="true"
                {
                    (POINTS_BALANCE)
                }
                div class="text-gray-400 text-sm mt-2" { (EARN_RATE_LABEL) }
            }

            div class="flex-1 px-4"
            {
                h2 class="text-xl font-semibold mb-2" { "Recently earned" }

                div class=(LIST_CARD_STYLE)
                {
                    @for (transaction, points) in &earned {
                        div class=(LIST_ROW_STYLE) data-points-row="true"
                        {
                            div class="font-medium" { (transaction.merchant) }
                            div class="font-medium text-yellow-400" { "+" (points) }
                        }
                    }
                }
            }

            (nav_bar)
        }
    );

    Ok(base("Points", &[], &content))
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::get_points_page;

    #[tokio::test]
    async fn points_page_shows_balance_and_earn_rate() {
        let markup = get_points_page().await.unwrap();

        let html = Html::parse_document(&markup.into_string());

        let balance_selector = Selector::parse("div[data-points-balance='true']").unwrap();
        let balance = html
            .select(&balance_selector)
            .next()
            .expect("No points balance found")
            .text()
            .collect::<String>();
        assert_eq!(balance.trim(), "70");

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("1 point / 2 € spent"));
    }

    #[tokio::test]
    async fn points_rows_are_computed_from_the_amounts() {
        let markup = get_points_page().await.unwrap();

        let html = Html::parse_document(&markup.into_string());
        let row_selector = Selector::parse("div[data-points-row='true']").unwrap();

        let rows: Vec<String> = html
            .select(&row_selector)
            .map(|row| row.text().collect::<String>())
            .collect();

        assert_eq!(rows.len(), 7);
        // McDonald's spent 1,71 € and earns half of that in points.
        assert!(rows[0].contains("+0,85"));
        assert!(rows[1].contains("+1,50"));
    }
}
