//! Defines the route handler for the vendor dashboard.

use maud::{Markup, html};

use crate::{
    Error, endpoints,
    html::{
        BADGE_STYLE, LIST_CARD_STYLE, LIST_ROW_STYLE, SCREEN_HEADER_STYLE, SCREEN_STYLE,
        SUMMARY_CARD_STYLE, base, link,
    },
    money::{balance_parts, format_amount},
    navigation::NavBar,
    transaction::fixtures::business_recent_payments,
};

/// The business account balance. Display data only.
const BUSINESS_BALANCE: f64 = 3541.85;

/// Today's earnings figure shown on the earnings card.
const TODAY_EARNINGS: f64 = 542.75;

/// The day-over-day change label on the earnings card.
const EARNINGS_CHANGE_LABEL: &str = "+12% from yesterday";

/// The transaction count shown on the earnings card.
const TODAY_TRANSACTION_COUNT: u32 = 78;

/// Render the vendor dashboard: the business balance, today's earnings
/// card and the most recent incoming payments.
pub async fn get_business_page() -> Result<Markup, Error> {
    let (whole, cents) = balance_parts(BUSINESS_BALANCE);
    let nav_bar = NavBar::business(endpoints::BUSINESS_VIEW).into_html();

    let content = html!(
        section class=(SCREEN_STYLE)
        {
            header class=(SCREEN_HEADER_STYLE)
            {
                div class="flex items-center"
                {
                    h1 class="text-2xl font-bold" { "Bar de La FIB" }
                    span class={(BADGE_STYLE) " ml-2 bg-green-600 text-white"}
                    {
                        "Business Account"
                    }
                }
                p class="text-gray-400 text-sm" { "Campus Nord, Barcelona" }
            }

            div class="flex flex-col items-center justify-center mt-6 mb-6"
            {
                div class="text-gray-300 text-sm mb-1" { "Business · EUR" }
                div class="flex items-baseline" data-balance="true"
                {
                    span class="text-6xl font-semibold" { (whole) }
                    span class="text-3xl font-semibold" { (cents) }
                }
            }

            div class="px-4 py-2"
            {
                div class=(SUMMARY_CARD_STYLE)
                {
                    h2 class="text-lg font-medium mb-2" { "Today's Earnings" }
                    div class="flex items-center justify-between"
                    {
                        div class="text-3xl font-bold" data-earnings="true"
                        {
                            (format_amount(TODAY_EARNINGS))
                        }
                        div class="text-green-400" { (EARNINGS_CHANGE_LABEL) }
                    }
                    div class="mt-2 text-sm text-gray-400"
                    {
                        (TODAY_TRANSACTION_COUNT) " transactions today"
                    }
                }
            }

            div class="flex-1 mt-4 px-4"
            {
                h2 class="text-xl font-semibold mb-4" { "Recent Transactions" }

                div class=(LIST_CARD_STYLE)
                {
                    @for payment in business_recent_payments() {
                        div class=(LIST_ROW_STYLE) data-payment-row="true"
                        {
                            div
                            {
                                div class="font-medium" { (payment.merchant) }
                                div class="text-sm text-gray-400" { (payment.date) }
                            }

                            div class="font-medium text-green-400" { (payment.amount) }
                        }
                    }
                }

                div class="text-center py-2"
                {
                    (link(endpoints::BUSINESS_TRANSACTIONS_VIEW, "See all"))
                }
            }

            (nav_bar)
        }
    );

    Ok(base("Business", &[], &content))
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::get_business_page;

    #[tokio::test]
    async fn business_page_shows_balance_and_earnings_card() {
        let markup = get_business_page().await.unwrap();

        let html = Html::parse_document(&markup.into_string());

        let balance_selector = Selector::parse("div[data-balance='true']").unwrap();
        let balance = html
            .select(&balance_selector)
            .next()
            .expect("No balance found")
            .text()
            .collect::<String>();
        assert_eq!(balance.trim(), "3.541,85 €");

        let earnings_selector = Selector::parse("div[data-earnings='true']").unwrap();
        let earnings = html
            .select(&earnings_selector)
            .next()
            .expect("No earnings figure found")
            .text()
            .collect::<String>();
        assert_eq!(earnings.trim(), "542,75 €");

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("+12% from yesterday"));
        assert!(text.contains("78 transactions today"));
    }

    #[tokio::test]
    async fn business_page_lists_recent_payments_with_plus_signs() {
        let markup = get_business_page().await.unwrap();

        let html = Html::parse_document(&markup.into_string());
        let row_selector = Selector::parse("div[data-payment-row='true']").unwrap();

        let rows: Vec<String> = html
            .select(&row_selector)
            .map(|row| row.text().collect::<String>())
            .collect();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("+5,50 €"));
        assert!(rows[1].contains("Payment from Professor"));
    }
}
