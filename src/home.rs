//! Defines the route handler for the consumer home page.

use std::path::PathBuf;

use axum::extract::{FromRef, State};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{LIST_CARD_STYLE, LIST_ROW_STYLE, SCREEN_STYLE, base, link},
    money::balance_parts,
    navigation::NavBar,
    timezone::current_local_date,
    transaction::loader::{TransactionRow, load_transaction_rows, relative_date_label},
};

/// The consumer account balance. Display data only, nothing accrues here.
const ACCOUNT_BALANCE: f64 = 541.85;

/// How many rows of the data file the home page previews.
const RECENT_TRANSACTION_COUNT: usize = 3;

/// The state needed for the consumer home page.
#[derive(Debug, Clone)]
pub struct HomeState {
    /// File path to the CSV file backing the recent transactions list.
    pub data_path: PathBuf,
    /// The local timezone as a canonical timezone name, e.g. "Europe/Madrid".
    pub local_timezone: String,
}

impl FromRef<AppState> for HomeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            data_path: state.data_path.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the consumer home page: the account balance and a preview of
/// the most recent transactions from the data file.
pub async fn get_home_page(State(state): State<HomeState>) -> Result<Markup, Error> {
    let rows = load_transaction_rows(&state.data_path)
        .inspect_err(|error| tracing::error!("could not load transaction data: {error}"))?;
    let today = current_local_date(&state.local_timezone)?;

    let recent = rows
        .into_iter()
        .take(RECENT_TRANSACTION_COUNT)
        .map(|row| {
            let date_label = relative_date_label(&row.timestamp, today)?;
            Ok((row, date_label))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(home_view(&recent))
}

fn home_view(recent: &[(TransactionRow, String)]) -> Markup {
    let (whole, cents) = balance_parts(ACCOUNT_BALANCE);
    let nav_bar = NavBar::consumer(endpoints::HOME_VIEW).into_html();

    let content = html!(
        section class=(SCREEN_STYLE)
        {
            div class="flex flex-col items-center justify-center mt-12 mb-6"
            {
                div class="text-gray-300 text-sm mb-1" { "Personal · EUR" }
                div class="flex items-baseline" data-balance="true"
                {
                    span class="text-6xl font-semibold" { (whole) }
                    span class="text-3xl font-semibold" { (cents) }
                }
            }

            div class="flex-1 mt-4 px-4"
            {
                div class=(LIST_CARD_STYLE)
                {
                    @for (row, date_label) in recent {
                        div class=(LIST_ROW_STYLE) data-transaction-row="true"
                        {
                            div
                            {
                                div class="font-medium" { (row.merchant_name) }
                                div class="text-sm text-gray-400" { (date_label) }
                            }

                            div class="font-medium" { (row.amount) " " (row.currency) }
                        }
                    }
                }

                div class="text-center py-2"
                {
                    (link(endpoints::TRANSACTIONS_VIEW, "See all"))
                }
            }

            (nav_bar)
        }
    );

    base("Home", &[], &content)
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use scraper::{Html, Selector};
    use std::path::PathBuf;

    use super::{HomeState, get_home_page};

    #[tokio::test]
    async fn home_page_shows_balance_and_recent_transactions() {
        let state = HomeState {
            data_path: PathBuf::from("data/transactions.csv"),
            local_timezone: "Etc/UTC".to_owned(),
        };

        let markup = get_home_page(State(state)).await.unwrap();

        let html = Html::parse_document(&markup.into_string());

        let balance_selector = Selector::parse("div[data-balance='true']").unwrap();
        let balance = html
            .select(&balance_selector)
            .next()
            .expect("No balance found")
            .text()
            .collect::<String>();
        assert_eq!(balance.trim(), "541,85 €");

        let row_selector = Selector::parse("div[data-transaction-row='true']").unwrap();
        assert_eq!(html.select(&row_selector).count(), 3);

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("McDonald's"));
        assert!(text.contains("See all"));
    }

    #[tokio::test]
    async fn home_page_fails_when_data_file_is_missing() {
        let state = HomeState {
            data_path: PathBuf::from("data/no-such-file.csv"),
            local_timezone: "Etc/UTC".to_owned(),
        };

        let result = get_home_page(State(state)).await;

        assert!(result.is_err());
    }
}
