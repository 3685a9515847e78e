//! HTML rendering for the transaction list and detail pages.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints::format_endpoint,
    html::{BADGE_STYLE, LIST_CARD_STYLE, LIST_ROW_STYLE, SECTION_HEADER_STYLE},
    money::format_amount_signed,
};

use super::{grouping::DateBucket, models::Transaction};

/// The max number of graphemes to display for a merchant name in list
/// rows before truncating and displaying ellipses.
const MAX_MERCHANT_GRAPHEMES: usize = 32;

fn truncate_merchant(merchant: &str) -> String {
    let graphemes: Vec<&str> = merchant.graphemes(true).collect();

    if graphemes.len() <= MAX_MERCHANT_GRAPHEMES {
        merchant.to_owned()
    } else {
        format!("{}…", graphemes[..MAX_MERCHANT_GRAPHEMES].concat())
    }
}

/// The time portion of a date label: "Today, 17:46" becomes "17:46".
fn time_part(date_label: &str) -> &str {
    date_label
        .split_once(", ")
        .map(|(_, time)| time)
        .unwrap_or(date_label)
}

/// Renders grouped transactions as one card per bucket, each with the
/// bucket label and its computed subtotal in the heading row.
///
/// Rows link to `detail_route` with the row's transaction ID substituted
/// for the route parameter.
pub(crate) fn bucket_list_view(buckets: &[DateBucket], detail_route: &str) -> Markup {
    html! {
        @for bucket in buckets {
            div class="mb-6" data-bucket=(bucket.label)
            {
                div class=(SECTION_HEADER_STYLE)
                {
                    h2 class="text-xl font-semibold" { (bucket.label) }
                    span class="text-lg font-medium" data-bucket-total="true"
                    {
                        (format_amount_signed(bucket.total))
                    }
                }

                div class=(LIST_CARD_STYLE)
                {
                    @for transaction in &bucket.transactions {
                        (transaction_row_view(transaction, detail_route))
                    }
                }
            }
        }

        @if buckets.is_empty() {
            p class="text-center text-gray-400 py-8" data-empty-state="true"
            {
                "No transactions yet."
            }
        }
    }
}

fn transaction_row_view(transaction: &Transaction, detail_route: &str) -> Markup {
    let detail_url = format_endpoint(detail_route, transaction.id);

    html! {
        a href=(detail_url) class="block" data-transaction-row="true"
        {
            div class=(LIST_ROW_STYLE)
            {
                div
                {
                    div class="font-medium text-lg" { (truncate_merchant(transaction.merchant)) }
                    div class="text-sm text-gray-400" { (time_part(transaction.date)) }
                }

                div class="font-medium text-lg" data-amount="true" { (transaction.amount) }
            }
        }
    }
}

/// Renders the detail panel for a single transaction.
pub(crate) fn transaction_detail_view(transaction: &Transaction) -> Markup {
    html! {
        div class="px-4 pb-8"
        {
            h1 class="text-5xl font-bold mb-1" data-amount="true" { (transaction.amount) }
            h2 class="text-2xl text-blue-400 mb-1" { (transaction.merchant) }
            p class="text-gray-400 mb-6" { (transaction.date) }

            @if let Some(location) = transaction.location {
                div class="mb-4"
                {
                    h3 class="text-sm text-gray-500 uppercase mb-1" { "Location" }
                    p { (location) }
                }
            }

            @if let (Some(status), Some(status_date)) = (transaction.status, transaction.status_date) {
                div class="mb-4"
                {
                    span class={(BADGE_STYLE) " bg-yellow-900 text-yellow-300"} { (status) }
                    p class="text-sm text-gray-400 mt-1"
                    {
                        (status) " • Will be automatically reverted on " (status_date)
                        " if unclaimed by merchant."
                    }
                }
            }

            @if let Some(card) = transaction.card {
                div class="mb-4"
                {
                    h3 class="text-sm text-gray-500 uppercase mb-1" { "Card" }
                    p { (card) }
                }
            }

            @if let Some(points) = transaction.points {
                div class="mb-4"
                {
                    h3 class="text-sm text-gray-500 uppercase mb-1" { "Points earned" }
                    p data-points="true" { "+" (points) }
                }
            }

            @if let Some(category) = transaction.category {
                div class="mb-4"
                {
                    h3 class="text-sm text-gray-500 uppercase mb-1" { "Category" }
                    p { (category) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use unicode_segmentation::UnicodeSegmentation;

    use super::{time_part, truncate_merchant};

    #[test]
    fn time_part_strips_the_day_label() {
        assert_eq!(time_part("Today, 17:46"), "17:46");
        assert_eq!(time_part("3 May, 21:12"), "21:12");
        assert_eq!(time_part("17:46"), "17:46");
    }

    #[test]
    fn short_merchant_names_are_unchanged() {
        assert_eq!(
            truncate_merchant("Empanadaclubgrandegracia 1"),
            "Empanadaclubgrandegracia 1"
        );
    }

    #[test]
    fn long_merchant_names_are_truncated_at_grapheme_boundaries() {
        let long_name = "Cafetería de la Universitat Politècnica de Catalunya";

        let truncated = truncate_merchant(long_name);

        assert_eq!(truncated.graphemes(true).count(), 33);
        assert!(truncated.ends_with('…'));
    }
}
