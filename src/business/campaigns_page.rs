//! Defines the route handler for the vendor campaigns page.

use maud::{Markup, html};

use crate::{
    Error, endpoints,
    html::{BADGE_STYLE, SCREEN_HEADER_STYLE, SCREEN_STYLE, SUMMARY_CARD_STYLE, base},
    navigation::NavBar,
};

/// A rewards campaign run by the business. Display data only.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Campaign {
    /// The campaign name.
    name: &'static str,
    /// A one-line description of the campaign.
    description: &'static str,
    /// A status label such as "Active".
    status: &'static str,
    /// The offer shown to customers.
    offer: &'static str,
    /// When the offer applies.
    period: &'static str,
    /// How many customers have redeemed the offer.
    redemptions: u32,
}

const CAMPAIGNS: [Campaign; 2] = [
    Campaign {
        name: "Happy Hour Special",
        description: "Exclusive points discount",
        status: "Active",
        offer: "2x points on every purchase",
        period: "Weekdays, 16:00 - 18:00",
        redemptions: 142,
    },
    Campaign {
        name: "Student Tuesdays",
        description: "Campus loyalty offer",
        status: "Active",
        offer: "10% back in points",
        period: "Tuesdays, all day",
        redemptions: 87,
    },
];

/// Render the campaigns page with a card per active campaign.
pub async fn get_campaigns_page() -> Result<Markup, Error> {
    let nav_bar = NavBar::business(endpoints::CAMPAIGNS_VIEW).into_html();

    let content = html!(
        section class=(SCREEN_STYLE)
        {
            header class=(SCREEN_HEADER_STYLE)
            {
                h1 class="text-2xl font-bold" { "Campaigns" }
                p class="text-gray-400 text-sm" { "Bar de La FIB" }
            }

            div class="flex-1 px-4 space-y-4"
            {
                @for campaign in CAMPAIGNS {
                    (campaign_card(&campaign))
                }
            }

            (nav_bar)
        }
    );

    Ok(base("Campaigns", &[], &content))
}

fn campaign_card(campaign: &Campaign) -> Markup {
    html!(
        div class=(SUMMARY_CARD_STYLE) data-campaign=(campaign.name)
        {
            div class="flex justify-between items-start mb-2"
            {
                div
                {
                    h2 class="text-xl font-semibold" { (campaign.name) }
                    p class="text-sm text-gray-400" { (campaign.description) }
                }

                span class={(BADGE_STYLE) " bg-purple-600 text-white"} { (campaign.status) }
            }

            p class="font-medium" { (campaign.offer) }
            p class="text-sm text-gray-400" { (campaign.period) }
            p class="text-sm text-gray-400 mt-2" data-redemptions="true"
            {
                (campaign.redemptions) " redemptions"
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::get_campaigns_page;

    #[tokio::test]
    async fn campaigns_page_shows_a_card_per_campaign() {
        let markup = get_campaigns_page().await.unwrap();

        let html = Html::parse_document(&markup.into_string());
        let card_selector = Selector::parse("div[data-campaign]").unwrap();

        assert_eq!(html.select(&card_selector).count(), 2);

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Happy Hour Special"));
        assert!(text.contains("2x points on every purchase"));
        assert!(text.contains("142 redemptions"));
    }
}
