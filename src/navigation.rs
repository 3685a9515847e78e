//! This file defines the templates and convenience functions for creating the navigation bar.

use maud::{Markup, html};

use crate::endpoints;

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "flex-1 text-center py-2 px-3 text-xs font-semibold text-white"
        } else {
            "flex-1 text-center py-2 px-3 text-xs font-semibold text-gray-500 hover:text-gray-300"
        };

        html!( a href=(self.url) class=(style) { (self.title) } )
    }
}

/// The bottom navigation bar shown on every page.
pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// The navigation bar for the consumer screens.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn consumer(active_endpoint: &str) -> NavBar<'_> {
        let links = vec![
            Link {
                url: endpoints::HOME_VIEW,
                title: "Home",
                is_current: active_endpoint == endpoints::HOME_VIEW,
            },
            Link {
                url: endpoints::TRANSACTIONS_VIEW,
                title: "Transactions",
                is_current: active_endpoint == endpoints::TRANSACTIONS_VIEW,
            },
            Link {
                url: endpoints::POINTS_VIEW,
                title: "Points",
                is_current: active_endpoint == endpoints::POINTS_VIEW,
            },
            Link {
                url: endpoints::BUSINESS_VIEW,
                title: "Business",
                is_current: false,
            },
        ];

        NavBar { links }
    }

    /// The navigation bar for the vendor (business) screens.
    pub fn business(active_endpoint: &str) -> NavBar<'_> {
        let links = vec![
            Link {
                url: endpoints::BUSINESS_VIEW,
                title: "Dashboard",
                is_current: active_endpoint == endpoints::BUSINESS_VIEW,
            },
            Link {
                url: endpoints::BUSINESS_TRANSACTIONS_VIEW,
                title: "Transactions",
                is_current: active_endpoint == endpoints::BUSINESS_TRANSACTIONS_VIEW,
            },
            Link {
                url: endpoints::ANALYTICS_VIEW,
                title: "Analytics",
                is_current: active_endpoint == endpoints::ANALYTICS_VIEW,
            },
            Link {
                url: endpoints::CAMPAIGNS_VIEW,
                title: "Campaigns",
                is_current: active_endpoint == endpoints::CAMPAIGNS_VIEW,
            },
            Link {
                url: endpoints::HOME_VIEW,
                title: "Personal",
                is_current: false,
            },
        ];

        NavBar { links }
    }

    /// Renders the navigation bar.
    pub fn into_html(self) -> Markup {
        html! {
            nav class="flex max-w-md mx-auto border-t border-gray-800 bg-gray-900"
            {
                @for link in self.links {
                    (link.into_html())
                }
            }
        }
    }
}
