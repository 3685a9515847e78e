//! The vendor (business) screens.
//!
//! Provides the business dashboard, the business transactions list and
//! detail pages, the analytics page and the campaigns page. Everything
//! renders static sample data; the only computation is the aggregation
//! of displayed totals.

mod analytics;
mod analytics_page;
mod campaigns_page;
mod dashboard_page;
mod transactions_page;

pub use analytics_page::get_analytics_page;
pub use campaigns_page::get_campaigns_page;
pub use dashboard_page::get_business_page;
pub use transactions_page::{get_business_transaction_page, get_business_transactions_page};
