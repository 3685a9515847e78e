//! Application router configuration.

use axum::{Router, response::Redirect, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    business::{
        get_analytics_page, get_business_page, get_business_transaction_page,
        get_business_transactions_page, get_campaigns_page,
    },
    endpoints,
    home::get_home_page,
    not_found::get_404_not_found,
    points::get_points_page,
    transaction::{get_transaction_page, get_transactions_api, get_transactions_page},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::HOME_VIEW, get(get_home_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::TRANSACTION_VIEW, get(get_transaction_page))
        .route(endpoints::POINTS_VIEW, get(get_points_page))
        .route(endpoints::BUSINESS_VIEW, get(get_business_page))
        .route(
            endpoints::BUSINESS_TRANSACTIONS_VIEW,
            get(get_business_transactions_page),
        )
        .route(
            endpoints::BUSINESS_TRANSACTION_VIEW,
            get(get_business_transaction_page),
        )
        .route(endpoints::ANALYTICS_VIEW, get(get_analytics_page))
        .route(endpoints::CAMPAIGNS_VIEW, get(get_campaigns_page))
        .route(endpoints::TRANSACTIONS_API, get(get_transactions_api))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the consumer home page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::HOME_VIEW)
}
