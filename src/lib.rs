//! Billfold is a web app that serves a mock consumer banking app and a
//! mock vendor (business) dashboard.
//!
//! This library provides a REST API that directly serves HTML pages.
//! All data is static fixtures compiled into the binary, plus one CSV
//! file read per request by the transactions API.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod business;
mod endpoints;
mod home;
mod html;
mod internal_server_error;
mod money;
mod navigation;
mod not_found;
mod points;
mod routing;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use routing::build_router;

use crate::internal_server_error::{InternalServerErrorPage, render_internal_server_error};
use crate::not_found::get_404_not_found_response;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the
    /// parameters (e.g., the transaction ID) are correct.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The transaction data file could not be opened or read.
    ///
    /// A missing or unreadable file fails the whole read, there is no
    /// partial recovery and no retry.
    #[error("could not read the transaction data file: {0}")]
    DataFileRead(String),

    /// The transaction data file had issues that prevented it from being
    /// parsed.
    ///
    /// A single malformed row fails the whole read.
    #[error("could not parse the transaction data file: {0}")]
    InvalidCsv(String),

    /// An amount string did not follow the display convention, e.g. "-3,50 €".
    #[error("could not parse the amount string \"{0}\"")]
    InvalidAmount(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezone(timezone) => {
                render_internal_server_error(InternalServerErrorPage {
                    description: "Invalid Timezone Settings",
                    fix: &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings \
                        and ensure the timezone has been set to a valid, canonical timezone string"
                    ),
                })
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(Default::default())
            }
        }
    }
}
