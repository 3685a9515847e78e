//! The transactions API endpoint.

use std::path::PathBuf;

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{AppState, Error};

use super::loader::{TransactionRow, load_transaction_rows};

/// The state needed for the transactions API.
#[derive(Debug, Clone)]
pub struct TransactionsApiState {
    /// File path to the CSV file backing the API.
    pub data_path: PathBuf,
}

impl FromRef<AppState> for TransactionsApiState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            data_path: state.data_path.clone(),
        }
    }
}

/// Returns the rows of the server-side transaction data file as a JSON
/// array.
///
/// The file is read and parsed on every request. There are no query
/// parameters and no pagination; a read or parse failure fails the
/// whole request.
pub async fn get_transactions_api(
    State(state): State<TransactionsApiState>,
) -> Result<Json<Vec<TransactionRow>>, Error> {
    let rows = load_transaction_rows(&state.data_path)
        .inspect_err(|error| tracing::error!("could not load transaction data: {error}"))?;

    Ok(Json(rows))
}
