//! Implements a struct that holds the state of the web server.

use std::path::PathBuf;

use crate::{Error, timezone::get_local_offset};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// File path to the CSV file backing the transactions API.
    pub data_path: PathBuf,

    /// The local timezone as a canonical timezone name, e.g. "Europe/Madrid".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `data_path` is the CSV file read by the transactions API, it is
    /// opened per request and does not need to exist at start-up.
    /// `local_timezone` should be a valid, canonical timezone name,
    /// e.g. "Europe/Madrid".
    ///
    /// # Errors
    /// Returns an error if `local_timezone` is not a known timezone.
    pub fn new(data_path: PathBuf, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezone(local_timezone.to_owned()));
        }

        Ok(Self {
            data_path,
            local_timezone: local_timezone.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::Error;

    use super::AppState;

    #[test]
    fn new_accepts_canonical_timezone() {
        let state = AppState::new(PathBuf::from("data/transactions.csv"), "Europe/Madrid");

        assert!(state.is_ok());
    }

    #[test]
    fn new_rejects_unknown_timezone() {
        let state = AppState::new(PathBuf::from("data/transactions.csv"), "Mars/Olympus_Mons");

        assert_eq!(
            state.unwrap_err(),
            Error::InvalidTimezone("Mars/Olympus_Mons".to_owned())
        );
    }
}
