//! Reads the server-side transaction data file into row objects.

use std::path::Path;

use serde::{Deserialize, Serialize};
use time::{
    Date, PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::Error;

/// The timestamp format used by the transaction data file.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// One row of the transaction data file.
///
/// The field names mirror the file's header row. The same shape is
/// serialized back out as the JSON array returned by the transactions
/// API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransactionRow {
    /// An opaque identifier, unique within the file.
    pub id: String,
    /// The merchant or counterparty name.
    pub merchant_name: String,
    /// The bare locale-formatted amount, e.g. "-1,71".
    pub amount: String,
    /// The currency symbol for `amount`.
    pub currency: String,
    /// A local timestamp with minute precision, e.g. "2025-05-14 17:46".
    pub timestamp: String,
    /// Where the transaction took place.
    pub location: String,
    /// A status label such as "Pending", empty when settled.
    pub status: String,
    /// The date a pending transaction reverts if unclaimed.
    pub status_date: String,
    /// The masked card the transaction was made with.
    pub card: String,
    /// The points earned by this transaction.
    pub points: String,
    /// A category label such as "Restaurants".
    pub category: String,
    /// A path to the merchant's logo image, empty when there is none.
    pub logo_url: String,
}

/// Reads the comma-delimited file at `path` into an ordered list of rows.
///
/// The file must have a header row naming the [TransactionRow] fields.
/// Empty lines are skipped. A missing file or a single malformed row
/// (wrong column count, or a timestamp that does not match
/// "2025-05-14 17:46") fails the whole read; there is no partial
/// recovery and no retry.
pub fn load_transaction_rows(path: &Path) -> Result<Vec<TransactionRow>, Error> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|error| Error::DataFileRead(error.to_string()))?;

    let mut rows = Vec::new();

    for result in reader.deserialize() {
        let row: TransactionRow = result.map_err(|error| Error::InvalidCsv(error.to_string()))?;

        PrimitiveDateTime::parse(&row.timestamp, TIMESTAMP_FORMAT).map_err(|error| {
            Error::InvalidCsv(format!("bad timestamp \"{}\": {error}", row.timestamp))
        })?;

        rows.push(row);
    }

    Ok(rows)
}

/// Formats a row timestamp relative to `today`: "Today, 17:46",
/// "Yesterday, 09:21", or an explicit date label such as "3 May, 08:45".
///
/// The explicit form feeds the same bucket grouping as the fixture
/// labels, so rows older than yesterday still land in a named-date
/// bucket.
pub fn relative_date_label(timestamp: &str, today: Date) -> Result<String, Error> {
    let parsed = PrimitiveDateTime::parse(timestamp, TIMESTAMP_FORMAT)
        .map_err(|error| Error::InvalidCsv(format!("bad timestamp \"{timestamp}\": {error}")))?;

    let date = parsed.date();
    let time = format!("{:02}:{:02}", parsed.hour(), parsed.minute());

    let day_label = if date == today {
        "Today".to_owned()
    } else if Some(date) == today.previous_day() {
        "Yesterday".to_owned()
    } else {
        format!("{} {}", date.day(), month_name(date.month()))
    };

    Ok(format!("{day_label}, {time}"))
}

fn month_name(month: time::Month) -> &'static str {
    use time::Month;

    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}
