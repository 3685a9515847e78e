//! Date-bucket grouping and subtotals for transaction lists.

use crate::{Error, money::parse_amount};

use super::models::Transaction;

/// A date-keyed group of transactions with its computed subtotal.
///
/// Bucket order follows the first appearance of each label in the input,
/// and transactions keep their input order within a bucket. The total is
/// always computed from the member rows, never taken from the fixtures.
#[derive(Debug, PartialEq)]
pub struct DateBucket {
    /// The bucket heading: "Today", "Yesterday" or an explicit date such
    /// as "3 May".
    pub label: String,
    /// The member transactions in input order.
    pub transactions: Vec<Transaction>,
    /// The sum of the members' normalized amounts.
    pub total: f64,
}

/// Derives the bucket label for a transaction's date label.
///
/// Labels containing "Today" or "Yesterday" map to those buckets. Any
/// other label buckets under its date portion, the text before the
/// first comma ("3 May, 21:12" becomes "3 May"). A record is therefore
/// never silently dropped from the subtotals.
pub fn bucket_label(date_label: &str) -> &str {
    if date_label.contains("Today") {
        "Today"
    } else if date_label.contains("Yesterday") {
        "Yesterday"
    } else {
        date_label
            .split_once(',')
            .map(|(date, _)| date)
            .unwrap_or(date_label)
            .trim()
    }
}

/// Partitions `transactions` into date buckets, preserving input order,
/// and sums each bucket's normalized amounts.
///
/// Returns [Error::InvalidAmount] if any record's amount string cannot
/// be normalized; in that case no partial result is produced.
pub fn group_by_date(transactions: &[Transaction]) -> Result<Vec<DateBucket>, Error> {
    let mut buckets: Vec<DateBucket> = Vec::new();

    for &transaction in transactions {
        let amount = parse_amount(transaction.amount)?;
        let label = bucket_label(transaction.date);

        let bucket = match buckets.iter_mut().find(|bucket| bucket.label == label) {
            Some(bucket) => bucket,
            None => {
                buckets.push(DateBucket {
                    label: label.to_owned(),
                    transactions: Vec::new(),
                    total: 0.0,
                });
                buckets.last_mut().expect("bucket just added")
            }
        };

        bucket.total += amount;
        bucket.transactions.push(transaction);
    }

    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        money::format_amount,
        transaction::fixtures::{business_transactions, consumer_transactions},
    };

    use super::{DateBucket, bucket_label, group_by_date};
    use crate::transaction::models::Transaction;

    fn transaction(id: &'static str, amount: &'static str, date: &'static str) -> Transaction {
        Transaction {
            id,
            merchant: "test",
            amount,
            date,
            location: None,
            status: None,
            status_date: None,
            card: None,
            points: None,
            category: None,
            logo_url: None,
        }
    }

    #[test]
    fn bucket_label_matches_relative_labels_by_substring() {
        assert_eq!(bucket_label("Today, 17:46"), "Today");
        assert_eq!(bucket_label("Yesterday, 22:58"), "Yesterday");
    }

    #[test]
    fn bucket_label_uses_date_portion_of_explicit_labels() {
        assert_eq!(bucket_label("3 May, 21:12"), "3 May");
        assert_eq!(bucket_label("3 May"), "3 May");
    }

    #[test]
    fn grouping_partitions_in_first_appearance_order() {
        let transactions = [
            transaction("a", "-1,71 €", "Today, 17:46"),
            transaction("b", "-3,50 €", "Yesterday, 22:58"),
            transaction("c", "-3 €", "Today, 09:21"),
        ];

        let buckets = group_by_date(&transactions).unwrap();

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label, "Today");
        assert_eq!(buckets[1].label, "Yesterday");
        // Record order within a bucket follows the input order.
        let today_ids: Vec<&str> = buckets[0].transactions.iter().map(|t| t.id).collect();
        assert_eq!(today_ids, ["a", "c"]);
    }

    #[test]
    fn bucket_totals_equal_member_sums() {
        let transactions = [
            transaction("a", "-3,50 €", "Today, 17:46"),
            transaction("b", "-3 €", "Today, 09:21"),
        ];

        let buckets = group_by_date(&transactions).unwrap();

        assert_eq!(format_amount(buckets[0].total), "-6,50 €");
    }

    #[test]
    fn records_outside_today_and_yesterday_form_named_buckets() {
        let transactions = [
            transaction("a", "-3 €", "Today, 09:21"),
            transaction("b", "-89,90 €", "3 May, 21:12"),
            transaction("c", "-15,88 €", "3 May, 18:05"),
        ];

        let buckets = group_by_date(&transactions).unwrap();

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[1].label, "3 May");
        assert_eq!(buckets[1].transactions.len(), 2);
        assert_eq!(format_amount(buckets[1].total), "-105,78 €");
    }

    #[test]
    fn grouping_is_idempotent() {
        let first = group_by_date(consumer_transactions()).unwrap();
        let second = group_by_date(consumer_transactions()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn grouping_fails_on_unparseable_amount() {
        let transactions = [transaction("a", "three fifty", "Today, 09:21")];

        assert_eq!(
            group_by_date(&transactions),
            Err(Error::InvalidAmount("three fifty".to_owned()))
        );
    }

    #[test]
    fn consumer_fixtures_group_into_expected_subtotals() {
        let buckets = group_by_date(consumer_transactions()).unwrap();

        let summary: Vec<(&str, String)> = buckets
            .iter()
            .map(|DateBucket { label, total, .. }| (label.as_str(), format_amount(*total)))
            .collect();

        assert_eq!(
            summary,
            [
                ("Today", "-4,71 €".to_owned()),
                ("Yesterday", "-23,50 €".to_owned()),
            ]
        );
    }

    #[test]
    fn business_fixtures_include_computed_named_date_bucket() {
        let buckets = group_by_date(business_transactions()).unwrap();

        let three_may = buckets
            .iter()
            .find(|bucket| bucket.label == "3 May")
            .expect("no 3 May bucket");

        assert_eq!(three_may.transactions.len(), 2);
        assert_eq!(format_amount(three_may.total), "-105,78 €");
    }
}
