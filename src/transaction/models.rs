//! The transaction record shown in list and detail views.

/// A single recorded payment or receipt shown to the user.
///
/// Records are read-only display fixtures, they are never created,
/// mutated or deleted. The amount is stored in its display form
/// ("-3,50 €") and is normalized back to a number only for computing
/// bucket subtotals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transaction {
    /// An opaque identifier, unique within a displayed list.
    pub id: &'static str,
    /// The merchant or counterparty name.
    pub merchant: &'static str,
    /// The signed amount as displayed, e.g. "-3,50 €" or "+5,50 €".
    pub amount: &'static str,
    /// Either a relative label ("Today, 17:46") or an explicit date
    /// label ("3 May, 21:12").
    pub date: &'static str,
    /// Where the transaction took place.
    pub location: Option<&'static str>,
    /// A status label such as "Pending".
    pub status: Option<&'static str>,
    /// The date a pending transaction reverts if unclaimed by the merchant.
    pub status_date: Option<&'static str>,
    /// The masked card the transaction was made with, e.g. "Visa •••9598".
    pub card: Option<&'static str>,
    /// The points earned by this transaction, e.g. "0,85".
    pub points: Option<&'static str>,
    /// A category label such as "Restaurants".
    pub category: Option<&'static str>,
    /// A path to the merchant's logo image.
    pub logo_url: Option<&'static str>,
}
