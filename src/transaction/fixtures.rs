//! The static transaction lists backing the consumer and vendor screens.

use super::models::Transaction;

const CONSUMER_TRANSACTIONS: [Transaction; 7] = [
    Transaction {
        id: "mcdonalds1",
        merchant: "McDonald's",
        amount: "-1,71 €",
        date: "Today, 17:46",
        location: Some("08820 El Prat de Llobregat Barcelona, Spain"),
        status: Some("Pending"),
        status_date: Some("14 May"),
        card: Some("Visa •••9598"),
        points: Some("0,85"),
        category: Some("Restaurants"),
        logo_url: Some("/static/mcdonalds-logo.png"),
    },
    Transaction {
        id: "catalana1",
        merchant: "Catalana Del Pa Sa G. T",
        amount: "-3 €",
        date: "Today, 09:21",
        location: Some("Barcelona, Spain"),
        status: Some("Pending"),
        status_date: Some("14 May"),
        card: Some("Visa •••9598"),
        points: Some("1,50"),
        category: Some("Restaurants"),
        logo_url: None,
    },
    Transaction {
        id: "monroe1",
        merchant: "La Monroe",
        amount: "-3,50 €",
        date: "Yesterday, 22:58",
        location: Some("Barcelona, Spain"),
        status: Some("Pending"),
        status_date: Some("14 May"),
        card: Some("Visa •••9598"),
        points: Some("1,75"),
        category: Some("Restaurants"),
        logo_url: None,
    },
    Transaction {
        id: "monroe2",
        merchant: "La Monroe",
        amount: "-3 €",
        date: "Yesterday, 22:57",
        location: Some("Barcelona, Spain"),
        status: Some("Pending"),
        status_date: Some("14 May"),
        card: Some("Visa •••9598"),
        points: Some("1,50"),
        category: Some("Restaurants"),
        logo_url: None,
    },
    Transaction {
        id: "ali1",
        merchant: "Ali Restaurant",
        amount: "-12,30 €",
        date: "Yesterday, 22:10",
        location: Some("Barcelona, Spain"),
        status: Some("Pending"),
        status_date: Some("14 May"),
        card: Some("Visa •••9598"),
        points: Some("6,15"),
        category: Some("Restaurants"),
        logo_url: None,
    },
    Transaction {
        id: "empanada1",
        merchant: "Empanadaclubgrandegracia 1",
        amount: "-3,50 €",
        date: "Yesterday, 17:48",
        location: Some("Barcelona, Spain"),
        status: Some("Pending"),
        status_date: Some("14 May"),
        card: Some("Visa •••9598"),
        points: Some("1,75"),
        category: Some("Restaurants"),
        logo_url: None,
    },
    Transaction {
        id: "arbitrade1",
        merchant: "Arbitrade",
        amount: "-1,20 €",
        date: "Yesterday, 11:13",
        location: Some("Barcelona, Spain"),
        status: Some("Pending"),
        status_date: Some("14 May"),
        card: Some("Visa •••9598"),
        points: Some("0,60"),
        category: Some("Services"),
        logo_url: None,
    },
];

const BUSINESS_TRANSACTIONS: [Transaction; 8] = [
    Transaction {
        id: "catalana",
        merchant: "Catalana Del Pa Sa G. T",
        amount: "-3 €",
        date: "Today, 09:21",
        location: Some("Barcelona Barcelona, Spain"),
        status: Some("Pending"),
        status_date: Some("14 May"),
        card: Some("Visa •••9598"),
        points: Some("1,50"),
        category: Some("Restaurants"),
        logo_url: None,
    },
    Transaction {
        id: "monroe1",
        merchant: "La Monroe",
        amount: "-3,50 €",
        date: "Yesterday, 22:58",
        location: Some("Barcelona, Spain"),
        status: Some("Pending"),
        status_date: Some("14 May"),
        card: Some("Visa •••9598"),
        points: Some("1,75"),
        category: Some("Restaurants"),
        logo_url: None,
    },
    Transaction {
        id: "monroe2",
        merchant: "La Monroe",
        amount: "-3 €",
        date: "Yesterday, 22:57",
        location: Some("Barcelona, Spain"),
        status: Some("Pending"),
        status_date: Some("14 May"),
        card: Some("Visa •••9598"),
        points: Some("1,50"),
        category: Some("Restaurants"),
        logo_url: None,
    },
    Transaction {
        id: "ali",
        merchant: "Ali Restaurant",
        amount: "-12,30 €",
        date: "Yesterday, 22:10",
        location: Some("Barcelona, Spain"),
        status: Some("Pending"),
        status_date: Some("14 May"),
        card: Some("Visa •••9598"),
        points: Some("6,15"),
        category: Some("Restaurants"),
        logo_url: None,
    },
    Transaction {
        id: "empanada",
        merchant: "Empanadaclubgrandegracia 1",
        amount: "-3,50 €",
        date: "Yesterday, 17:48",
        location: Some("Barcelona, Spain"),
        status: Some("Pending"),
        status_date: Some("14 May"),
        card: Some("Visa •••9598"),
        points: Some("1,75"),
        category: Some("Restaurants"),
        logo_url: None,
    },
    Transaction {
        id: "arbitrade",
        merchant: "Arbitrade",
        amount: "-1,20 €",
        date: "Yesterday, 11:13",
        location: Some("Barcelona, Spain"),
        status: Some("Pending"),
        status_date: Some("14 May"),
        card: Some("Visa •••9598"),
        points: Some("0,60"),
        category: Some("Services"),
        logo_url: None,
    },
    Transaction {
        id: "makro",
        merchant: "Makro Cash & Carry",
        amount: "-89,90 €",
        date: "3 May, 21:12",
        location: Some("L'Hospitalet de Llobregat, Spain"),
        status: None,
        status_date: None,
        card: Some("Visa •••9598"),
        points: None,
        category: Some("Groceries"),
        logo_url: None,
    },
    Transaction {
        id: "ferreteria",
        merchant: "Ferreteria El Prat",
        amount: "-15,88 €",
        date: "3 May, 18:05",
        location: Some("El Prat de Llobregat, Spain"),
        status: None,
        status_date: None,
        card: Some("Visa •••9598"),
        points: None,
        category: Some("Services"),
        logo_url: None,
    },
];

// Incoming payments shown on the vendor dashboard.
const BUSINESS_RECENT_PAYMENTS: [Transaction; 3] = [
    Transaction {
        id: "student1",
        merchant: "Payment from Student",
        amount: "+5,50 €",
        date: "Today, 09:21",
        location: None,
        status: None,
        status_date: None,
        card: None,
        points: None,
        category: Some("Sales"),
        logo_url: None,
    },
    Transaction {
        id: "professor1",
        merchant: "Payment from Professor",
        amount: "+8,75 €",
        date: "Today, 08:45",
        location: None,
        status: None,
        status_date: None,
        card: None,
        points: None,
        category: Some("Sales"),
        logo_url: None,
    },
    Transaction {
        id: "student2",
        merchant: "Payment from Student",
        amount: "+3,25 €",
        date: "Today, 08:30",
        location: None,
        status: None,
        status_date: None,
        card: None,
        points: None,
        category: Some("Sales"),
        logo_url: None,
    },
];

/// The transactions shown on the consumer screens.
pub fn consumer_transactions() -> &'static [Transaction] {
    &CONSUMER_TRANSACTIONS
}

/// The transactions shown on the vendor transactions screen.
pub fn business_transactions() -> &'static [Transaction] {
    &BUSINESS_TRANSACTIONS
}

/// The incoming payments shown on the vendor dashboard.
pub fn business_recent_payments() -> &'static [Transaction] {
    &BUSINESS_RECENT_PAYMENTS
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::money::parse_amount;

    use super::{business_recent_payments, business_transactions, consumer_transactions};

    #[test]
    fn fixture_ids_are_unique_per_list() {
        for transactions in [
            consumer_transactions(),
            business_transactions(),
            business_recent_payments(),
        ] {
            let ids: HashSet<&str> = transactions.iter().map(|t| t.id).collect();
            assert_eq!(ids.len(), transactions.len());
        }
    }

    #[test]
    fn fixture_amounts_are_parseable() {
        for transactions in [
            consumer_transactions(),
            business_transactions(),
            business_recent_payments(),
        ] {
            for transaction in transactions {
                parse_amount(transaction.amount)
                    .unwrap_or_else(|_| panic!("bad amount on {}", transaction.id));
            }
        }
    }
}
