use chrono::{DateTime, TimeZone, Utc};
use customer_dna_backend::models::{CustomerId, DailyRecord, Transaction};
use rust_decimal_macros::dec;

pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 1, day, hour, minute, 0).unwrap()
}

/// Customer X: two orders on Jan 1, two on Jan 2, one on Jan 3
pub fn worked_example() -> Vec<Transaction> {
    vec![
        Transaction::new("X", at(1, 8, 0)).with_order("SO-1", dec!(19.99), 1),
        Transaction::new("X", at(1, 12, 0)).with_order("SO-2", dec!(5.00), 2),
        Transaction::new("X", at(2, 9, 30)).with_order("SO-3", dec!(42.00), 1),
        Transaction::new("X", at(2, 14, 0)).with_order("SO-4", dec!(7.25), 3),
        Transaction::new("X", at(3, 10, 15)).with_order("SO-5", dec!(11.10), 1),
    ]
}

/// Worked example plus two more customers, interleaved and out of order
#[allow(dead_code)]
pub fn mixed_customers() -> Vec<Transaction> {
    let mut txs = worked_example();
    txs.push(Transaction::new(CustomerId::Int(2), at(5, 18, 0)));
    txs.insert(1, Transaction::new(CustomerId::Int(2), at(2, 6, 0)));
    txs.insert(3, Transaction::new("solo", at(4, 23, 59)));
    txs.reverse();
    txs
}

/// A daily record fed back in as one transaction at its representative time
#[allow(dead_code)]
pub fn daily_as_transaction(record: &DailyRecord) -> Transaction {
    Transaction::new(record.customer_id.clone(), record.first_time_by_date)
}
