mod common;

use std::collections::BTreeMap;

use customer_dna_backend::error::{DnaError, Stage};
use customer_dna_backend::models::{CustomerId, Transaction};
use customer_dna_backend::{compute_daily_records, compute_ipt, compute_ipt_pipeline};

use crate::common::{at, daily_as_transaction, mixed_customers, worked_example};

#[test]
fn test_worked_example_round_trip() {
    let ipt = compute_ipt_pipeline(&worked_example()).unwrap();

    let days: Vec<String> = ipt.iter().map(|r| r.calendar_day.to_string()).collect();
    assert_eq!(days, vec!["2021-01-01", "2021-01-02", "2021-01-03"]);

    assert_eq!(ipt[0].ipt_days, None);
    assert!((ipt[1].ipt_days.unwrap() - 1.0625).abs() < 1e-6);
    assert!((ipt[2].ipt_days.unwrap() - 1.03125).abs() < 1e-6);
}

#[test]
fn test_aggregation_is_idempotent() {
    let first = compute_daily_records(&mixed_customers()).unwrap();

    let replayed: Vec<Transaction> = first.iter().map(daily_as_transaction).collect();
    let second = compute_daily_records(&replayed).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_representative_is_earliest_of_day() {
    let txs = mixed_customers();
    let daily = compute_daily_records(&txs).unwrap();

    for record in &daily {
        for tx in txs.iter().filter(|tx| {
            tx.customer_id.as_ref() == Some(&record.customer_id)
                && tx.timestamp.unwrap().date_naive() == record.calendar_day
        }) {
            assert!(record.first_time_by_date <= tx.timestamp.unwrap());
        }
    }
}

#[test]
fn test_cardinality_preserved() {
    let daily = compute_daily_records(&mixed_customers()).unwrap();
    let ipt = compute_ipt(&daily).unwrap();
    assert_eq!(ipt.len(), daily.len());
}

#[test]
fn test_non_negative_and_first_null_per_customer() {
    let ipt = compute_ipt_pipeline(&mixed_customers()).unwrap();

    let mut by_customer: BTreeMap<CustomerId, Vec<Option<f64>>> = BTreeMap::new();
    for r in &ipt {
        by_customer.entry(r.customer_id.clone()).or_default().push(r.ipt_days);
    }

    assert_eq!(by_customer.len(), 3);
    for (customer, series) in by_customer {
        assert_eq!(series[0], None, "first entry of {} must be null", customer);
        assert!(series[1..].iter().all(|v| v.unwrap() >= 0.0));
    }
}

#[test]
fn test_days_strictly_increasing_per_customer() {
    let ipt = compute_ipt_pipeline(&mixed_customers()).unwrap();

    for pair in ipt.windows(2) {
        if pair[0].customer_id == pair[1].customer_id {
            assert!(pair[0].calendar_day < pair[1].calendar_day);
        }
    }
}

#[test]
fn test_null_customer_fails_without_output() {
    let mut txs = worked_example();
    txs[2].customer_id = None;

    let result = compute_daily_records(&txs);

    match result {
        Err(DnaError::Validation { stage, .. }) => assert_eq!(stage, Stage::DailyAggregation),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_single_transaction_customer() {
    let txs = vec![Transaction::new(CustomerId::Int(99), at(7, 15, 0))];

    let daily = compute_daily_records(&txs).unwrap();
    assert_eq!(daily.len(), 1);

    let ipt = compute_ipt(&daily).unwrap();
    assert_eq!(ipt.len(), 1);
    assert_eq!(ipt[0].ipt_days, None);
}

#[test]
fn test_numeric_text_and_integer_ids_are_one_customer() {
    let txs = vec![
        Transaction::new(42i64, at(1, 8, 0)),
        Transaction::new("42", at(1, 9, 0)),
        Transaction::new("42", at(3, 8, 0)),
    ];

    let ipt = compute_ipt_pipeline(&txs).unwrap();

    assert_eq!(ipt.len(), 2);
    assert!(ipt.iter().all(|r| r.customer_id == CustomerId::Int(42)));
    assert_eq!(ipt[0].first_time_by_date, at(1, 8, 0));
    assert_eq!(ipt[1].ipt_days, Some(2.0));
}

#[test]
fn test_duplicate_daily_records_rejected() {
    let mut daily = compute_daily_records(&worked_example()).unwrap();
    daily.push(daily[1].clone());

    let err = compute_ipt(&daily).unwrap_err();
    assert_eq!(err.stage(), Some(Stage::IptDifferencing));
    assert!(err.to_string().contains("customer_id=X"));
}

#[test]
fn test_empty_input_yields_empty_output() {
    assert!(compute_ipt_pipeline(&[]).unwrap().is_empty());
    assert!(compute_ipt(&[]).unwrap().is_empty());
}
