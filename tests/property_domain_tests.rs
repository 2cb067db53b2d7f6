use indexmap::IndexMap;
use proptest::prelude::*;
use scatter_rs::core::{DomainPadding, Record, baseline_domain, padded_domain};

fn records_from_values(values: &[f64]) -> Vec<Record> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let mut fields = IndexMap::new();
            fields.insert("poverty".to_owned(), *value);
            fields.insert("cost".to_owned(), value * 2.0);
            Record::new(format!("R{index}"), fields)
        })
        .collect()
}

proptest! {
    #[test]
    fn padded_domain_matches_scaled_envelope(
        values in prop::collection::vec(0.01f64..10_000.0, 1..64)
    ) {
        let records = records_from_values(&values);
        let (min, max) =
            padded_domain(&records, "poverty", DomainPadding::default()).expect("domain");

        let raw_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let raw_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        prop_assert!((min - 0.8 * raw_min).abs() <= raw_min.abs().max(1.0) * 1e-12);
        prop_assert!((max - 1.1 * raw_max).abs() <= raw_max.abs().max(1.0) * 1e-12);
    }

    #[test]
    fn padded_domain_envelopes_every_value(
        values in prop::collection::vec(0.01f64..10_000.0, 1..64)
    ) {
        let records = records_from_values(&values);
        let (min, max) =
            padded_domain(&records, "poverty", DomainPadding::default()).expect("domain");

        for value in &values {
            prop_assert!(min <= *value);
            prop_assert!(max >= *value);
        }
    }

    #[test]
    fn baseline_domain_always_starts_at_zero(
        values in prop::collection::vec(0.01f64..10_000.0, 1..64),
        upper in 1.0f64..4.0
    ) {
        let records = records_from_values(&values);
        let (min, max) = baseline_domain(&records, "cost", upper).expect("domain");

        let raw_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max) * 2.0;
        prop_assert_eq!(min, 0.0);
        prop_assert!((max - upper * raw_max).abs() <= raw_max.abs().max(1.0) * 1e-9);
    }
}
