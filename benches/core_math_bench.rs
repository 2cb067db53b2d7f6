use criterion::{Criterion, criterion_group, criterion_main};
use indexmap::IndexMap;
use scatter_rs::core::{DomainPadding, LinearScale, Record, padded_domain};
use std::hint::black_box;

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((8.0, 22.0), (0.0, 820.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.to_pixel(black_box(19.3)).expect("to pixel");
            let _ = scale.to_domain(px).expect("from pixel");
        })
    });
}

fn bench_padded_domain_10k(c: &mut Criterion) {
    let records: Vec<Record> = (0..10_000)
        .map(|i| {
            let mut values = IndexMap::new();
            values.insert("poverty".to_owned(), 5.0 + (i % 97) as f64 * 0.25);
            values.insert("cost".to_owned(), 10.0 + (i % 53) as f64 * 0.5);
            Record::new(format!("R{i}"), values)
        })
        .collect();

    c.bench_function("padded_domain_10k", |b| {
        b.iter(|| {
            let _ = padded_domain(
                black_box(&records),
                black_box("poverty"),
                black_box(DomainPadding::default()),
            )
            .expect("domain");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_padded_domain_10k
);
criterion_main!(benches);
