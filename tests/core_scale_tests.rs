use scatter_rs::ChartError;
use scatter_rs::core::LinearScale;

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 820.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.to_pixel(original).expect("to pixel");
    let recovered = scale.to_domain(px).expect("from pixel");

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn scale_maps_domain_endpoints_to_range_endpoints() {
    let scale = LinearScale::new((8.0, 22.0), (0.0, 820.0)).expect("valid scale");

    assert_eq!(scale.to_pixel(8.0).expect("min"), 0.0);
    assert_eq!(scale.to_pixel(22.0).expect("max"), 820.0);
}

#[test]
fn descending_range_inverts_vertical_mapping() {
    let scale = LinearScale::new((0.0, 44.0), (400.0, 0.0)).expect("valid scale");

    assert_eq!(scale.to_pixel(0.0).expect("baseline"), 400.0);
    assert_eq!(scale.to_pixel(44.0).expect("top"), 0.0);
}

#[test]
fn set_domain_replaces_domain_and_keeps_range() {
    let mut scale = LinearScale::new((8.0, 22.0), (0.0, 820.0)).expect("valid scale");
    let range_before = scale.range();

    scale.set_domain((16.0, 44.0)).expect("set domain");

    assert_eq!(scale.domain(), (16.0, 44.0));
    assert_eq!(scale.range(), range_before);
    assert_eq!(scale.to_pixel(16.0).expect("new min"), 0.0);
}

#[test]
fn ticks_are_evenly_spaced_and_include_endpoints() {
    let scale = LinearScale::new((0.0, 100.0), (0.0, 820.0)).expect("valid scale");

    let ticks = scale.ticks(5);
    assert_eq!(ticks.as_slice(), &[0.0, 25.0, 50.0, 75.0, 100.0]);

    assert!(scale.ticks(0).is_empty());
    assert_eq!(scale.ticks(1).as_slice(), &[0.0]);
}

#[test]
fn degenerate_domain_is_rejected() {
    let err = LinearScale::new((5.0, 5.0), (0.0, 820.0)).expect_err("zero-span domain");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = LinearScale::new((f64::NAN, 1.0), (0.0, 820.0)).expect_err("nan domain");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let mut scale = LinearScale::new((0.0, 1.0), (0.0, 820.0)).expect("valid scale");
    let err = scale.set_domain((2.0, 2.0)).expect_err("zero-span replacement");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(scale.domain(), (0.0, 1.0));
}

#[test]
fn non_finite_values_are_rejected() {
    let scale = LinearScale::new((0.0, 1.0), (0.0, 820.0)).expect("valid scale");
    assert!(scale.to_pixel(f64::NAN).is_err());
    assert!(scale.to_domain(f64::INFINITY).is_err());
}
