use rstest::rstest;

use bricks_linalg::{canberra, chebyshev, euclidean, l1, Metric};

const FIRST: [f64; 3] = [0.0, 1.0, 2.0];
const SECOND: [f64; 3] = [5.0, 4.0, 3.0];

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "distance {} but must be {}",
        actual,
        expected
    );
}

#[test]
fn test_euclidean() {
    let dist = euclidean(&FIRST, &[3.0, 4.0, 5.0]).unwrap();
    assert_close(dist, 5.196152422706632);
}

#[test]
fn test_l1() {
    assert_close(l1(&FIRST, &SECOND).unwrap(), 9.0);
}

#[test]
fn test_canberra() {
    assert_close(canberra(&FIRST, &SECOND).unwrap(), 1.8);
}

#[test]
fn test_chebyshev() {
    assert_close(chebyshev(&FIRST, &SECOND).unwrap(), 5.0);
}

#[rstest]
#[case(Metric::Euclidean, 35f64.sqrt())]
#[case(Metric::L1, 9.0)]
#[case(Metric::Canberra, 1.8)]
#[case(Metric::Chebyshev, 5.0)]
fn test_metric_dispatch(#[case] metric: Metric, #[case] expected: f64) {
    assert_close(metric.distance(&FIRST, &SECOND).unwrap(), expected);
}

#[rstest]
#[case(Metric::Euclidean)]
#[case(Metric::L1)]
#[case(Metric::Canberra)]
#[case(Metric::Chebyshev)]
fn test_symmetric(#[case] metric: Metric) {
    let a = [1.5, -2.0, 7.0];
    let b = [0.5, 3.0, -1.0];
    assert_close(
        metric.distance(&a, &b).unwrap(),
        metric.distance(&b, &a).unwrap(),
    );
}

#[rstest]
#[case(Metric::Euclidean)]
#[case(Metric::L1)]
#[case(Metric::Chebyshev)]
fn test_identity(#[case] metric: Metric) {
    let a = [1.5, -2.0, 7.0];
    assert_eq!(metric.distance(&a, &a), Ok(0.0));
}
