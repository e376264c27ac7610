use crate::category::{Category, THRESHOLDS};
use crate::evaluator::categorize;

#[test]
fn test_ladder() {
    assert_eq!(categorize(0.0), Category::Good);
    assert_eq!(categorize(75.0), Category::Satisfactory);
    assert_eq!(categorize(150.0), Category::Moderate);
    assert_eq!(categorize(250.0), Category::Poor);
    assert_eq!(categorize(350.0), Category::VeryPoor);
    assert_eq!(categorize(1e9), Category::Severe);
}

#[test]
fn test_inclusive_upper_bounds() {
    assert_eq!(categorize(50.0), Category::Good);
    assert_eq!(categorize(50.0001), Category::Satisfactory);
    assert_eq!(categorize(100.0), Category::Satisfactory);
    assert_eq!(categorize(200.0), Category::Moderate);
    assert_eq!(categorize(300.0), Category::Poor);
    assert_eq!(categorize(400.0), Category::VeryPoor);
    assert_eq!(categorize(400.0001), Category::Severe);
}

#[test]
fn test_total_over_reals() {
    assert_eq!(categorize(-10.0), Category::Good);
    assert_eq!(categorize(f64::NEG_INFINITY), Category::Good);
    assert_eq!(categorize(f64::INFINITY), Category::Severe);
    assert_eq!(categorize(f64::NAN), Category::Severe);
}

#[test]
fn test_labels() {
    let labels: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        labels,
        vec!["Good", "Satisfactory", "Moderate", "Poor", "Very Poor", "Severe"]
    );
}

#[test]
fn test_thresholds_ascending() {
    for pair in THRESHOLDS.windows(2) {
        assert!(pair[0].0 < pair[1].0);
        assert!(pair[0].1 < pair[1].1);
    }
}
