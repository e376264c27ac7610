use crate::category::Category;
use crate::chemistry::explain;
use crate::evaluator::{compute, evaluate, round_to_tenth, sub_indices};
use crate::pollutant::Pollutant;
use crate::reading::PollutantReading;
use crate::sub_index::SubIndexSet;
use crate::AqiError;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_sub_indices() {
    let reading = PollutantReading::new(10.0, 5.0, 2.0, 3.0, 1.0, 4.0);
    let set = sub_indices(&reading);
    assert_eq!(set, SubIndexSet::from_reading(&reading));

    assert_close(set.get(Pollutant::Pm25), 20.0);
    assert_close(set.get(Pollutant::Pm10), 7.5);
    assert_close(set.get(Pollutant::So2), 2.4);
    assert_close(set.get(Pollutant::No2), 3.9);
    assert_close(set.get(Pollutant::Co), 10.0);
    assert_close(set.get(Pollutant::O3), 4.4);

    let order: Vec<Pollutant> = set.iter().map(|(p, _)| p).collect();
    assert_eq!(order, Pollutant::ALL.to_vec());
}

#[test]
fn test_mixed_reading() {
    let reading = PollutantReading::new(10.0, 5.0, 2.0, 3.0, 1.0, 4.0);
    let result = evaluate(&reading).unwrap();

    assert_eq!(result.aqi, 20.0);
    assert_eq!(result.dominant_pollutant, Pollutant::Pm25);
    assert_eq!(result.category, Category::Good);
    assert_eq!(result.chemistry_note, explain(Pollutant::Pm25));
}

#[test]
fn test_all_zero_ties_to_first() {
    let result = evaluate(&PollutantReading::default()).unwrap();

    assert_eq!(result.aqi, 0.0);
    assert_eq!(result.dominant_pollutant, Pollutant::Pm25);
    assert_eq!(result.category, Category::Good);
}

#[test]
fn test_carbon_monoxide_severe() {
    let reading = PollutantReading::new(0.0, 0.0, 0.0, 0.0, 50.0, 0.0);
    let result = evaluate(&reading).unwrap();

    assert_eq!(result.aqi, 500.0);
    assert_eq!(result.dominant_pollutant, Pollutant::Co);
    assert_eq!(result.category, Category::Severe);
}

#[test]
fn test_ties_follow_canonical_order() {
    // PM2.5 = 5 * 2 = 10, CO = 1 * 10 = 10
    let reading = PollutantReading::new(5.0, 0.0, 0.0, 0.0, 1.0, 0.0);
    assert_eq!(compute(&reading), (10.0, Pollutant::Pm25));

    // PM10 = 20 * 1.5 = 30, CO = 3 * 10 = 30
    let reading = PollutantReading::new(0.0, 20.0, 0.0, 0.0, 3.0, 0.0);
    assert_eq!(compute(&reading), (30.0, Pollutant::Pm10));
}

#[test]
fn test_last_pollutant_can_dominate() {
    let reading = PollutantReading::new(1.0, 1.0, 1.0, 1.0, 0.0, 100.0);
    let (aqi, dominant) = compute(&reading);
    assert_close(aqi, 110.0);
    assert_eq!(dominant, Pollutant::O3);
}

#[test]
fn test_negative_values_are_computed_through() {
    let reading = PollutantReading::new(-10.0, -5.0, -2.0, -3.0, -1.0, -4.0);
    let result = evaluate(&reading).unwrap();

    // -2 * 1.2 = -2.4 is the largest
    assert_eq!(result.dominant_pollutant, Pollutant::So2);
    assert_eq!(result.aqi, -2.4);
    assert_eq!(result.category, Category::Good);
}

#[test]
fn test_category_uses_unrounded_value() {
    // 25.02 * 2 = 50.04 rounds to 50.0 but is already past the Good bound
    let reading = PollutantReading::new(25.02, 0.0, 0.0, 0.0, 0.0, 0.0);
    let result = evaluate(&reading).unwrap();

    assert_eq!(result.aqi, 50.0);
    assert_eq!(result.category, Category::Satisfactory);
}

#[test]
fn test_rounding() {
    assert_eq!(round_to_tenth(20.0), 20.0);
    assert_eq!(round_to_tenth(7.46), 7.5);
    assert_eq!(round_to_tenth(7.44), 7.4);
    assert_eq!(round_to_tenth(-3.94), -3.9);
    assert_eq!(round_to_tenth(1e300), 1e300);
}

#[test]
fn test_rounding_is_single_step() {
    // 0.3 * 1.5 = 0.44999999999999996, which lies below the half
    assert_eq!(round_to_tenth(0.3 * 1.5), 0.4);
    // 2.25 is an exact tie
    assert_eq!(round_to_tenth(2.25), 2.2);

    for (pm10, expected) in [(0.3, 0.4), (1.5, 2.2), (1.7, 2.5)] {
        let reading = PollutantReading::new(0.0, pm10, 0.0, 0.0, 0.0, 0.0);
        let result = evaluate(&reading).unwrap();
        assert_eq!(result.dominant_pollutant, Pollutant::Pm10);
        assert_eq!(result.aqi, expected, "pm10 = {}", pm10);
    }
}

#[test]
fn test_non_finite_reading_rejected() {
    let reading = PollutantReading::new(0.0, f64::NAN, 0.0, 0.0, 0.0, 0.0);
    assert!(matches!(
        evaluate(&reading),
        Err(AqiError::NonFiniteReading {
            pollutant: Pollutant::Pm10,
            ..
        })
    ));
}

#[test]
fn test_overflowing_index_rejected() {
    let reading = PollutantReading::new(0.0, 0.0, 0.0, 0.0, 1e308, 0.0);
    assert_eq!(
        evaluate(&reading),
        Err(AqiError::NonFiniteIndex {
            pollutant: Pollutant::Co
        })
    );
}

#[test]
fn test_huge_finite_value_accepted() {
    let reading = PollutantReading::new(1e300, 0.0, 0.0, 0.0, 0.0, 0.0);
    let result = evaluate(&reading).unwrap();
    assert_eq!(result.aqi, 2e300);
    assert_eq!(result.category, Category::Severe);
}
