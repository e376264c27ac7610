use proptest::prelude::*;

use crate::evaluator::{categorize, compute};
use crate::pollutant::Pollutant;
use crate::reading::PollutantReading;

fn reading() -> impl Strategy<Value = PollutantReading> {
    (
        0.0f64..1e6,
        0.0f64..1e6,
        0.0f64..1e6,
        0.0f64..1e6,
        0.0f64..1e6,
        0.0f64..1e6,
    )
        .prop_map(|(pm25, pm10, so2, no2, co, o3)| {
            PollutantReading::new(pm25, pm10, so2, no2, co, o3)
        })
}

proptest! {
    #[test]
    fn compute_returns_weighted_maximum(r in reading()) {
        let subs: Vec<(Pollutant, f64)> = Pollutant::ALL
            .iter()
            .map(|&p| (p, r.get(p) * p.weight()))
            .collect();
        let max = subs.iter().map(|&(_, v)| v).fold(f64::MIN, f64::max);
        let first = subs.iter().find(|&&(_, v)| v == max).map(|&(p, _)| p).unwrap();

        let (aqi, dominant) = compute(&r);
        prop_assert_eq!(aqi, max);
        prop_assert_eq!(dominant, first);
    }

    #[test]
    fn categorize_is_monotonic(a in -10.0f64..1000.0, b in -10.0f64..1000.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(categorize(lo) <= categorize(hi));
    }
}
