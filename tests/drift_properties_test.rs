//! Property tests for the drift potential pipeline.
//!
//! Checks invariants that must hold for any valid input: clamped drift
//! potential is never negative, N-summary margins agree, single-direction
//! mass points the resultant at that direction, and re-aggregation keeps
//! the grand total.

use aeolian_rs::{
    CardinalDirection, PeriodKind, aggregate, drift_potential, n_summary, resultant_vector, sum_dp,
};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use proptest::prelude::*;

fn speed() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0_f64..80.0]
}

fn direction() -> impl Strategy<Value = CardinalDirection> {
    (0_usize..16).prop_map(CardinalDirection::from_index)
}

fn records(max: usize) -> impl Strategy<Value = (Vec<f64>, Vec<CardinalDirection>)> {
    proptest::collection::vec((speed(), direction()), 1..max)
        .prop_map(|rows| rows.into_iter().unzip())
}

fn timestamps(n: usize, step_hours: i64) -> Vec<NaiveDateTime> {
    let start = NaiveDate::from_ymd_opt(2018, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    (0..n)
        .map(|i| start + TimeDelta::hours(step_hours * i as i64))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn clamped_drift_potential_is_non_negative(
        speeds in proptest::collection::vec(0.0_f64..100.0, 0..200),
        t in 0.0_f64..1.0,
        threshold in 0.0_f64..30.0,
    ) {
        let dp = drift_potential(&speeds, t, threshold, true);
        prop_assert_eq!(dp.len(), speeds.len());
        prop_assert!(dp.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn unclamped_drift_potential_is_raw_formula(
        speeds in proptest::collection::vec(0.0_f64..100.0, 1..100),
        t in 0.0_f64..1.0,
    ) {
        let dp = drift_potential(&speeds, t, 12.0, false);
        for (v, d) in speeds.iter().zip(&dp) {
            prop_assert_eq!(*d, t * (v * v * (v - 12.0)));
        }
    }

    #[test]
    fn n_summary_margins_agree((speeds, dirs) in records(300)) {
        let table = n_summary(&speeds, &dirs).unwrap();
        // each published value is off by at most half a unit in the last place
        let tol = 0.05 * 17.0 + 1e-9;
        prop_assert!((table.row_total_sum() - table.column_total_sum()).abs() <= 2.0 * tol);
        prop_assert!((table.column_total_sum() - 100.0).abs() <= tol);
        prop_assert!((table.grand_total() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn single_direction_mass_points_resultant(dir in direction(), mass in 0.001_f64..1e6) {
        let mut dist = [0.0; 16];
        dist[dir.index()] = mass;
        let (rdp, rdd) = resultant_vector(&dist).unwrap();
        prop_assert!((rdp - mass).abs() <= 1e-9 * mass);
        prop_assert!((rdd - dir.bearing()).abs() < 1e-9);
        prop_assert!((0.0..360.0).contains(&rdd));
    }

    #[test]
    fn resultant_never_exceeds_total(dist in proptest::array::uniform16(0.0_f64..1000.0)) {
        let (rdp, rdd) = resultant_vector(&dist).unwrap();
        let total: f64 = dist.iter().sum();
        prop_assert!(rdp <= total * (1.0 + 1e-12) + 1e-12);
        prop_assert!((0.0..360.0).contains(&rdd));
    }

    #[test]
    fn collapse_preserves_grand_total(
        (speeds, dirs) in records(200),
        step in 1_i64..400,
    ) {
        let ts = timestamps(speeds.len(), step);
        let dp = drift_potential(&speeds, 0.01, 12.0, true);

        for kind in [PeriodKind::Monthly, PeriodKind::Seasonal, PeriodKind::Yearly] {
            let table = aggregate(&ts, &dp, &dirs, kind).unwrap();
            let raw = sum_dp(&dp);
            let tol = 1e-9 * raw.max(1.0);
            prop_assert!((table.total() - raw).abs() <= tol);
            prop_assert!((table.collapse().total() - raw).abs() <= tol);
            prop_assert_eq!(table.len() % 16, 0);
        }
    }
}
