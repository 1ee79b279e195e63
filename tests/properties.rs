use proptest::prelude::*;

use sensor_coverage::errors::IntervalError;
use sensor_coverage::{IntervalUnion, SensorId, Time};

type RawReport = (SensorId, Time, Time);

fn arb_report() -> impl Strategy<Value = RawReport> {
    (0u32..8, 0u64..500, 0u64..40).prop_map(|(sensor_id, start, len)| (sensor_id, start, start + len))
}

fn arb_reports() -> impl Strategy<Value = Vec<RawReport>> {
    prop::collection::vec(arb_report(), 0..60)
}

fn build(reports: &[RawReport]) -> IntervalUnion {
    let mut union = IntervalUnion::new();
    for &(sensor_id, start, end) in reports {
        union.process(sensor_id, start, end).unwrap();
    }
    union
}

/// Sort-and-sweep union, merging touching intervals and dropping empty ones.
fn reference_union(reports: &[RawReport]) -> Vec<(Time, Time)> {
    let mut intervals: Vec<(Time, Time)> = reports
        .iter()
        .filter(|(_, start, end)| start < end)
        .map(|&(_, start, end)| (start, end))
        .collect();
    intervals.sort_unstable();

    let mut merged: Vec<(Time, Time)> = Vec::new();
    for (start, end) in intervals {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

proptest! {
    #[test]
    fn matches_reference(reports in arb_reports()) {
        let union = build(&reports);
        let expected = reference_union(&reports);
        let expected_total: Time = expected.iter().map(|(s, e)| e - s).sum();
        prop_assert_eq!(union.snapshot(), expected);
        prop_assert_eq!(union.total_covered_time(), expected_total);
    }

    #[test]
    fn invariants_hold_after_every_call(reports in arb_reports()) {
        let mut union = IntervalUnion::new();
        for &(sensor_id, start, end) in &reports {
            union.process(sensor_id, start, end).unwrap();
            prop_assert!(union.validate().is_ok());

            let snapshot = union.snapshot();
            for pair in snapshot.windows(2) {
                prop_assert!(pair[0].1 < pair[1].0);
            }
            let sum: Time = snapshot.iter().map(|(s, e)| e - s).sum();
            prop_assert_eq!(union.total_covered_time(), sum);
        }
    }

    #[test]
    fn reprocessing_is_idempotent(reports in arb_reports()) {
        let once = build(&reports);
        let mut twice = build(&reports);
        for &(sensor_id, start, end) in &reports {
            twice.process(sensor_id, start, end).unwrap();
        }
        prop_assert_eq!(once.snapshot(), twice.snapshot());
        prop_assert_eq!(once.total_covered_time(), twice.total_covered_time());
    }

    #[test]
    fn order_does_not_matter(
        (reports, shuffled) in arb_reports().prop_flat_map(|reports| {
            let shuffled = Just(reports.clone()).prop_shuffle();
            (Just(reports), shuffled)
        })
    ) {
        let forward = build(&reports);
        let permuted = build(&shuffled);
        prop_assert_eq!(forward.snapshot(), permuted.snapshot());
        prop_assert_eq!(forward.total_covered_time(), permuted.total_covered_time());
    }

    #[test]
    fn sensor_id_is_inert(reports in arb_reports(), sensor_id in any::<SensorId>()) {
        let relabeled: Vec<RawReport> = reports
            .iter()
            .map(|&(_, start, end)| (sensor_id, start, end))
            .collect();
        prop_assert_eq!(build(&reports).snapshot(), build(&relabeled).snapshot());
    }

    #[test]
    fn inverted_report_is_a_no_op(
        reports in arb_reports(),
        start in 1u64..1000,
        gap in 1u64..100
    ) {
        let mut union = build(&reports);
        let before = union.snapshot();
        let total = union.total_covered_time();

        let end = start.saturating_sub(gap);
        let result = union.process(0, start, end);
        prop_assert_eq!(result, Err(IntervalError::InvalidInterval { start, end }));
        prop_assert_eq!(union.snapshot(), before);
        prop_assert_eq!(union.total_covered_time(), total);
    }
}
