//! Property-based invariant tests for the nearest-match estimator.
//!
//! 1. A menu type with no records always yields the fallback level
//! 2. Otherwise the match has the minimum attendance difference, and ties
//!    resolve to the earliest record in input order
//! 3. The estimated level is the matched record's level

use proptest::prelude::*;
use wastecast_core::estimator::closest;
use wastecast_core::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn level_strategy() -> impl Strategy<Value = WasteLevel> {
    prop_oneof![
        Just(WasteLevel::Low),
        Just(WasteLevel::Medium),
        Just(WasteLevel::High),
    ]
}

/// Few menu types and a narrow attendance band so ties are frequent.
fn record_strategy() -> impl Strategy<Value = HistoricalRecord> {
    (
        prop_oneof![Just("veg"), Just("nonveg"), Just("rice")],
        0u32..60,
        level_strategy(),
    )
        .prop_map(|(menu, attendance, level)| HistoricalRecord::new(menu, attendance, level))
}

fn records_strategy() -> impl Strategy<Value = Vec<HistoricalRecord>> {
    prop::collection::vec(record_strategy(), 0..40)
}

/// Reference answer: index of the first record with the smallest difference.
fn brute_force_index(records: &[HistoricalRecord], query: &Query) -> Option<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.menu_type == query.menu_type)
        .min_by_key(|(i, r)| (r.attendance.abs_diff(query.attendance), *i))
        .map(|(i, _)| i)
}

proptest! {
    #[test]
    fn unmatched_menu_falls_back(records in records_strategy(), attendance in any::<u32>()) {
        let query = Query::new(attendance, "dessert");
        prop_assert!(closest(&records, &query).is_none());
        prop_assert_eq!(estimate(&records, &query), FALLBACK_LEVEL);
    }

    #[test]
    fn closest_matches_first_minimum(
        records in records_strategy(),
        menu in prop_oneof![Just("veg"), Just("nonveg"), Just("rice")],
        attendance in 0u32..80,
    ) {
        let query = Query::new(attendance, menu);
        let expected = brute_force_index(&records, &query);
        let actual = closest(&records, &query)
            .map(|m| records.iter().position(|r| std::ptr::eq(r, m)).unwrap());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn estimate_returns_matched_level(
        records in records_strategy(),
        attendance in 0u32..80,
    ) {
        let query = Query::new(attendance, "veg");
        let expected = match brute_force_index(&records, &query) {
            Some(i) => records[i].waste_level,
            None => FALLBACK_LEVEL,
        };
        prop_assert_eq!(estimate(&records, &query), expected);
    }
}
