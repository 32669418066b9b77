//! Nearest-match waste level estimation.
//!
//! Records are partitioned by exact `menu_type` equality, then scanned once
//! for the smallest absolute attendance difference. On equal differences the
//! record that appears first in the input wins. A menu type with no history
//! falls back to [`FALLBACK_LEVEL`].

use tracing::debug;

use crate::types::{HistoricalRecord, Query, WasteLevel};

/// Level returned when no history exists for the requested menu type.
pub const FALLBACK_LEVEL: WasteLevel = WasteLevel::Medium;

/// Find the historical record closest in attendance to the query.
///
/// Returns `None` when no record shares the query's menu type.
pub fn closest<'a>(records: &'a [HistoricalRecord], query: &Query) -> Option<&'a HistoricalRecord> {
    let mut best: Option<(&HistoricalRecord, u32)> = None;

    for record in records.iter().filter(|r| r.menu_type == query.menu_type) {
        let diff = record.attendance.abs_diff(query.attendance);
        // Strict comparison keeps the earliest record on ties.
        if best.is_none_or(|(_, best_diff)| diff < best_diff) {
            best = Some((record, diff));
        }
    }

    best.map(|(record, _)| record)
}

/// Estimate the waste level for a query against the historical records.
pub fn estimate(records: &[HistoricalRecord], query: &Query) -> WasteLevel {
    match closest(records, query) {
        Some(record) => {
            debug!(
                menu_type = %query.menu_type,
                attendance = query.attendance,
                matched_attendance = record.attendance,
                diff = record.attendance.abs_diff(query.attendance),
                level = %record.waste_level,
                "closest historical match"
            );
            record.waste_level
        }
        None => {
            debug!(
                menu_type = %query.menu_type,
                "no history for menu type, using fallback level"
            );
            FALLBACK_LEVEL
        }
    }
}
