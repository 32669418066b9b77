//! Waste quantity derivation.
//!
//! Mass and percentage always come from the upper bound of the level's
//! [`WasteRange`], so the reported figure is the worst case for that level.
//! The mass is kept as `f64` and rounded only when rendered (see
//! [`format_kg`](crate::types::format_kg)), so half-cent values round on
//! their binary representation.

use crate::error::CoreResult;
use crate::estimator;
use crate::types::{HistoricalRecord, Prediction, Query, WasteLevel, WasteRange};

/// Expected food consumption per attendee, in kilograms.
pub const CONSUMPTION_KG_PER_PERSON: f64 = 0.3;

/// Quantities derived from a waste level and attendance.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    pub waste_kg: f64,
    pub waste_percentage: u32,
    pub suggestion: String,
}

/// Derive mass, percentage and suggestion for a level.
pub fn derive(level: WasteLevel, attendance: u32) -> Derived {
    let range = WasteRange::for_level(level);
    // Consumption times fraction, in this grouping.
    let consumption_kg = f64::from(attendance) * CONSUMPTION_KG_PER_PERSON;
    let waste_kg = consumption_kg * (f64::from(range.max_percent) / 100.0);

    Derived {
        waste_kg,
        waste_percentage: range.max_percent,
        suggestion: suggestion(level),
    }
}

/// Like [`derive`], but starting from a level name.
pub fn derive_named(level: &str, attendance: u32) -> CoreResult<Derived> {
    let level = level.parse::<WasteLevel>()?;
    Ok(derive(level, attendance))
}

pub fn suggestion(level: WasteLevel) -> String {
    format!("Predicted {level} waste. Adjust food preparation accordingly.")
}

/// Estimate the level for `query` and derive the full prediction.
pub fn predict(records: &[HistoricalRecord], query: &Query) -> Prediction {
    let waste_level = estimator::estimate(records, query);
    let Derived {
        waste_kg,
        waste_percentage,
        suggestion,
    } = derive(waste_level, query.attendance);

    Prediction {
        waste_level,
        waste_kg,
        waste_percentage,
        suggestion,
    }
}
