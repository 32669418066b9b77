//! Shared types used across wastecast crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::CoreError;

/// Three-valued waste severity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteLevel {
    Low,
    Medium,
    High,
}

impl WasteLevel {
    pub const ALL: [WasteLevel; 3] = [WasteLevel::Low, WasteLevel::Medium, WasteLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            WasteLevel::Low => "low",
            WasteLevel::Medium => "medium",
            WasteLevel::High => "high",
        }
    }
}

impl fmt::Display for WasteLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WasteLevel {
    type Err = CoreError;

    /// Exact, case-sensitive match against the lowercase names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(WasteLevel::Low),
            "medium" => Ok(WasteLevel::Medium),
            "high" => Ok(WasteLevel::High),
            other => Err(CoreError::UnknownLevel(other.to_string())),
        }
    }
}

/// One row of historical cafeteria data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub menu_type: String,
    pub attendance: u32,
    pub waste_level: WasteLevel,
}

impl HistoricalRecord {
    pub fn new(menu_type: &str, attendance: u32, waste_level: WasteLevel) -> Self {
        Self {
            menu_type: menu_type.to_string(),
            attendance,
            waste_level,
        }
    }
}

/// A single estimation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub attendance: u32,
    pub menu_type: String,
}

impl Query {
    pub fn new(attendance: u32, menu_type: &str) -> Self {
        Self {
            attendance,
            menu_type: menu_type.to_string(),
        }
    }
}

/// Percentage bounds associated with a waste level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WasteRange {
    pub min_percent: u32,
    pub max_percent: u32,
}

impl WasteRange {
    pub const fn new(min_percent: u32, max_percent: u32) -> Self {
        Self {
            min_percent,
            max_percent,
        }
    }

    pub fn for_level(level: WasteLevel) -> Self {
        match level {
            WasteLevel::Low => WasteRange::new(2, 5),
            WasteLevel::Medium => WasteRange::new(6, 15),
            WasteLevel::High => WasteRange::new(16, 30),
        }
    }

    /// Look up the range for a level name. Fails on anything outside the
    /// three known levels.
    pub fn lookup(level: &str) -> Result<Self, CoreError> {
        level.parse::<WasteLevel>().map(Self::for_level)
    }
}

/// Response payload for one estimate. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub waste_level: WasteLevel,
    #[serde(serialize_with = "serialize_kg")]
    pub waste_kg: f64,
    pub waste_percentage: u32,
    pub suggestion: String,
}

/// Render a mass as a decimal string with exactly two fraction digits.
pub fn format_kg(kg: f64) -> String {
    format!("{kg:.2}")
}

fn serialize_kg<S: Serializer>(kg: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_kg(*kg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_exact_lowercase_only() {
        assert_eq!("high".parse::<WasteLevel>().unwrap(), WasteLevel::High);
        assert!(matches!(
            "High".parse::<WasteLevel>(),
            Err(CoreError::UnknownLevel(s)) if s == "High"
        ));
        assert!("extreme".parse::<WasteLevel>().is_err());
    }

    #[test]
    fn range_table() {
        assert_eq!(WasteRange::for_level(WasteLevel::Low), WasteRange::new(2, 5));
        assert_eq!(WasteRange::for_level(WasteLevel::Medium), WasteRange::new(6, 15));
        assert_eq!(WasteRange::for_level(WasteLevel::High), WasteRange::new(16, 30));
        assert!(WasteRange::lookup("none").is_err());
    }

    #[test]
    fn prediction_serializes_kg_as_two_digit_string() {
        let p = Prediction {
            waste_level: WasteLevel::Low,
            waste_kg: 1.5,
            waste_percentage: 5,
            suggestion: "x".to_string(),
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["waste_level"], "low");
        assert_eq!(json["waste_kg"], "1.50");
        assert_eq!(json["waste_percentage"], 5);
    }
}
