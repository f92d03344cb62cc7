//! Configuration types for tax estimation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`SlabTable`] the slab tax calculator walks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Regime;

/// How intermediate HRA and NPS amounts are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Two decimal places, half away from zero.
    #[default]
    Cents,
    /// Nearest 0.05, ties upward. Matches figures produced by the earlier
    /// web calculator.
    LegacyTwentieths,
}

/// Metadata about the assessment year the configuration describes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentMetadata {
    /// Short identifier (e.g., "FY2022-23").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// The financial year the rates apply to.
    pub financial_year: String,
    /// Where the rates were taken from.
    pub source_url: String,
}

/// The `assessment.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    /// Assessment metadata.
    #[serde(flatten)]
    pub metadata: AssessmentMetadata,
    /// Rounding policy for intermediate amounts.
    #[serde(default)]
    pub rounding: RoundingMode,
}

/// A single bracket of the slab table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabBracket {
    /// The bracket floor.
    pub floor: Decimal,
    /// Old regime rate, in percent.
    pub old_rate: Decimal,
    /// New regime rate, in percent.
    pub new_rate: Decimal,
}

impl SlabBracket {
    fn new(floor: i64, old_rate: i64, new_rate: i64) -> Self {
        Self {
            floor: Decimal::from(floor),
            old_rate: Decimal::from(old_rate),
            new_rate: Decimal::from(new_rate),
        }
    }

    /// Returns the rate for `regime`, in percent.
    pub fn rate_for(&self, regime: Regime) -> Decimal {
        match regime {
            Regime::Old => self.old_rate,
            Regime::New => self.new_rate,
        }
    }
}

/// The `slabs.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SlabConfig {
    /// Width of every bracket below the top floor.
    pub slab_width: Decimal,
    /// Brackets in ascending order of floor.
    pub brackets: Vec<SlabBracket>,
}

/// A validated slab table.
///
/// Floors start at zero and step by exactly `width`; the last floor is the
/// top bracket, which has no ceiling. Rates are looked up by exact floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlabTable {
    width: Decimal,
    brackets: Vec<SlabBracket>,
}

impl SlabTable {
    /// Creates a slab table, checking the bracket layout.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSlabTable`] if the width is not positive,
    /// there are no brackets, the first floor is not zero, floors are not
    /// contiguous at `width`, or any rate is outside 0..=100.
    pub fn new(width: Decimal, brackets: Vec<SlabBracket>) -> EngineResult<Self> {
        let invalid = |message: String| EngineError::InvalidSlabTable { message };

        if width <= Decimal::ZERO {
            return Err(invalid(format!("slab width must be positive, got {}", width)));
        }

        let Some(first) = brackets.first() else {
            return Err(invalid("at least one bracket is required".to_string()));
        };
        if !first.floor.is_zero() {
            return Err(invalid(format!("first floor must be 0, got {}", first.floor)));
        }

        for pair in brackets.windows(2) {
            if pair[0].floor.checked_add(width) != Some(pair[1].floor) {
                return Err(invalid(format!(
                    "floor {} does not follow {} at width {}",
                    pair[1].floor, pair[0].floor, width
                )));
            }
        }

        let hundred = Decimal::ONE_HUNDRED;
        if let Some(bad) = brackets.iter().find(|b| {
            b.old_rate < Decimal::ZERO
                || b.new_rate < Decimal::ZERO
                || b.old_rate > hundred
                || b.new_rate > hundred
        }) {
            return Err(invalid(format!("rates at floor {} must be within 0-100", bad.floor)));
        }

        Ok(Self { width, brackets })
    }

    /// The statutory slab table: 250,000-wide brackets from 0 to a top floor
    /// of 1,500,000.
    pub fn statutory() -> Self {
        Self {
            width: Decimal::from(250_000),
            brackets: vec![
                SlabBracket::new(0, 0, 0),
                SlabBracket::new(250_000, 5, 5),
                SlabBracket::new(500_000, 20, 10),
                SlabBracket::new(750_000, 20, 15),
                SlabBracket::new(1_000_000, 30, 20),
                SlabBracket::new(1_250_000, 30, 25),
                SlabBracket::new(1_500_000, 30, 30),
            ],
        }
    }

    /// Width of every bracket below the top floor.
    pub fn width(&self) -> Decimal {
        self.width
    }

    /// All brackets in ascending order.
    pub fn brackets(&self) -> &[SlabBracket] {
        &self.brackets
    }

    /// The floor of the uncapped top bracket.
    pub fn top_floor(&self) -> Decimal {
        self.brackets
            .last()
            .map(|b| b.floor)
            .unwrap_or(Decimal::ZERO)
    }

    /// Looks up the bracket starting exactly at `floor`.
    pub fn bracket_at(&self, floor: Decimal) -> EngineResult<&SlabBracket> {
        self.brackets
            .iter()
            .find(|b| b.floor == floor)
            .ok_or(EngineError::RateNotFound { floor })
    }

    /// Looks up the `regime` rate for the bracket starting exactly at `floor`.
    pub fn rate(&self, floor: Decimal, regime: Regime) -> EngineResult<Decimal> {
        Ok(self.bracket_at(floor)?.rate_for(regime))
    }
}

impl Default for SlabTable {
    fn default() -> Self {
        Self::statutory()
    }
}

impl TryFrom<SlabConfig> for SlabTable {
    type Error = EngineError;

    fn try_from(config: SlabConfig) -> EngineResult<Self> {
        SlabTable::new(config.slab_width, config.brackets)
    }
}

/// The complete tax configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct TaxConfig {
    /// Assessment metadata.
    metadata: AssessmentMetadata,
    /// Rounding policy.
    rounding: RoundingMode,
    /// Slab table.
    slabs: SlabTable,
}

impl TaxConfig {
    /// Creates a new TaxConfig from its component parts.
    pub fn new(metadata: AssessmentMetadata, rounding: RoundingMode, slabs: SlabTable) -> Self {
        Self {
            metadata,
            rounding,
            slabs,
        }
    }

    /// Returns the assessment metadata.
    pub fn assessment(&self) -> &AssessmentMetadata {
        &self.metadata
    }

    /// Returns the rounding policy.
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Returns the slab table.
    pub fn slabs(&self) -> &SlabTable {
        &self.slabs
    }
}

impl Default for TaxConfig {
    /// The built-in FY 2022-23 configuration.
    fn default() -> Self {
        Self::new(
            AssessmentMetadata {
                code: "FY2022-23".to_string(),
                name: "Income Tax on Salary, FY 2022-23".to_string(),
                financial_year: "2022-23".to_string(),
                source_url: "https://www.incometax.gov.in/iec/foportal/".to_string(),
            },
            RoundingMode::default(),
            SlabTable::statutory(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_statutory_table_is_valid() {
        let table = SlabTable::statutory();
        let rebuilt = SlabTable::new(table.width(), table.brackets().to_vec());
        assert!(rebuilt.is_ok());
        assert_eq!(table.top_floor(), dec("1500000"));
    }

    #[test]
    fn test_statutory_rates() {
        let table = SlabTable::statutory();
        assert_eq!(table.rate(dec("500000"), Regime::Old).unwrap(), dec("20"));
        assert_eq!(table.rate(dec("500000"), Regime::New).unwrap(), dec("10"));
        assert_eq!(table.rate(dec("1250000"), Regime::New).unwrap(), dec("25"));
        assert_eq!(table.rate(dec("1500000"), Regime::Old).unwrap(), dec("30"));
    }

    #[test]
    fn test_rate_lookup_is_exact() {
        let table = SlabTable::statutory();
        match table.rate(dec("300000"), Regime::Old) {
            Err(EngineError::RateNotFound { floor }) => assert_eq!(floor, dec("300000")),
            other => panic!("Expected RateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_zero_first_floor() {
        let result = SlabTable::new(dec("100"), vec![SlabBracket::new(100, 0, 0)]);
        assert!(matches!(result, Err(EngineError::InvalidSlabTable { .. })));
    }

    #[test]
    fn test_rejects_gap_between_floors() {
        let result = SlabTable::new(
            dec("100"),
            vec![SlabBracket::new(0, 0, 0), SlabBracket::new(200, 5, 5)],
        );
        match result {
            Err(EngineError::InvalidSlabTable { message }) => assert!(message.contains("200")),
            other => panic!("Expected InvalidSlabTable, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_floors_beyond_decimal_range() {
        let result = SlabTable::new(
            Decimal::MAX,
            vec![
                SlabBracket::new(0, 0, 0),
                SlabBracket { floor: Decimal::MAX, old_rate: dec("5"), new_rate: dec("5") },
                SlabBracket { floor: Decimal::MAX, old_rate: dec("10"), new_rate: dec("10") },
            ],
        );
        assert!(matches!(result, Err(EngineError::InvalidSlabTable { .. })));
    }

    #[test]
    fn test_rejects_empty_and_zero_width() {
        assert!(SlabTable::new(dec("100"), vec![]).is_err());
        assert!(SlabTable::new(dec("0"), vec![SlabBracket::new(0, 0, 0)]).is_err());
    }

    #[test]
    fn test_rejects_rate_above_hundred() {
        let result = SlabTable::new(dec("100"), vec![SlabBracket::new(0, 101, 0)]);
        assert!(matches!(result, Err(EngineError::InvalidSlabTable { .. })));
    }

    #[test]
    fn test_rounding_mode_deserializes_snake_case() {
        let mode: RoundingMode = serde_yaml::from_str("legacy_twentieths").unwrap();
        assert_eq!(mode, RoundingMode::LegacyTwentieths);
        assert_eq!(RoundingMode::default(), RoundingMode::Cents);
    }

    #[test]
    fn test_default_config_uses_statutory_slabs() {
        let config = TaxConfig::default();
        assert_eq!(config.slabs(), &SlabTable::statutory());
        assert_eq!(config.rounding(), RoundingMode::Cents);
        assert_eq!(config.assessment().financial_year, "2022-23");
    }
}
