//! Slab-wise tax table models.
//!
//! A [`TaxTable`] is the ordered list of brackets a gross income passes
//! through, each row carrying the old and new regime rate and tax, together
//! with the totals a presentation layer shows in its summary line.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The two alternative statutory tax regimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// The old regime, which allows the full set of exemptions.
    Old,
    /// The new regime, with lower rates and few exemptions.
    New,
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::Old => f.write_str("old"),
            Regime::New => f.write_str("new"),
        }
    }
}

/// One bracket of a slab tax computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabTaxRow {
    /// The bracket floor.
    pub bracket_start: Decimal,
    /// The bracket ceiling; for the uncapped top bracket, the gross income.
    pub bracket_end: Decimal,
    /// The part of the income taxed in this bracket.
    pub income_in_bracket: Decimal,
    /// Old regime rate, in percent.
    pub old_regime_rate: Decimal,
    /// Old regime tax on `income_in_bracket`.
    pub old_regime_tax: Decimal,
    /// New regime rate, in percent.
    pub new_regime_rate: Decimal,
    /// New regime tax on `income_in_bracket`.
    pub new_regime_tax: Decimal,
}

impl SlabTaxRow {
    /// Returns the tax for this bracket under `regime`.
    pub fn tax_for(&self, regime: Regime) -> Decimal {
        match regime {
            Regime::Old => self.old_regime_tax,
            Regime::New => self.new_regime_tax,
        }
    }
}

/// Column totals of a tax table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTotals {
    /// Sum of `income_in_bracket`.
    pub total_income: Decimal,
    /// Sum of old regime tax.
    pub total_old_regime_tax: Decimal,
    /// Sum of new regime tax.
    pub total_new_regime_tax: Decimal,
}

impl TaxTotals {
    /// Returns the total tax under `regime`.
    pub fn tax_for(&self, regime: Regime) -> Decimal {
        match regime {
            Regime::Old => self.total_old_regime_tax,
            Regime::New => self.total_new_regime_tax,
        }
    }
}

/// A complete slab-wise tax breakdown for both regimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTable {
    /// Brackets in ascending order.
    pub rows: Vec<SlabTaxRow>,
    /// Totals over `rows`.
    pub totals: TaxTotals,
}

impl TaxTable {
    /// Builds a table from its rows, summing the totals.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if a column total overflows.
    pub fn from_rows(rows: Vec<SlabTaxRow>) -> EngineResult<Self> {
        let sum = |column: fn(&SlabTaxRow) -> Decimal, name: &str| {
            rows.iter()
                .try_fold(Decimal::ZERO, |total, row| total.checked_add(column(row)))
                .ok_or_else(|| EngineError::overflow(name))
        };

        let totals = TaxTotals {
            total_income: sum(|row| row.income_in_bracket, "total income")?,
            total_old_regime_tax: sum(|row| row.old_regime_tax, "old regime tax total")?,
            total_new_regime_tax: sum(|row| row.new_regime_tax, "new regime tax total")?,
        };

        Ok(TaxTable { rows, totals })
    }
}
