//! Old versus new regime comparison models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Regime;

/// Taxable income and tax under one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeOutcome {
    /// The regime this outcome is for.
    pub regime: Regime,
    /// Total deductions allowed under the regime.
    pub deductions: Decimal,
    /// Gross salary less deductions, floored at zero.
    pub taxable_income: Decimal,
    /// Slab tax on the taxable income.
    pub tax: Decimal,
}

/// Side-by-side outcome of both regimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComparison {
    /// Outcome under the old regime.
    pub old_regime: RegimeOutcome,
    /// Outcome under the new regime.
    pub new_regime: RegimeOutcome,
    /// The regime with the lower tax.
    pub recommended: Regime,
    /// How much less tax the recommended regime charges.
    pub saving: Decimal,
}
