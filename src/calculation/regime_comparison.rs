//! Old versus new regime comparison.
//!
//! The old regime allows every exemption the aggregator computes, including
//! the standard deduction. The new regime allows only the employer NPS
//! contribution and the declared new-regime exemptions.

use rust_decimal::Decimal;

use crate::config::SlabTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{ExemptionMetrics, Regime, RegimeComparison, RegimeOutcome, SalaryDetails};

use super::compute_tax;

/// Sums the deductions `metrics` allows under `regime`.
///
/// # Errors
///
/// Returns `CalculationError` if the sum overflows.
pub fn regime_deductions(metrics: &ExemptionMetrics, regime: Regime) -> EngineResult<Decimal> {
    let allowed = match regime {
        Regime::Old => vec![
            metrics.hra.current_hra_exemption,
            metrics.sec16,
            metrics.sec80c.current_80c_exemption,
            metrics.sec80d.current_self_80d_exemption,
            metrics.sec80d.current_parents_80d_exemption,
            metrics.nps.current_nps_80ccd1b_exemption,
            metrics.nps.current_nps_80ccd2_exemption,
            metrics.other.other_exemptions_old_regime,
        ],
        Regime::New => vec![
            metrics.nps.current_nps_80ccd2_exemption,
            metrics.other.other_exemptions_new_regime,
        ],
    };

    allowed
        .into_iter()
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .ok_or_else(|| EngineError::overflow("regime deductions"))
}

fn outcome(
    salary: &SalaryDetails,
    metrics: &ExemptionMetrics,
    regime: Regime,
    slabs: &SlabTable,
) -> EngineResult<RegimeOutcome> {
    let deductions = regime_deductions(metrics, regime)?;
    let taxable_income = (salary.gross_salary - deductions).max(Decimal::ZERO);
    let tax = compute_tax(taxable_income, regime, slabs)?;

    Ok(RegimeOutcome {
        regime,
        deductions,
        taxable_income,
        tax,
    })
}

/// Computes the tax under both regimes and recommends the cheaper one.
///
/// Ties go to the new regime.
///
/// # Errors
///
/// Propagates slab lookup and overflow failures from [`regime_deductions`]
/// and [`compute_tax`].
pub fn compare_regimes(
    salary: &SalaryDetails,
    metrics: &ExemptionMetrics,
    slabs: &SlabTable,
) -> EngineResult<RegimeComparison> {
    let old_regime = outcome(salary, metrics, Regime::Old, slabs)?;
    let new_regime = outcome(salary, metrics, Regime::New, slabs)?;

    let recommended = if old_regime.tax < new_regime.tax {
        Regime::Old
    } else {
        Regime::New
    };
    let saving = (old_regime.tax - new_regime.tax).abs();

    Ok(RegimeComparison {
        old_regime,
        new_regime,
        recommended,
        saving,
    })
}
