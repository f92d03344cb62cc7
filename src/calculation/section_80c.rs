//! Section 80C exemption calculation.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, InvestmentDetails, Section80cMetrics};

/// The Section 80C deduction limit.
pub const SECTION_80C_LIMIT: Decimal = Decimal::from_parts(150_000, 0, 0, false, 0);

/// The result of a Section 80C calculation, including the metrics and audit step.
#[derive(Debug, Clone)]
pub struct Section80cResult {
    /// The computed 80C metrics.
    pub metrics: Section80cMetrics,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the Section 80C exemption.
///
/// PF and other 80C investments are added and capped at the limit. The room
/// left for other investments is the limit less PF, and is deliberately not
/// clamped: a negative value tells the caller PF alone already exceeds it.
///
/// # Errors
///
/// Returns `CalculationError` if the declared total overflows.
///
/// # Examples
///
/// ```
/// use tax_engine::calculation::calculate_80c;
/// use tax_engine::models::InvestmentDetails;
/// use rust_decimal::Decimal;
///
/// let investment = InvestmentDetails {
///     pf_80c: Decimal::from(80_000),
///     other_80c: Decimal::from(100_000),
///     ..InvestmentDetails::default()
/// };
///
/// let result = calculate_80c(&investment, 1).unwrap();
/// assert_eq!(result.metrics.current_80c_exemption, Decimal::from(150_000));
/// assert_eq!(result.metrics.optimal_other_80c_exemption, Decimal::from(70_000));
/// ```
pub fn calculate_80c(
    investment: &InvestmentDetails,
    step_number: u32,
) -> EngineResult<Section80cResult> {
    let pf_80c = investment.pf_80c;
    let other_80c = investment.other_80c;
    let declared = pf_80c
        .checked_add(other_80c)
        .ok_or_else(|| EngineError::overflow("80C declaration total"))?;
    let current_80c_exemption = SECTION_80C_LIMIT.min(declared);
    let optimal_other_80c_exemption = SECTION_80C_LIMIT - pf_80c;

    let audit_step = AuditStep {
        step_number,
        rule_id: "section_80c".to_string(),
        rule_name: "Section 80C Exemption".to_string(),
        section_ref: "80C".to_string(),
        input: serde_json::json!({
            "pf_80c": pf_80c.normalize().to_string(),
            "other_80c": other_80c.normalize().to_string()
        }),
        output: serde_json::json!({
            "current_80c_exemption": current_80c_exemption.normalize().to_string(),
            "optimal_80c_exemption": SECTION_80C_LIMIT.to_string(),
            "optimal_other_80c_exemption": optimal_other_80c_exemption.normalize().to_string(),
            "capped": declared > SECTION_80C_LIMIT
        }),
        reasoning: format!(
            "min({}, {} + {}) = {}",
            SECTION_80C_LIMIT,
            pf_80c.normalize(),
            other_80c.normalize(),
            current_80c_exemption.normalize()
        ),
    };

    Ok(Section80cResult {
        metrics: Section80cMetrics {
            pf_80c,
            other_80c,
            current_80c_exemption,
            optimal_80c_exemption: SECTION_80C_LIMIT,
            optimal_other_80c_exemption,
        },
        audit_step,
    })
}
