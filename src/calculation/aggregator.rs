//! Exemption aggregation.
//!
//! Runs every section calculator over one salary and investment declaration
//! and collects their metrics, audit steps, and warnings into a single
//! [`ExemptionAssessment`].

use rust_decimal::Decimal;

use crate::config::RoundingMode;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, ExemptionAssessment, ExemptionMetrics,
    InvestmentDetails, SalaryDetails,
};

use super::{
    calculate_80c, calculate_80d, calculate_hra, calculate_nps, calculate_other_exemptions,
};

/// The flat standard deduction under Section 16(ia).
pub const STANDARD_DEDUCTION: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

fn standard_deduction_step(step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "standard_deduction".to_string(),
        rule_name: "Standard Deduction".to_string(),
        section_ref: "16(ia)".to_string(),
        input: serde_json::json!({}),
        output: serde_json::json!({
            "sec16": STANDARD_DEDUCTION.to_string()
        }),
        reasoning: format!("Flat standard deduction of {}", STANDARD_DEDUCTION),
    }
}

fn collect_warnings(salary: &SalaryDetails, metrics: &ExemptionMetrics) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if salary.basic_exceeds_gross() {
        warnings.push(AuditWarning {
            code: "BASIC_EXCEEDS_GROSS".to_string(),
            message: format!(
                "Basic salary {} exceeds gross salary {}",
                salary.basic_salary.normalize(),
                salary.gross_salary.normalize()
            ),
            severity: "medium".to_string(),
        });
    }

    if metrics.sec80c.optimal_other_80c_exemption < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "PF_EXCEEDS_80C_LIMIT".to_string(),
            message: format!(
                "Provident fund contribution {} alone exceeds the 80C limit of {}",
                metrics.sec80c.pf_80c.normalize(),
                metrics.sec80c.optimal_80c_exemption
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}

/// Computes every exemption and records how each one was reached.
///
/// Steps are numbered in the order HRA, standard deduction, 80C, 80D, NPS,
/// other exemptions.
///
/// # Errors
///
/// Returns `CalculationError` if any section's arithmetic overflows.
///
/// # Examples
///
/// ```
/// use tax_engine::calculation::assess_exemptions;
/// use tax_engine::config::RoundingMode;
/// use tax_engine::models::{InvestmentDetails, SalaryDetails};
/// use rust_decimal::Decimal;
///
/// let salary = SalaryDetails {
///     gross_salary: Decimal::from(1_200_000),
///     basic_salary: Decimal::from(600_000),
///     hra_component: Decimal::from(240_000),
/// };
///
/// let assessment =
///     assess_exemptions(&salary, &InvestmentDetails::default(), RoundingMode::Cents).unwrap();
/// assert_eq!(assessment.metrics.sec16, Decimal::from(50_000));
/// assert_eq!(assessment.audit_trace.steps.len(), 6);
/// ```
pub fn assess_exemptions(
    salary: &SalaryDetails,
    investment: &InvestmentDetails,
    rounding: RoundingMode,
) -> EngineResult<ExemptionAssessment> {
    let mut steps: Vec<AuditStep> = Vec::with_capacity(6);
    let mut step_number: u32 = 1;

    let hra = calculate_hra(salary, investment, rounding, step_number)?;
    steps.push(hra.audit_step);
    step_number += 1;

    steps.push(standard_deduction_step(step_number));
    step_number += 1;

    let sec80c = calculate_80c(investment, step_number)?;
    steps.push(sec80c.audit_step);
    step_number += 1;

    let sec80d = calculate_80d(investment, step_number);
    steps.push(sec80d.audit_step);
    step_number += 1;

    let nps = calculate_nps(salary, investment, rounding, step_number)?;
    steps.push(nps.audit_step);
    step_number += 1;

    let other = calculate_other_exemptions(investment, step_number);
    steps.push(other.audit_step);

    let metrics = ExemptionMetrics {
        hra: hra.metrics,
        sec16: STANDARD_DEDUCTION,
        sec80c: sec80c.metrics,
        sec80d: sec80d.metrics,
        nps: nps.metrics,
        other: other.metrics,
    };
    let warnings = collect_warnings(salary, &metrics);

    Ok(ExemptionAssessment {
        metrics,
        audit_trace: AuditTrace { steps, warnings },
    })
}

/// Computes every exemption for one salary and investment declaration.
///
/// This is [`assess_exemptions`] without the audit trace.
pub fn aggregate(
    salary: &SalaryDetails,
    investment: &InvestmentDetails,
    rounding: RoundingMode,
) -> EngineResult<ExemptionMetrics> {
    assess_exemptions(salary, investment, rounding).map(|assessment| assessment.metrics)
}
