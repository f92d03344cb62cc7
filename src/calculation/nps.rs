//! National Pension System exemption calculation (Section 80CCD).
//!
//! Two independent limits apply: the taxpayer's own contribution under
//! 80CCD(1B) is capped at a fixed amount, and the employer's contribution
//! under 80CCD(2) is capped at a tenth of basic salary.

use rust_decimal::Decimal;

use crate::config::RoundingMode;
use crate::error::EngineResult;
use crate::models::{AuditStep, InvestmentDetails, NpsMetrics, SalaryDetails};

use super::round_amount;

/// The Section 80CCD(1B) limit on own NPS contributions.
pub const NPS_80CCD1B_LIMIT: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// Share of basic salary deductible as employer NPS contribution.
pub const NPS_80CCD2_BASIC_SHARE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// The result of an NPS calculation, including the metrics and audit step.
#[derive(Debug, Clone)]
pub struct NpsResult {
    /// The computed NPS metrics.
    pub metrics: NpsMetrics,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the 80CCD(1B) and 80CCD(2) exemptions.
///
/// # Errors
///
/// Propagates overflow from [`round_amount`].
///
/// # Examples
///
/// ```
/// use tax_engine::calculation::calculate_nps;
/// use tax_engine::config::RoundingMode;
/// use tax_engine::models::{InvestmentDetails, SalaryDetails};
/// use rust_decimal::Decimal;
///
/// let salary = SalaryDetails {
///     gross_salary: Decimal::from(1_000_000),
///     basic_salary: Decimal::from(500_000),
///     hra_component: Decimal::ZERO,
/// };
/// let investment = InvestmentDetails {
///     nps_80ccd2: Decimal::from(60_000),
///     ..InvestmentDetails::default()
/// };
///
/// let result = calculate_nps(&salary, &investment, RoundingMode::Cents, 1).unwrap();
/// assert_eq!(result.metrics.optimal_nps_80ccd2_exemption, Decimal::from(50_000));
/// assert_eq!(result.metrics.current_nps_80ccd2_exemption, Decimal::from(50_000));
/// ```
pub fn calculate_nps(
    salary: &SalaryDetails,
    investment: &InvestmentDetails,
    rounding: RoundingMode,
    step_number: u32,
) -> EngineResult<NpsResult> {
    let current_nps_80ccd1b_exemption = NPS_80CCD1B_LIMIT.min(investment.nps_80ccd1b);
    let optimal_nps_80ccd2_exemption =
        round_amount(NPS_80CCD2_BASIC_SHARE * salary.basic_salary, rounding)?;
    let current_nps_80ccd2_exemption = optimal_nps_80ccd2_exemption.min(investment.nps_80ccd2);

    let audit_step = AuditStep {
        step_number,
        rule_id: "nps_80ccd".to_string(),
        rule_name: "NPS Contribution Exemption".to_string(),
        section_ref: "80CCD(1B), 80CCD(2)".to_string(),
        input: serde_json::json!({
            "basic_salary": salary.basic_salary.normalize().to_string(),
            "nps_80ccd1b": investment.nps_80ccd1b.normalize().to_string(),
            "nps_80ccd2": investment.nps_80ccd2.normalize().to_string()
        }),
        output: serde_json::json!({
            "optimal_nps_80ccd1b_exemption": NPS_80CCD1B_LIMIT.to_string(),
            "current_nps_80ccd1b_exemption": current_nps_80ccd1b_exemption.normalize().to_string(),
            "optimal_nps_80ccd2_exemption": optimal_nps_80ccd2_exemption.normalize().to_string(),
            "current_nps_80ccd2_exemption": current_nps_80ccd2_exemption.normalize().to_string()
        }),
        reasoning: format!(
            "80CCD(1B): min({}, {}) = {}; 80CCD(2): min(10% of {} = {}, {}) = {}",
            NPS_80CCD1B_LIMIT,
            investment.nps_80ccd1b.normalize(),
            current_nps_80ccd1b_exemption.normalize(),
            salary.basic_salary.normalize(),
            optimal_nps_80ccd2_exemption.normalize(),
            investment.nps_80ccd2.normalize(),
            current_nps_80ccd2_exemption.normalize()
        ),
    };

    Ok(NpsResult {
        metrics: NpsMetrics {
            optimal_nps_80ccd1b_exemption: NPS_80CCD1B_LIMIT,
            current_nps_80ccd1b_exemption,
            optimal_nps_80ccd2_exemption,
            current_nps_80ccd2_exemption,
        },
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn salary(basic: &str) -> SalaryDetails {
        SalaryDetails {
            gross_salary: dec("1000000"),
            basic_salary: dec(basic),
            hra_component: dec("0"),
        }
    }

    fn investment(own: &str, employer: &str) -> InvestmentDetails {
        InvestmentDetails {
            nps_80ccd1b: dec(own),
            nps_80ccd2: dec(employer),
            ..InvestmentDetails::default()
        }
    }

    /// Scenario 5: employer contribution above 10% of basic
    #[test]
    fn test_employer_contribution_capped_at_tenth_of_basic() {
        let result = calculate_nps(
            &salary("500000"),
            &investment("0", "60000"),
            RoundingMode::Cents,
            1,
        )
        .unwrap();

        assert_eq!(result.metrics.optimal_nps_80ccd2_exemption, dec("50000"));
        assert_eq!(result.metrics.current_nps_80ccd2_exemption, dec("50000"));
    }

    #[test]
    fn test_own_contribution_capped_at_limit() {
        let result = calculate_nps(
            &salary("500000"),
            &investment("70000", "0"),
            RoundingMode::Cents,
            1,
        )
        .unwrap();

        assert_eq!(result.metrics.optimal_nps_80ccd1b_exemption, dec("50000"));
        assert_eq!(result.metrics.current_nps_80ccd1b_exemption, dec("50000"));
        assert_eq!(result.metrics.current_nps_80ccd2_exemption, dec("0"));
    }

    #[test]
    fn test_contributions_below_caps_are_claimed_in_full() {
        let result = calculate_nps(
            &salary("800000"),
            &investment("20000", "45000"),
            RoundingMode::Cents,
            1,
        )
        .unwrap();

        assert_eq!(result.metrics.current_nps_80ccd1b_exemption, dec("20000"));
        assert_eq!(result.metrics.optimal_nps_80ccd2_exemption, dec("80000"));
        assert_eq!(result.metrics.current_nps_80ccd2_exemption, dec("45000"));
    }

    #[test]
    fn test_employer_cap_is_rounded() {
        let result = calculate_nps(
            &salary("123456.78"),
            &investment("0", "0"),
            RoundingMode::Cents,
            1,
        )
        .unwrap();
        // 10% of 123456.78 = 12345.678
        assert_eq!(result.metrics.optimal_nps_80ccd2_exemption, dec("12345.68"));
    }

    #[test]
    fn test_audit_step_section_ref() {
        let result = calculate_nps(
            &salary("500000"),
            &investment("0", "60000"),
            RoundingMode::Cents,
            5,
        )
        .unwrap();
        assert_eq!(result.audit_step.step_number, 5);
        assert_eq!(result.audit_step.section_ref, "80CCD(1B), 80CCD(2)");
        assert_eq!(
            result.audit_step.output["current_nps_80ccd2_exemption"].as_str().unwrap(),
            "50000"
        );
    }

    #[test]
    fn test_legacy_rounding_overflow_is_a_calculation_error() {
        let salary = SalaryDetails {
            gross_salary: Decimal::MAX,
            basic_salary: Decimal::MAX,
            hra_component: dec("0"),
        };

        let result = calculate_nps(
            &salary,
            &investment("0", "0"),
            RoundingMode::LegacyTwentieths,
            1,
        );

        assert!(matches!(result, Err(crate::error::EngineError::CalculationError { .. })));
    }
}
