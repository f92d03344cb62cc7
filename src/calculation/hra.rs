//! House Rent Allowance exemption calculation.
//!
//! This module applies the Section 10(13A) minimum-of-three rule to both the
//! declared rent and a suggested optimal rent.

use rust_decimal::Decimal;

use crate::config::RoundingMode;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, City, HraMetrics, InvestmentDetails, SalaryDetails};

use super::round_amount;

/// Section reference for the HRA exemption.
pub const HRA_SECTION: &str = "10(13A)";

/// Share of basic salary eligible in a metro city.
pub const METRO_BASIC_MULTIPLIER: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Share of basic salary eligible outside metro cities.
pub const NON_METRO_BASIC_MULTIPLIER: Decimal = Decimal::from_parts(4, 0, 0, false, 1);

/// Share of basic salary that rent must exceed before it counts.
pub const RENT_BASIC_OFFSET: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// The result of an HRA calculation, including the metrics and audit step.
#[derive(Debug, Clone)]
pub struct HraResult {
    /// The computed HRA metrics.
    pub metrics: HraMetrics,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the basic salary multiplier for a city classification.
pub fn basic_multiplier(city: City) -> Decimal {
    match city {
        City::Metro => METRO_BASIC_MULTIPLIER,
        City::NonMetro => NON_METRO_BASIC_MULTIPLIER,
    }
}

/// Calculates the HRA exemption for the declared rent and for the optimal rent.
///
/// The exemption is the least of:
/// - the HRA component of the salary,
/// - 50% (metro) or 40% (non-metro) of basic salary,
/// - rent paid in excess of 10% of basic salary.
///
/// The optimal rent is `min(50% of basic, HRA + 10% of basic)` for every
/// city type, and the optimal exemption applies the same three-way minimum
/// to it.
///
/// # Errors
///
/// Returns `CalculationError` if an intermediate amount overflows.
///
/// # Examples
///
/// ```
/// use tax_engine::calculation::calculate_hra;
/// use tax_engine::config::RoundingMode;
/// use tax_engine::models::{City, InvestmentDetails, SalaryDetails};
/// use rust_decimal::Decimal;
///
/// let salary = SalaryDetails {
///     gross_salary: Decimal::from(1_200_000),
///     basic_salary: Decimal::from(600_000),
///     hra_component: Decimal::from(240_000),
/// };
/// let investment = InvestmentDetails {
///     city: City::NonMetro,
///     rent: Decimal::from(300_000),
///     ..InvestmentDetails::default()
/// };
///
/// let result = calculate_hra(&salary, &investment, RoundingMode::Cents, 1).unwrap();
/// assert_eq!(result.metrics.current_hra_exemption, Decimal::from(240_000));
/// ```
pub fn calculate_hra(
    salary: &SalaryDetails,
    investment: &InvestmentDetails,
    rounding: RoundingMode,
    step_number: u32,
) -> EngineResult<HraResult> {
    let basic = salary.basic_salary;
    let hra_component = salary.hra_component;
    let rent = investment.rent;
    let rent_offset = RENT_BASIC_OFFSET * basic;

    let multiplier = basic_multiplier(investment.city);
    let factor_of_basic = round_amount(multiplier * basic, rounding)?;
    let current_rent_less_basic = round_amount(rent - rent_offset, rounding)?.max(Decimal::ZERO);
    let hra_plus_offset = hra_component
        .checked_add(rent_offset)
        .ok_or_else(|| EngineError::overflow("HRA plus 10% of basic"))?;
    let optimal_rent = (METRO_BASIC_MULTIPLIER * basic).min(hra_plus_offset);
    let optimal_rent_less_basic =
        round_amount(optimal_rent - rent_offset, rounding)?.max(Decimal::ZERO);

    let current_hra_exemption = current_rent_less_basic
        .min(factor_of_basic)
        .min(hra_component);
    let optimal_hra_exemption = optimal_rent_less_basic
        .min(factor_of_basic)
        .min(hra_component);

    let metrics = HraMetrics {
        hra_component,
        current_rent: rent,
        current_rent_less_basic,
        optimal_rent,
        optimal_rent_less_basic,
        basic_multiplier: multiplier,
        factor_of_basic,
        current_hra_exemption,
        optimal_hra_exemption,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "hra_exemption".to_string(),
        rule_name: "House Rent Allowance Exemption".to_string(),
        section_ref: HRA_SECTION.to_string(),
        input: serde_json::json!({
            "basic_salary": basic.normalize().to_string(),
            "hra_component": hra_component.normalize().to_string(),
            "rent": rent.normalize().to_string(),
            "city": investment.city.as_str()
        }),
        output: serde_json::json!({
            "basic_multiplier": multiplier.normalize().to_string(),
            "factor_of_basic": factor_of_basic.normalize().to_string(),
            "current_rent_less_basic": current_rent_less_basic.normalize().to_string(),
            "optimal_rent": optimal_rent.normalize().to_string(),
            "current_hra_exemption": current_hra_exemption.normalize().to_string(),
            "optimal_hra_exemption": optimal_hra_exemption.normalize().to_string()
        }),
        reasoning: format!(
            "min(HRA {}, {}% of basic {}, rent less 10% of basic {}) = {}",
            hra_component.normalize(),
            (multiplier * Decimal::ONE_HUNDRED).normalize(),
            factor_of_basic.normalize(),
            current_rent_less_basic.normalize(),
            current_hra_exemption.normalize()
        ),
    };

    Ok(HraResult {
        metrics,
        audit_step,
    })
}
