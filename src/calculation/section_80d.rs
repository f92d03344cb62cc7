//! Section 80D (medical insurance) exemption calculation.

use rust_decimal::Decimal;

use crate::models::{AgeGroup, AuditStep, InvestmentDetails, Section80dMetrics};

/// 80D cap for an insured person below 60.
pub const SECTION_80D_LIMIT_BELOW_60: Decimal = Decimal::from_parts(25_000, 0, 0, false, 0);

/// 80D cap for a senior citizen.
pub const SECTION_80D_LIMIT_ABOVE_60: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// The result of a Section 80D calculation, including the metrics and audit step.
#[derive(Debug, Clone)]
pub struct Section80dResult {
    /// The computed 80D metrics.
    pub metrics: Section80dMetrics,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the 80D premium cap for an age group.
pub fn section_80d_limit(age: AgeGroup) -> Decimal {
    match age {
        AgeGroup::Below60 => SECTION_80D_LIMIT_BELOW_60,
        AgeGroup::Above60 => SECTION_80D_LIMIT_ABOVE_60,
    }
}

/// Calculates the Section 80D exemption for self and parents.
///
/// Self and parents are capped independently, each by their own age group.
pub fn calculate_80d(investment: &InvestmentDetails, step_number: u32) -> Section80dResult {
    let optimal_self_80d_exemption = section_80d_limit(investment.self_age);
    let optimal_parents_80d_exemption = section_80d_limit(investment.parents_age);
    let current_self_80d_exemption = optimal_self_80d_exemption.min(investment.self_80d);
    let current_parents_80d_exemption = optimal_parents_80d_exemption.min(investment.parents_80d);

    let audit_step = AuditStep {
        step_number,
        rule_id: "section_80d".to_string(),
        rule_name: "Section 80D Medical Insurance Exemption".to_string(),
        section_ref: "80D".to_string(),
        input: serde_json::json!({
            "self_80d": investment.self_80d.normalize().to_string(),
            "self_age": investment.self_age.as_str(),
            "parents_80d": investment.parents_80d.normalize().to_string(),
            "parents_age": investment.parents_age.as_str()
        }),
        output: serde_json::json!({
            "current_self_80d_exemption": current_self_80d_exemption.normalize().to_string(),
            "current_parents_80d_exemption": current_parents_80d_exemption.normalize().to_string(),
            "optimal_self_80d_exemption": optimal_self_80d_exemption.to_string(),
            "optimal_parents_80d_exemption": optimal_parents_80d_exemption.to_string()
        }),
        reasoning: format!(
            "self: min({}, {}) = {}; parents: min({}, {}) = {}",
            optimal_self_80d_exemption,
            investment.self_80d.normalize(),
            current_self_80d_exemption.normalize(),
            optimal_parents_80d_exemption,
            investment.parents_80d.normalize(),
            current_parents_80d_exemption.normalize()
        ),
    };

    Section80dResult {
        metrics: Section80dMetrics {
            current_self_80d_exemption,
            current_parents_80d_exemption,
            optimal_self_80d_exemption,
            optimal_parents_80d_exemption,
        },
        audit_step,
    }
}
