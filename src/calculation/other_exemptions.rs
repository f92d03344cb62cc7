//! Passthrough of other declared exemptions.

use crate::models::{AuditStep, InvestmentDetails, OtherExemptions};

/// The result of the passthrough, including the metrics and audit step.
#[derive(Debug, Clone)]
pub struct OtherExemptionsResult {
    /// The declared amounts, unchanged.
    pub metrics: OtherExemptions,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Copies the old and new regime "other" exemptions through without caps.
pub fn calculate_other_exemptions(
    investment: &InvestmentDetails,
    step_number: u32,
) -> OtherExemptionsResult {
    let old_regime = investment.other_exemptions_old_regime;
    let new_regime = investment.other_exemptions_new_regime;

    let audit_step = AuditStep {
        step_number,
        rule_id: "other_exemptions".to_string(),
        rule_name: "Other Declared Exemptions".to_string(),
        section_ref: "Other".to_string(),
        input: serde_json::json!({
            "other_exemptions_old_regime": old_regime.normalize().to_string(),
            "other_exemptions_new_regime": new_regime.normalize().to_string()
        }),
        output: serde_json::json!({
            "other_exemptions_old_regime": old_regime.normalize().to_string(),
            "other_exemptions_new_regime": new_regime.normalize().to_string()
        }),
        reasoning: format!(
            "Declared amounts applied as-is: old regime {}, new regime {}",
            old_regime.normalize(),
            new_regime.normalize()
        ),
    };

    OtherExemptionsResult {
        metrics: OtherExemptions {
            other_exemptions_old_regime: old_regime,
            other_exemptions_new_regime: new_regime,
        },
        audit_step,
    }
}
