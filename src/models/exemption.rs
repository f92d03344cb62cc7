//! Exemption metrics produced by the exemption calculators.
//!
//! Each section has its own record carrying both the amount the taxpayer can
//! claim with their current declarations ("current") and the statutory
//! maximum reachable with better-planned declarations ("optimal").

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AuditStep, AuditWarning};

/// House Rent Allowance exemption metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HraMetrics {
    /// HRA component of the salary.
    pub hra_component: Decimal,
    /// Declared annual rent.
    pub current_rent: Decimal,
    /// Declared rent in excess of 10% of basic, floored at zero.
    pub current_rent_less_basic: Decimal,
    /// The rent at which the HRA exemption is maximised.
    pub optimal_rent: Decimal,
    /// Optimal rent in excess of 10% of basic, floored at zero.
    pub optimal_rent_less_basic: Decimal,
    /// 0.5 for metro cities, 0.4 otherwise.
    pub basic_multiplier: Decimal,
    /// `basic_multiplier` applied to basic salary.
    pub factor_of_basic: Decimal,
    /// Exemption for the declared rent.
    pub current_hra_exemption: Decimal,
    /// Exemption at the optimal rent.
    pub optimal_hra_exemption: Decimal,
}

/// Section 80C exemption metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section80cMetrics {
    /// Declared provident fund contribution.
    pub pf_80c: Decimal,
    /// Declared other 80C investments.
    pub other_80c: Decimal,
    /// Claimable 80C amount, capped at the statutory limit.
    pub current_80c_exemption: Decimal,
    /// The statutory 80C limit.
    pub optimal_80c_exemption: Decimal,
    /// Room left for other 80C investments after PF. Negative when PF alone
    /// exceeds the limit.
    pub optimal_other_80c_exemption: Decimal,
}

/// Section 80D exemption metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section80dMetrics {
    /// Claimable premium for self.
    pub current_self_80d_exemption: Decimal,
    /// Claimable premium for parents.
    pub current_parents_80d_exemption: Decimal,
    /// Cap for self, by age group.
    pub optimal_self_80d_exemption: Decimal,
    /// Cap for parents, by age group.
    pub optimal_parents_80d_exemption: Decimal,
}

/// NPS (Section 80CCD) exemption metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpsMetrics {
    /// The 80CCD(1B) limit.
    pub optimal_nps_80ccd1b_exemption: Decimal,
    /// Claimable own contribution.
    pub current_nps_80ccd1b_exemption: Decimal,
    /// The 80CCD(2) limit (10% of basic).
    pub optimal_nps_80ccd2_exemption: Decimal,
    /// Claimable employer contribution.
    pub current_nps_80ccd2_exemption: Decimal,
}

/// User-declared exemptions passed through without caps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherExemptions {
    /// Other exemptions under the old regime.
    pub other_exemptions_old_regime: Decimal,
    /// Other exemptions under the new regime.
    pub other_exemptions_new_regime: Decimal,
}

/// The consolidated exemption metrics for one calculation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionMetrics {
    /// HRA, Section 10(13A).
    pub hra: HraMetrics,
    /// Standard deduction, Section 16(ia).
    pub sec16: Decimal,
    /// Section 80C.
    pub sec80c: Section80cMetrics,
    /// Section 80D.
    pub sec80d: Section80dMetrics,
    /// Section 80CCD(1B) and 80CCD(2).
    pub nps: NpsMetrics,
    /// Other declared exemptions.
    pub other: OtherExemptions,
}

/// The trace of calculator decisions behind an [`ExemptionMetrics`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// Exemption metrics together with the audit trace that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionAssessment {
    /// The computed metrics.
    pub metrics: ExemptionMetrics,
    /// The decisions made while computing them.
    pub audit_trace: AuditTrace,
}
