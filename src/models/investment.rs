//! Investment and exemption declarations.
//!
//! This module defines the [`InvestmentDetails`] record together with the
//! [`City`] and [`AgeGroup`] classifications that drive the HRA multiplier
//! and the Section 80D caps.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// City classification used by the HRA exemption rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum City {
    /// A metro city (50% of basic salary is exempt-eligible).
    #[serde(rename = "metro")]
    Metro,
    /// Any other city (40% of basic salary is exempt-eligible).
    #[default]
    #[serde(rename = "non-metro")]
    NonMetro,
}

impl City {
    /// Parses the literal used by input forms.
    ///
    /// Returns `None` for anything other than `metro` or `non-metro`.
    pub fn from_literal(value: &str) -> Option<City> {
        match value {
            "metro" => Some(City::Metro),
            "non-metro" => Some(City::NonMetro),
            _ => None,
        }
    }

    /// Returns the form literal for this city type.
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Metro => "metro",
            City::NonMetro => "non-metro",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age bracket of the insured person for Section 80D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Younger than 60.
    #[default]
    #[serde(rename = "below60")]
    Below60,
    /// 60 or older (senior citizen).
    #[serde(rename = "above60")]
    Above60,
}

impl AgeGroup {
    /// Parses the literal used by input forms.
    ///
    /// Returns `None` for anything other than `below60` or `above60`.
    pub fn from_literal(value: &str) -> Option<AgeGroup> {
        match value {
            "below60" => Some(AgeGroup::Below60),
            "above60" => Some(AgeGroup::Above60),
            _ => None,
        }
    }

    /// Returns the form literal for this age group.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Below60 => "below60",
            AgeGroup::Above60 => "above60",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The investments and exemption claims declared by a taxpayer.
///
/// The [`Default`] instance has every amount at zero, a non-metro city, and
/// both age groups below 60. Callers use it when the taxpayer skips the
/// investment declaration step.
///
/// # Example
///
/// ```
/// use tax_engine::models::{AgeGroup, City, InvestmentDetails};
/// use rust_decimal::Decimal;
///
/// let skipped = InvestmentDetails::default();
/// assert_eq!(skipped.city, City::NonMetro);
/// assert_eq!(skipped.self_age, AgeGroup::Below60);
/// assert_eq!(skipped.rent, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvestmentDetails {
    /// City classification of the rented accommodation.
    pub city: City,
    /// Annual rent paid.
    pub rent: Decimal,
    /// Employee's share of provident fund contributions (80C).
    pub pf_80c: Decimal,
    /// All other 80C investments.
    pub other_80c: Decimal,
    /// Medical insurance premium paid for self and family (80D).
    pub self_80d: Decimal,
    /// Medical insurance premium paid for parents (80D).
    pub parents_80d: Decimal,
    /// Age group of the taxpayer.
    pub self_age: AgeGroup,
    /// Age group of the taxpayer's parents.
    pub parents_age: AgeGroup,
    /// Own NPS contribution under 80CCD(1B).
    pub nps_80ccd1b: Decimal,
    /// Employer NPS contribution under 80CCD(2).
    pub nps_80ccd2: Decimal,
    /// Other exemptions claimable under the old regime.
    pub other_exemptions_old_regime: Decimal,
    /// Other exemptions claimable under the new regime.
    pub other_exemptions_new_regime: Decimal,
}
