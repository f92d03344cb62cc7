//! Raw form input and its coercion into typed records.
//!
//! Presentation layers hand the engine loosely-typed values: amounts may be
//! decimal strings (with digit-grouping commas) or JSON numbers, and enum
//! fields arrive as bare string literals. The forms in this module capture
//! that shape and convert into [`SalaryDetails`] and [`InvestmentDetails`],
//! failing fast on anything the engine cannot compute with.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{AgeGroup, City, InvestmentDetails, SalaryDetails};

/// A monetary amount as supplied by a form: text or a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// A decimal string such as `"1,20,000"` or `"250000.50"`.
    Text(String),
    /// A numeric value.
    Number(Decimal),
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        AmountInput::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

/// Coerces a form amount into a non-negative decimal.
///
/// Commas and whitespace inside text are ignored. Absent or blank values,
/// non-numeric text, and negative amounts are rejected with
/// [`EngineError::InvalidInput`] naming `field`.
///
/// # Example
///
/// ```
/// use tax_engine::models::{coerce_amount, AmountInput};
/// use rust_decimal::Decimal;
///
/// let amount = coerce_amount("rent", Some(&AmountInput::from("1,20,000"))).unwrap();
/// assert_eq!(amount, Decimal::from(120_000));
///
/// assert!(coerce_amount("rent", None).is_err());
/// ```
pub fn coerce_amount(field: &str, value: Option<&AmountInput>) -> EngineResult<Decimal> {
    let amount = match value {
        None => return Err(EngineError::invalid_input(field, "is required")),
        Some(AmountInput::Number(number)) => *number,
        Some(AmountInput::Text(text)) => {
            let cleaned: String = text
                .chars()
                .filter(|c| *c != ',' && !c.is_whitespace())
                .collect();
            if cleaned.is_empty() {
                return Err(EngineError::invalid_input(field, "is required"));
            }
            Decimal::from_str(&cleaned).map_err(|_| {
                EngineError::invalid_input(field, format!("'{}' is not a number", text))
            })?
        }
    };

    if amount < Decimal::ZERO {
        return Err(EngineError::invalid_input(field, "must not be negative"));
    }

    Ok(amount)
}

fn coerce_literal<T>(
    field: &str,
    value: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
) -> EngineResult<T> {
    let value = value.ok_or_else(|| EngineError::invalid_input(field, "is required"))?;
    parse(value).ok_or_else(|| EngineError::InvalidEnumValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// The salary step of the input form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryForm {
    /// Gross annual salary.
    pub gross_salary: Option<AmountInput>,
    /// Annual basic salary.
    pub basic_salary: Option<AmountInput>,
    /// Annual HRA component.
    pub hra_component: Option<AmountInput>,
}

impl TryFrom<SalaryForm> for SalaryDetails {
    type Error = EngineError;

    fn try_from(form: SalaryForm) -> EngineResult<Self> {
        Ok(SalaryDetails {
            gross_salary: coerce_amount("gross_salary", form.gross_salary.as_ref())?,
            basic_salary: coerce_amount("basic_salary", form.basic_salary.as_ref())?,
            hra_component: coerce_amount("hra_component", form.hra_component.as_ref())?,
        })
    }
}

/// The investment step of the input form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentForm {
    /// `metro` or `non-metro`.
    pub city: Option<String>,
    /// Annual rent paid.
    pub rent: Option<AmountInput>,
    /// Provident fund contribution (80C).
    pub pf_80c: Option<AmountInput>,
    /// Other 80C investments.
    pub other_80c: Option<AmountInput>,
    /// Medical premium for self (80D).
    pub self_80d: Option<AmountInput>,
    /// Medical premium for parents (80D).
    pub parents_80d: Option<AmountInput>,
    /// `below60` or `above60`.
    pub self_age: Option<String>,
    /// `below60` or `above60`.
    pub parents_age: Option<String>,
    /// Own NPS contribution, 80CCD(1B).
    pub nps_80ccd1b: Option<AmountInput>,
    /// Employer NPS contribution, 80CCD(2).
    pub nps_80ccd2: Option<AmountInput>,
    /// Other old-regime exemptions.
    pub other_exemptions_old_regime: Option<AmountInput>,
    /// Other new-regime exemptions.
    pub other_exemptions_new_regime: Option<AmountInput>,
}

impl TryFrom<InvestmentForm> for InvestmentDetails {
    type Error = EngineError;

    fn try_from(form: InvestmentForm) -> EngineResult<Self> {
        Ok(InvestmentDetails {
            city: coerce_literal("city", form.city.as_deref(), City::from_literal)?,
            rent: coerce_amount("rent", form.rent.as_ref())?,
            pf_80c: coerce_amount("pf_80c", form.pf_80c.as_ref())?,
            other_80c: coerce_amount("other_80c", form.other_80c.as_ref())?,
            self_80d: coerce_amount("self_80d", form.self_80d.as_ref())?,
            parents_80d: coerce_amount("parents_80d", form.parents_80d.as_ref())?,
            self_age: coerce_literal("self_age", form.self_age.as_deref(), AgeGroup::from_literal)?,
            parents_age: coerce_literal(
                "parents_age",
                form.parents_age.as_deref(),
                AgeGroup::from_literal,
            )?,
            nps_80ccd1b: coerce_amount("nps_80ccd1b", form.nps_80ccd1b.as_ref())?,
            nps_80ccd2: coerce_amount("nps_80ccd2", form.nps_80ccd2.as_ref())?,
            other_exemptions_old_regime: coerce_amount(
                "other_exemptions_old_regime",
                form.other_exemptions_old_regime.as_ref(),
            )?,
            other_exemptions_new_regime: coerce_amount(
                "other_exemptions_new_regime",
                form.other_exemptions_new_regime.as_ref(),
            )?,
        })
    }
}
