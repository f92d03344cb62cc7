//! Request types for the tax engine API.
//!
//! This module defines the JSON request structures for the `/exemptions`,
//! `/compare`, and `/tax-table` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AmountInput, InvestmentDetails, InvestmentForm, SalaryDetails, SalaryForm, coerce_amount,
};

/// Request body for the `/exemptions` and `/compare` endpoints.
///
/// Both form steps are optional at the JSON level so that their absence can
/// be reported with a dedicated error code rather than a serde message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExemptionRequest {
    /// The salary step of the form.
    #[serde(default)]
    pub salary_details: Option<SalaryForm>,
    /// The investment step of the form.
    #[serde(default)]
    pub investment_details: Option<InvestmentForm>,
    /// Set when the taxpayer chose to skip the investment step.
    #[serde(default)]
    pub skip_investment_details: bool,
}

impl ExemptionRequest {
    /// Coerces the request into typed salary and investment records.
    ///
    /// Skipping the investment step yields [`InvestmentDetails::default`];
    /// supplied investment details always take precedence over the skip flag.
    ///
    /// # Errors
    ///
    /// Returns `MissingSalaryDetails` or `MissingInvestmentDetails` when a
    /// step is absent, or the coercion error for the first invalid field.
    pub fn into_inputs(self) -> EngineResult<(SalaryDetails, InvestmentDetails)> {
        let salary: SalaryDetails = self
            .salary_details
            .ok_or(EngineError::MissingSalaryDetails)?
            .try_into()?;

        let investment = match self.investment_details {
            Some(form) => InvestmentDetails::try_from(form)?,
            None if self.skip_investment_details => InvestmentDetails::default(),
            None => return Err(EngineError::MissingInvestmentDetails),
        };

        Ok((salary, investment))
    }
}

/// Request body for the `/tax-table` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxTableRequest {
    /// The gross income to tax.
    #[serde(default)]
    pub gross_salary: Option<AmountInput>,
}

impl TaxTableRequest {
    /// Coerces the gross salary into a non-negative decimal.
    pub fn gross_salary(&self) -> EngineResult<Decimal> {
        coerce_amount("gross_salary", self.gross_salary.as_ref())
    }
}
