//! Core data models for the tax engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod comparison;
mod exemption;
mod input;
mod investment;
mod salary;
mod tax_table;

pub use audit::{AuditStep, AuditWarning};
pub use comparison::{RegimeComparison, RegimeOutcome};
pub use exemption::{
    AuditTrace, ExemptionAssessment, ExemptionMetrics, HraMetrics, NpsMetrics, OtherExemptions,
    Section80cMetrics, Section80dMetrics,
};
pub use input::{AmountInput, InvestmentForm, SalaryForm, coerce_amount};
pub use investment::{AgeGroup, City, InvestmentDetails};
pub use salary::SalaryDetails;
pub use tax_table::{Regime, SlabTaxRow, TaxTable, TaxTotals};
