//! Salary breakdown model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The annual salary breakdown of a taxpayer.
///
/// Consumed by the HRA and NPS calculators. `basic_salary` is expected to be
/// no larger than `gross_salary`, but the engine does not enforce it; the
/// exemption assessment raises a warning instead.
///
/// # Example
///
/// ```
/// use tax_engine::models::SalaryDetails;
/// use rust_decimal::Decimal;
///
/// let salary = SalaryDetails {
///     gross_salary: Decimal::from(1_200_000),
///     basic_salary: Decimal::from(600_000),
///     hra_component: Decimal::from(240_000),
/// };
/// assert!(salary.basic_salary <= salary.gross_salary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryDetails {
    /// Gross annual salary.
    pub gross_salary: Decimal,
    /// Annual basic salary.
    pub basic_salary: Decimal,
    /// Annual House Rent Allowance component of the salary.
    pub hra_component: Decimal,
}

impl SalaryDetails {
    /// Returns true if the basic salary exceeds the gross salary.
    pub fn basic_exceeds_gross(&self) -> bool {
        self.basic_salary > self.gross_salary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_salary_details() {
        let json = r#"{
            "gross_salary": "1200000",
            "basic_salary": "600000",
            "hra_component": "240000"
        }"#;

        let salary: SalaryDetails = serde_json::from_str(json).unwrap();
        assert_eq!(salary.gross_salary, dec("1200000"));
        assert_eq!(salary.basic_salary, dec("600000"));
        assert_eq!(salary.hra_component, dec("240000"));
    }

    #[test]
    fn test_basic_exceeds_gross() {
        let salary = SalaryDetails {
            gross_salary: dec("500000"),
            basic_salary: dec("600000"),
            hra_component: dec("0"),
        };
        assert!(salary.basic_exceeds_gross());
    }

    #[test]
    fn test_basic_equal_to_gross_is_not_excess() {
        let salary = SalaryDetails {
            gross_salary: dec("600000"),
            basic_salary: dec("600000"),
            hra_component: dec("0"),
        };
        assert!(!salary.basic_exceeds_gross());
    }
}
