//! Property tests for the calculation engine.

use proptest::prelude::{prop_assert, prop_assert_eq, prop_assume, proptest};
use rust_decimal::Decimal;

use tax_engine::calculation::{
    SECTION_80C_LIMIT, aggregate, calculate_80c, calculate_80d, calculate_hra, compare_regimes,
    compute_tax, compute_tax_table,
};
use tax_engine::config::{RoundingMode, SlabTable};
use tax_engine::models::{AgeGroup, City, InvestmentDetails, Regime, SalaryDetails};

const TOP_FLOOR: i64 = 1_500_000;

fn rupees(value: u32) -> Decimal {
    Decimal::from(value)
}

/// Textbook progressive tax: each capped bracket taxes the slice of income
/// that falls inside it, and the top bracket taxes everything above its floor.
fn reference_tax(gross: Decimal, regime: Regime, slabs: &SlabTable) -> Decimal {
    let top_floor = slabs.top_floor();
    slabs
        .brackets()
        .iter()
        .map(|bracket| {
            let above_floor = (gross - bracket.floor).max(Decimal::ZERO);
            let slice = if bracket.floor == top_floor {
                above_floor
            } else {
                above_floor.min(slabs.width())
            };
            slice * bracket.rate_for(regime) / Decimal::ONE_HUNDRED
        })
        .sum()
}

fn salary(gross: u32, basic: u32, hra: u32) -> SalaryDetails {
    SalaryDetails {
        gross_salary: rupees(gross),
        basic_salary: rupees(basic),
        hra_component: rupees(hra),
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn prop_tax_matches_progressive_reference(
        gross in 0u32..5_000_000,
        old in proptest::bool::ANY,
    ) {
        let slabs = SlabTable::statutory();
        let regime = if old { Regime::Old } else { Regime::New };
        let gross = rupees(gross);

        prop_assert_eq!(
            compute_tax(gross, regime, &slabs).unwrap(),
            reference_tax(gross, regime, &slabs)
        );
    }

    #[test]
    fn prop_income_above_top_floor_taxed_at_thirty_percent(extra in 0u32..10_000_000) {
        let slabs = SlabTable::statutory();
        let top = Decimal::from(TOP_FLOOR);
        let gross = top + rupees(extra);
        let thirty_percent = rupees(extra) * Decimal::from(30) / Decimal::ONE_HUNDRED;

        for regime in [Regime::Old, Regime::New] {
            prop_assert_eq!(
                compute_tax(gross, regime, &slabs).unwrap(),
                compute_tax(top, regime, &slabs).unwrap() + thirty_percent
            );
        }
    }

    #[test]
    fn prop_tax_table_totals_agree_with_compute_tax(gross in 0u32..5_000_000) {
        let slabs = SlabTable::statutory();
        let gross = rupees(gross);
        let table = compute_tax_table(gross, &slabs).unwrap();

        let income: Decimal = table.rows.iter().map(|row| row.income_in_bracket).sum();
        prop_assert_eq!(income, gross);
        for regime in [Regime::Old, Regime::New] {
            prop_assert_eq!(
                table.totals.tax_for(regime),
                compute_tax(gross, regime, &slabs).unwrap()
            );
        }
    }

    #[test]
    fn prop_tax_is_monotonic_in_income(a in 0u32..5_000_000, b in 0u32..5_000_000) {
        let slabs = SlabTable::statutory();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        for regime in [Regime::Old, Regime::New] {
            prop_assert!(
                compute_tax(rupees(low), regime, &slabs).unwrap()
                    <= compute_tax(rupees(high), regime, &slabs).unwrap()
            );
        }
    }

    #[test]
    fn prop_hra_monotonic_in_rent_and_bounded(
        basic in 0u32..2_000_000,
        hra in 0u32..1_000_000,
        rent_a in 0u32..2_000_000,
        rent_b in 0u32..2_000_000,
        metro in proptest::bool::ANY,
    ) {
        let salary = salary(3_000_000, basic, hra);
        let city = if metro { City::Metro } else { City::NonMetro };
        let (low, high) = if rent_a <= rent_b { (rent_a, rent_b) } else { (rent_b, rent_a) };
        let at = |rent: u32| {
            let investment = InvestmentDetails {
                city,
                rent: rupees(rent),
                ..InvestmentDetails::default()
            };
            calculate_hra(&salary, &investment, RoundingMode::Cents, 1).unwrap().metrics
        };

        let low_metrics = at(low);
        let high_metrics = at(high);

        prop_assert!(low_metrics.current_hra_exemption <= high_metrics.current_hra_exemption);
        prop_assert!(high_metrics.current_hra_exemption <= high_metrics.factor_of_basic);
        prop_assert!(high_metrics.current_hra_exemption <= salary.hra_component);
        prop_assert!(high_metrics.current_hra_exemption >= Decimal::ZERO);
    }

    #[test]
    fn prop_80c_saturates_at_limit(pf in 0u32..400_000, other in 0u32..400_000) {
        let investment = InvestmentDetails {
            pf_80c: rupees(pf),
            other_80c: rupees(other),
            ..InvestmentDetails::default()
        };
        let metrics = calculate_80c(&investment, 1).unwrap().metrics;
        let declared = rupees(pf) + rupees(other);

        prop_assert!(metrics.current_80c_exemption <= SECTION_80C_LIMIT);
        if declared >= SECTION_80C_LIMIT {
            prop_assert_eq!(metrics.current_80c_exemption, SECTION_80C_LIMIT);
        } else {
            prop_assert_eq!(metrics.current_80c_exemption, declared);
        }
        prop_assert_eq!(metrics.optimal_other_80c_exemption, SECTION_80C_LIMIT - rupees(pf));
    }

    #[test]
    fn prop_80d_monotonic_and_flat_beyond_cap(
        a in 0u32..200_000,
        b in 0u32..200_000,
        senior in proptest::bool::ANY,
    ) {
        let age = if senior { AgeGroup::Above60 } else { AgeGroup::Below60 };
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let at = |premium: u32| {
            let investment = InvestmentDetails {
                self_80d: rupees(premium),
                self_age: age,
                parents_80d: rupees(premium),
                parents_age: age,
                ..InvestmentDetails::default()
            };
            calculate_80d(&investment, 1).metrics
        };

        let low_metrics = at(low);
        let high_metrics = at(high);

        let (low_self, high_self) = (
            low_metrics.current_self_80d_exemption,
            high_metrics.current_self_80d_exemption,
        );
        prop_assert!(low_self <= high_self);
        prop_assert!(
            low_metrics.current_parents_80d_exemption
                <= high_metrics.current_parents_80d_exemption
        );
        if rupees(low) >= low_metrics.optimal_self_80d_exemption {
            prop_assert_eq!(low_self, high_self);
        }
    }

    #[test]
    fn prop_aggregate_is_idempotent(
        gross in 0u32..5_000_000,
        basic in 0u32..3_000_000,
        hra in 0u32..1_000_000,
        rent in 0u32..2_000_000,
        pf in 0u32..300_000,
        nps2 in 0u32..300_000,
    ) {
        let salary = salary(gross, basic, hra);
        let investment = InvestmentDetails {
            rent: rupees(rent),
            pf_80c: rupees(pf),
            nps_80ccd2: rupees(nps2),
            ..InvestmentDetails::default()
        };

        let first = aggregate(&salary, &investment, RoundingMode::Cents).unwrap();
        let second = aggregate(&salary, &investment, RoundingMode::Cents).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_recommended_regime_is_never_more_expensive(
        gross in 0u32..5_000_000,
        basic in 0u32..3_000_000,
        hra in 0u32..1_000_000,
        rent in 0u32..2_000_000,
        other_80c in 0u32..300_000,
    ) {
        prop_assume!(basic <= gross);
        let salary = salary(gross, basic, hra);
        let investment = InvestmentDetails {
            rent: rupees(rent),
            other_80c: rupees(other_80c),
            ..InvestmentDetails::default()
        };
        let metrics = aggregate(&salary, &investment, RoundingMode::Cents).unwrap();

        let comparison = compare_regimes(&salary, &metrics, &SlabTable::statutory()).unwrap();
        let (chosen, other) = match comparison.recommended {
            Regime::Old => (&comparison.old_regime, &comparison.new_regime),
            Regime::New => (&comparison.new_regime, &comparison.old_regime),
        };

        prop_assert!(chosen.tax <= other.tax);
        prop_assert_eq!(comparison.saving, other.tax - chosen.tax);
        prop_assert!(comparison.old_regime.taxable_income >= Decimal::ZERO);
    }
}
