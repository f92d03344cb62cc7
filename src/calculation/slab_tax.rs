//! Slab-wise income tax calculation.
//!
//! Income is walked in fixed-width brackets from a floor of zero. Each full
//! bracket is taxed at its floor's rate; the walk stops at the first bracket
//! that holds the rest of the income, or at the table's top floor, and that
//! remainder is taxed once at the floor it stopped on. Everything above the
//! top floor therefore shares the top rate.

use rust_decimal::Decimal;

use crate::config::SlabTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{Regime, SlabTaxRow, TaxTable};

/// A bracket the income passes through: its floor and the income taxed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BracketShare {
    floor: Decimal,
    income: Decimal,
}

fn walk_brackets(gross_income: Decimal, slabs: &SlabTable) -> EngineResult<Vec<BracketShare>> {
    if gross_income < Decimal::ZERO {
        return Err(EngineError::invalid_input("gross_income", "must not be negative"));
    }

    let width = slabs.width();
    let top_floor = slabs.top_floor();
    let mut floor = Decimal::ZERO;
    let mut shares = Vec::new();

    loop {
        let remaining = gross_income - floor;
        if floor == top_floor || remaining <= width {
            shares.push(BracketShare {
                floor,
                income: remaining,
            });
            break;
        }
        shares.push(BracketShare {
            floor,
            income: width,
        });
        floor += width;
    }

    Ok(shares)
}

/// Rates are at most 100, so scaling by the fractional rate keeps the tax
/// within the income's own range.
fn tax_on(income: Decimal, rate: Decimal) -> EngineResult<Decimal> {
    income
        .checked_mul(rate / Decimal::ONE_HUNDRED)
        .ok_or_else(|| EngineError::overflow("slab tax"))
}

/// Computes the total slab tax on `gross_income` under `regime`.
///
/// # Errors
///
/// Returns `InvalidInput` for a negative income, `RateNotFound` if the walk
/// reaches a floor the slab table does not define, or `CalculationError` if
/// the tax cannot be represented.
///
/// # Examples
///
/// ```
/// use tax_engine::calculation::compute_tax;
/// use tax_engine::config::SlabTable;
/// use tax_engine::models::Regime;
/// use rust_decimal::Decimal;
///
/// let slabs = SlabTable::statutory();
/// let tax = compute_tax(Decimal::from(1_200_000), Regime::Old, &slabs).unwrap();
/// assert_eq!(tax, Decimal::from(172_500));
/// ```
pub fn compute_tax(
    gross_income: Decimal,
    regime: Regime,
    slabs: &SlabTable,
) -> EngineResult<Decimal> {
    walk_brackets(gross_income, slabs)?
        .into_iter()
        .try_fold(Decimal::ZERO, |total, share| -> EngineResult<Decimal> {
            let rate = slabs.rate(share.floor, regime)?;
            total
                .checked_add(tax_on(share.income, rate)?)
                .ok_or_else(|| EngineError::overflow("slab tax total"))
        })
}

/// Computes the slab-wise tax table for both regimes in one pass.
///
/// Each row's `bracket_end` is the bracket ceiling (`floor + width`); the
/// uncapped top bracket ends at the gross income itself.
///
/// # Examples
///
/// ```
/// use tax_engine::calculation::compute_tax_table;
/// use tax_engine::config::SlabTable;
/// use rust_decimal::Decimal;
///
/// let table = compute_tax_table(Decimal::from(600_000), &SlabTable::statutory()).unwrap();
/// assert_eq!(table.rows.len(), 3);
/// assert_eq!(table.totals.total_income, Decimal::from(600_000));
/// assert_eq!(table.totals.total_old_regime_tax, Decimal::from(32_500));
/// assert_eq!(table.totals.total_new_regime_tax, Decimal::from(22_500));
/// ```
pub fn compute_tax_table(gross_income: Decimal, slabs: &SlabTable) -> EngineResult<TaxTable> {
    let top_floor = slabs.top_floor();

    let rows = walk_brackets(gross_income, slabs)?
        .into_iter()
        .map(|share| -> EngineResult<SlabTaxRow> {
            let bracket = slabs.bracket_at(share.floor)?;
            let bracket_end = if share.floor == top_floor {
                gross_income
            } else {
                share.floor + slabs.width()
            };

            Ok(SlabTaxRow {
                bracket_start: share.floor,
                bracket_end,
                income_in_bracket: share.income,
                old_regime_rate: bracket.old_rate,
                old_regime_tax: tax_on(share.income, bracket.old_rate)?,
                new_regime_rate: bracket.new_rate,
                new_regime_tax: tax_on(share.income, bracket.new_rate)?,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    TaxTable::from_rows(rows)
}
