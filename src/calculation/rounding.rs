//! Rounding of intermediate exemption amounts.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::RoundingMode;
use crate::error::{EngineError, EngineResult};

/// Granularity divisor for [`RoundingMode::LegacyTwentieths`].
const LEGACY_SCALE: i64 = 20;

/// Rounds an amount according to `mode`.
///
/// `Cents` rounds to two decimal places with midpoints away from zero.
/// `LegacyTwentieths` rounds to the nearest 0.05 with midpoints toward
/// positive infinity, i.e. `floor(x * 20 + 0.5) / 20`. The earlier
/// calculator added a machine-epsilon nudge to `x` before scaling to absorb
/// binary floating point error; exact decimal arithmetic has no such error,
/// so the nudge is left out and midpoints are hit exactly.
///
/// # Errors
///
/// Returns `CalculationError` if scaling the amount overflows.
///
/// # Examples
///
/// ```
/// use tax_engine::calculation::round_amount;
/// use tax_engine::config::RoundingMode;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let x = Decimal::from_str("1234.567").unwrap();
/// assert_eq!(
///     round_amount(x, RoundingMode::Cents).unwrap(),
///     Decimal::from_str("1234.57").unwrap()
/// );
/// assert_eq!(
///     round_amount(x, RoundingMode::LegacyTwentieths).unwrap(),
///     Decimal::from_str("1234.55").unwrap()
/// );
/// ```
pub fn round_amount(value: Decimal, mode: RoundingMode) -> EngineResult<Decimal> {
    match mode {
        RoundingMode::Cents => {
            Ok(value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        }
        RoundingMode::LegacyTwentieths => {
            let scale = Decimal::from(LEGACY_SCALE);
            let shifted = value
                .checked_mul(scale)
                .and_then(|scaled| scaled.checked_add(Decimal::new(5, 1)))
                .ok_or_else(|| EngineError::overflow("legacy rounding"))?;
            Ok(shifted.floor() / scale)
        }
    }
}
