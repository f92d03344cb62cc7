//! Calculation logic for the tax engine.
//!
//! This module contains the slab-wise tax computation, the per-section
//! exemption calculators (HRA, 80C, 80D, NPS, and other declared
//! exemptions), the aggregator that combines them, and the comparison of the
//! old and new regimes.

mod aggregator;
mod hra;
mod nps;
mod other_exemptions;
mod regime_comparison;
mod rounding;
mod section_80c;
mod section_80d;
mod slab_tax;

pub use aggregator::{STANDARD_DEDUCTION, aggregate, assess_exemptions};
pub use hra::{
    HRA_SECTION, HraResult, METRO_BASIC_MULTIPLIER, NON_METRO_BASIC_MULTIPLIER,
    RENT_BASIC_OFFSET, basic_multiplier, calculate_hra,
};
pub use nps::{NPS_80CCD1B_LIMIT, NPS_80CCD2_BASIC_SHARE, NpsResult, calculate_nps};
pub use other_exemptions::{OtherExemptionsResult, calculate_other_exemptions};
pub use regime_comparison::{compare_regimes, regime_deductions};
pub use rounding::round_amount;
pub use section_80c::{SECTION_80C_LIMIT, Section80cResult, calculate_80c};
pub use section_80d::{
    SECTION_80D_LIMIT_ABOVE_60, SECTION_80D_LIMIT_BELOW_60, Section80dResult, calculate_80d,
    section_80d_limit,
};
pub use slab_tax::{compute_tax, compute_tax_table};
