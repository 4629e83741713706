use crate::parser::match_dimen;
use rust_decimal::{Decimal, RoundingStrategy};

/// Reference resolution: 1in = 7.2em.
pub const EM_PER_INCH: Decimal = Decimal::from_parts(72, 0, 0, false, 1);

/// Reference pixel density.
pub const PX_PER_INCH: Decimal = Decimal::from_parts(72, 0, 0, false, 0);

/// Magnitudes below this render as zero.
const ZERO_THRESHOLD: Decimal = Decimal::from_parts(6, 0, 0, false, 4);

const EM_DECIMALS: u32 = 3;

/// Convert an exact dimension literal to em.
///
/// Anything that does not parse as a dimension (including an unknown unit)
/// converts to zero rather than failing. So does a magnitude too large to
/// scale.
pub fn dimen2em(text: &str) -> Decimal {
    match match_dimen(text, false) {
        Some(m) => match m.magnitude() {
            Some(magnitude) => m.unit.to_em(magnitude).unwrap_or(Decimal::ZERO),
            None => Decimal::ZERO,
        },
        None => Decimal::ZERO,
    }
}

/// Render an em magnitude with at most three decimals, e.g. `1.25em`.
pub fn format_em(magnitude: Decimal) -> String {
    format!("{}em", em_numeral(magnitude))
}

/// The numeric part of [`format_em`].
pub(crate) fn em_numeral(magnitude: Decimal) -> String {
    if magnitude.abs() < ZERO_THRESHOLD {
        return "0".to_string();
    }
    magnitude
        .round_dp_with_strategy(EM_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}
