use crate::em::{EM_PER_INCH, PX_PER_INCH};
use crate::error::{Error, Result};
use phf::phf_map;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Length units accepted in dimension literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    Em,
    Ex,
    Pt,
    Pc,
    Px,
    In,
    Cm,
    Mm,
    /// Math unit, 1/18 em.
    Mu,
}

/// Unit tokens as they appear after the numeral. Always two ASCII letters.
static UNITS_BY_TOKEN: phf::Map<&'static str, Unit> = phf_map! {
    "em" => Unit::Em,
    "ex" => Unit::Ex,
    "pt" => Unit::Pt,
    "pc" => Unit::Pc,
    "px" => Unit::Px,
    "in" => Unit::In,
    "cm" => Unit::Cm,
    "mm" => Unit::Mm,
    "mu" => Unit::Mu,
};

impl Unit {
    pub const ALL: [Unit; 9] = [
        Unit::Em,
        Unit::Ex,
        Unit::Pt,
        Unit::Pc,
        Unit::Px,
        Unit::In,
        Unit::Cm,
        Unit::Mm,
        Unit::Mu,
    ];

    /// Length in bytes of every unit token.
    pub(crate) const TOKEN_LEN: usize = 2;

    pub fn lookup(token: &str) -> Option<Unit> {
        UNITS_BY_TOKEN.get(token).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Em => "em",
            Unit::Ex => "ex",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Px => "px",
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::Mu => "mu",
        }
    }

    /// How many em one of this unit is worth, as `(numerator, denominator)`.
    ///
    /// Kept as a ratio so that conversions divide last and stay exact for
    /// round values such as `2.54cm`.
    fn em_ratio(self) -> (Decimal, Decimal) {
        match self {
            Unit::Em => (Decimal::ONE, Decimal::ONE),
            Unit::Ex => (Decimal::new(43, 2), Decimal::ONE),
            Unit::Pt => (Decimal::ONE, Decimal::TEN),
            Unit::Pc => (Decimal::new(12, 1), Decimal::ONE),
            Unit::Px => (EM_PER_INCH, PX_PER_INCH),
            Unit::In => (EM_PER_INCH, Decimal::ONE),
            Unit::Cm => (EM_PER_INCH, Decimal::new(254, 2)),
            Unit::Mm => (EM_PER_INCH, Decimal::new(254, 1)),
            Unit::Mu => (Decimal::ONE, Decimal::from(18)),
        }
    }

    pub fn em_factor(self) -> Decimal {
        let (num, den) = self.em_ratio();
        num / den
    }

    pub fn to_em(self, magnitude: Decimal) -> Result<Decimal> {
        let (num, den) = self.em_ratio();
        magnitude
            .checked_mul(num)
            .and_then(|scaled| scaled.checked_div(den))
            .ok_or(Error::Overflow)
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Unit::lookup(s).ok_or_else(|| Error::UnknownUnit(s.into()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
