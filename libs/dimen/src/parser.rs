//! Dimension literal matching.
//!
//! Grammar (leading whitespace allowed):
//!
//! ```text
//! dimen   := sign? numeral ws* unit
//! sign    := '+' | '-'
//! numeral := [.,] digit+ | digit+ ([.,] digit*)?
//! unit    := em | ex | pt | pc | px | in | cm | mm | mu
//! ```
//!
//! A comma decimal separator is normalized to a point in the returned numeral.

use crate::em::em_numeral;
use crate::error::{Error, Result};
use crate::unit::Unit;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Raw result of [`match_dimen`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DimenMatch {
    /// Numeral text with its sign, comma replaced by a point.
    pub numeral: String,
    pub unit: Unit,
    /// Bytes of input consumed, including surrounding whitespace.
    pub length: usize,
}

impl DimenMatch {
    /// Numeric value of the numeral. An empty numeral counts as 1.
    pub fn magnitude(&self) -> Option<Decimal> {
        if self.numeral.is_empty() {
            return Some(Decimal::ONE);
        }
        parse_numeral(&self.numeral)
    }
}

/// Match a dimension at the start of `text`.
///
/// With `allow_trailing`, anything may follow the unit and at most one space
/// after it is consumed, so `length` is where the caller resumes. Without it,
/// the whole text (modulo surrounding whitespace) must be the dimension.
pub fn match_dimen(text: &str, allow_trailing: bool) -> Option<DimenMatch> {
    let bytes = text.as_bytes();
    let start = skip_whitespace(text, 0);
    let mut pos = start;

    if matches!(bytes.get(pos), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(bytes, pos);
    pos += int_digits;

    if matches!(bytes.get(pos), Some(b'.' | b',')) {
        let frac_digits = count_digits(bytes, pos + 1);
        if int_digits == 0 && frac_digits == 0 {
            return None;
        }
        pos += 1 + frac_digits;
    } else if int_digits == 0 {
        return None;
    }

    let numeral = text[start..pos].replacen(',', ".", 1);

    pos = skip_whitespace(text, pos);
    let unit = text
        .get(pos..pos + Unit::TOKEN_LEN)
        .and_then(Unit::lookup)?;
    pos += Unit::TOKEN_LEN;

    if allow_trailing {
        if bytes.get(pos) == Some(&b' ') {
            pos += 1;
        }
    } else {
        pos = skip_whitespace(text, pos);
        if pos != text.len() {
            return None;
        }
    }

    Some(DimenMatch {
        numeral,
        unit,
        length: pos,
    })
}

/// Like [`match_dimen`], but a `mu` length is rewritten as the equivalent em
/// numeral (three decimals at most). Math units only make sense inside math.
pub fn match_dimen_mu_as_em(text: &str, allow_trailing: bool) -> Option<DimenMatch> {
    let m = match_dimen(text, allow_trailing)?;
    if m.unit != Unit::Mu {
        return Some(m);
    }
    let em = Unit::Mu.to_em(m.magnitude()?).ok()?;
    Some(DimenMatch {
        numeral: em_numeral(em),
        unit: Unit::Em,
        length: m.length,
    })
}

/// A parsed length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    pub magnitude: Decimal,
    pub unit: Unit,
}

impl Dimension {
    pub fn new(magnitude: Decimal, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// Parse an exact literal such as `-1,5 pt`. Returns `None` when the text
    /// is not a dimension.
    pub fn parse(text: &str) -> Option<Self> {
        let m = match_dimen(text, false)?;
        Some(Self {
            magnitude: m.magnitude()?,
            unit: m.unit,
        })
    }

    pub fn to_em(&self) -> Result<Decimal> {
        self.unit.to_em(self.magnitude)
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Dimension::parse(s).ok_or_else(|| Error::MalformedDimension(s.into()))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

fn skip_whitespace(text: &str, from: usize) -> usize {
    let rest = &text[from..];
    from + (rest.len() - rest.trim_start().len())
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// `Decimal` does not accept a bare leading or trailing point, or a `+` sign.
fn parse_numeral(numeral: &str) -> Option<Decimal> {
    let (negative, body) = match numeral.as_bytes().first() {
        Some(b'-') => (true, &numeral[1..]),
        Some(b'+') => (false, &numeral[1..]),
        _ => (false, numeral),
    };
    let body = body.trim_end_matches('.');
    let value = if body.starts_with('.') {
        Decimal::from_str(&format!("0{body}"))
    } else {
        Decimal::from_str(body)
    }
    .ok()?;
    Some(if negative { -value } else { value })
}
