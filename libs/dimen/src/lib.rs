#![forbid(unsafe_code)]

mod em;
mod error;
mod parser;
mod unit;

pub use em::{dimen2em, format_em, EM_PER_INCH, PX_PER_INCH};
pub use error::{Error, Result};
pub use parser::{match_dimen, match_dimen_mu_as_em, DimenMatch, Dimension};
pub use unit::Unit;
