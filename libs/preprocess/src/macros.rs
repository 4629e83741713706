//! Macro argument substitution
//!
//! A macro body refers to its arguments with `#1` … `#9`; `##` stands for a
//! literal `#`. A backslash and the character after it are copied as one unit,
//! so `\#` is never read as a parameter marker.
//!
//! Every concatenation is checked against the configured buffer size, which is
//! what stops a self-referencing macro from growing without bound.

use crate::error::{Error, Result};
use crate::options::PreprocessOptions;

/// Parameter markers run from `#1` to `#9`.
pub const MAX_PARAMETERS: usize = 9;

const ESCAPE: char = '\\';
const PARAMETER: char = '#';

/// Expand `body` against `args` with the default buffer size.
pub fn substitute_args<S: AsRef<str>>(args: &[S], body: &str) -> Result<String> {
    Substitutor::default().substitute(args, body)
}

/// Join two pieces of macro text with the default buffer size.
pub fn concatenate(left: &str, right: &str) -> Result<String> {
    Substitutor::default().concatenate(left, right)
}

/// Macro expansion with a fixed set of limits.
#[derive(Clone, Debug, Default)]
pub struct Substitutor {
    options: PreprocessOptions,
}

impl Substitutor {
    pub fn new(options: PreprocessOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }

    /// Replace each parameter marker in `body` by its argument.
    pub fn substitute<S: AsRef<str>>(&self, args: &[S], body: &str) -> Result<String> {
        let mut expanded = String::new();
        let mut pending = String::new();
        let mut chars = body.char_indices();

        while let Some((offset, c)) = chars.next() {
            match c {
                ESCAPE => {
                    pending.push(c);
                    if let Some((_, next)) = chars.next() {
                        pending.push(next);
                    }
                }
                PARAMETER => match chars.next() {
                    Some((_, PARAMETER)) => pending.push(PARAMETER),
                    marker => {
                        let arg = marker
                            .and_then(|(_, digit)| parameter_index(digit))
                            .and_then(|index| args.get(index))
                            .ok_or(Error::IllegalMacroParameter {
                                offset,
                                available: args.len().min(MAX_PARAMETERS),
                            })?;
                        expanded = self.concatenate(&expanded, &pending)?;
                        expanded = self.concatenate(&expanded, arg.as_ref())?;
                        pending.clear();
                    }
                },
                _ => pending.push(c),
            }
        }

        let expanded = self.concatenate(&expanded, &pending)?;
        tracing::trace!(
            args = args.len(),
            body_len = body.len(),
            expanded_len = expanded.len(),
            "macro arguments substituted"
        );
        Ok(expanded)
    }

    /// Append `right` to `left`.
    ///
    /// A space is inserted when `left` ends in a control word and `right`
    /// starts with a letter, so that `\alpha` + `x` does not re-lex as
    /// `\alphax`.
    pub fn concatenate(&self, left: &str, right: &str) -> Result<String> {
        let separate = starts_with_letter(right) && ends_with_control_word(left);
        let length = left.chars().count() + right.chars().count() + usize::from(separate);
        if length > self.options.max_buffer {
            tracing::debug!(
                limit = self.options.max_buffer,
                length,
                "macro buffer exceeded"
            );
            return Err(Error::MacroBufferOverflow {
                limit: self.options.max_buffer,
            });
        }

        let mut out = String::with_capacity(left.len() + right.len() + 1);
        out.push_str(left);
        if separate {
            out.push(' ');
        }
        out.push_str(right);
        Ok(out)
    }
}

/// Zero-based argument index for a marker digit `1`..=`9`.
fn parameter_index(digit: char) -> Option<usize> {
    match digit.to_digit(10) {
        Some(n @ 1..=9) => Some(n as usize - 1),
        _ => None,
    }
}

fn starts_with_letter(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// True when `s` ends in `\name` whose backslash is not itself escaped.
fn ends_with_control_word(s: &str) -> bool {
    let stem = s.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    if stem.len() == s.len() {
        return false;
    }
    let Some(before) = stem.strip_suffix(ESCAPE) else {
        return false;
    };
    let escapes = before.len() - before.trim_end_matches(ESCAPE).len();
    escapes % 2 == 0
}
