//! Scan context for mixed-content parsing
//!
//! Everything a scan needs to know about its surroundings is carried here
//! and passed down explicitly; nothing is kept in shared state.

use crate::options::PreprocessOptions;
use crate::tree::{Attributes, MATHVARIANT};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanContext {
    /// Ambient font, applied to text leaves as `mathvariant`.
    pub font: Option<String>,
    /// How many scans enclose this one.
    pub depth: usize,
    pub options: PreprocessOptions,
}

impl ScanContext {
    pub fn new(options: PreprocessOptions) -> Self {
        Self {
            font: None,
            depth: 0,
            options,
        }
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Context for a scan started from inside a notation island.
    pub fn nested(&self) -> Self {
        Self {
            font: self.font.clone(),
            depth: self.depth + 1,
            options: self.options.clone(),
        }
    }

    pub(crate) fn text_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        if let Some(font) = &self.font {
            attrs.set(MATHVARIANT, font.as_str());
        }
        attrs
    }
}
