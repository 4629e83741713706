use serde::{Deserialize, Serialize};

/// Default macro expansion buffer, in characters.
pub const DEFAULT_MAX_BUFFER: usize = 5 * 1024;

/// Default limit on recursive mixed-content scans.
pub const DEFAULT_MAX_NESTING: usize = 64;

/// Limits shared by the substitutor and the scanner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOptions {
    /// Upper bound on the length of any macro expansion.
    pub max_buffer: usize,
    /// How many times the scanner may be re-entered from a notation parser.
    pub max_nesting: usize,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            max_buffer: DEFAULT_MAX_BUFFER,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}
