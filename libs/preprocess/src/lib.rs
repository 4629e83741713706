//! Preprocessing for TeX math input
//!
//! Two string-level passes that run before the notation grammar sees its
//! input:
//!
//! - **Macro substitution** ([`macros`]): expands `#1`…`#9` in a macro body,
//!   keeping control words separated and bounding the expansion size.
//! - **Mixed-content scanning** ([`scanner`]): splits text-mode input into
//!   plain text and `$…$` / `\(…\)` / `\ref{…}` islands, hands islands to a
//!   [`NotationParser`] and builds the result through a [`TreeBuilder`].
//!
//! ```text
//! "area $\pi r^2$ here"
//!      |
//!   scan_segments -> [Text("area "), Notation(..), Text(" here")]
//!      |
//!   scan_mixed_content -> Row[text("\u{a0}area\u{a0}"), Atom[..], text(..)]
//! ```
//!
//! All functions are synchronous and keep no state between calls. Limits
//! live in [`PreprocessOptions`] and reach nested scans through
//! [`ScanContext`].

pub mod context;
pub mod error;
pub mod macros;
pub mod options;
pub mod scanner;
pub mod tree;

// Re-export main types
pub use context::ScanContext;
pub use error::{Error, ErrorKind, Result};
pub use macros::{concatenate, substitute_args, Substitutor};
pub use options::PreprocessOptions;
pub use scanner::{normalize_text_edges, scan_mixed_content, scan_segments, NBSP};
pub use tree::{Attributes, GroupKind, NotationParser, Segment, TreeBuilder};
