//! Mixed text/math scanner
//!
//! Splits text-mode input such as `area $\pi r^2$ of \ref{eq:c}` into plain
//! text and math islands. Three delimiter syntaxes open an island:
//!
//! ```text
//! $ ... $             dollar math
//! \( ... \)           paren math
//! \ref{...}           cross reference (also \eqref{...}), kept whole
//! ```
//!
//! The scan is a single pass driven by one `(Mode, char)` transition table in
//! [`scan_segments`]. Braces are only counted inside islands: for `$` and `\(`
//! they hide a closing delimiter nested in a group, for `\ref{` a `}` at depth
//! zero is the closing delimiter itself. Outside islands `\$`, `\{`, `\}` and
//! `\\` are literal escapes and lose their backslash.

use crate::context::ScanContext;
use crate::error::{Error, Result};
use crate::tree::{
    Attributes, GroupKind, NotationParser, Segment, TreeBuilder, DISPLAYSTYLE, SCRIPTLEVEL,
};

/// Characters that can start or affect an island.
const TRIGGERS: [char; 4] = ['$', '{', '}', '\\'];

/// Replaces leading and trailing whitespace runs of text segments.
pub const NBSP: char = '\u{00A0}';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Plain,
    DollarMath,
    ParenMath,
    RefBraceMath,
}

impl Mode {
    fn opening_delimiter(self) -> &'static str {
        match self {
            Mode::Plain => "",
            Mode::DollarMath => "$",
            Mode::ParenMath => "\\(",
            Mode::RefBraceMath => "\\ref{",
        }
    }
}

/// Per-scan state. `island_start` indexes the first character that belongs
/// to the current island's source.
struct ScanState<N> {
    mode: Mode,
    brace_depth: usize,
    island_start: usize,
    opened_at: usize,
    text: String,
    segments: Vec<Segment<N>>,
}

impl<N> ScanState<N> {
    fn new() -> Self {
        Self {
            mode: Mode::Plain,
            brace_depth: 0,
            island_start: 0,
            opened_at: 0,
            text: String::new(),
            segments: Vec::new(),
        }
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.segments.push(Segment::Text(text));
        }
    }

    /// Enter `mode` at delimiter offset `opened_at`; island source starts at
    /// `island_start`.
    fn open(&mut self, mode: Mode, opened_at: usize, island_start: usize) {
        self.flush_text();
        tracing::trace!(?mode, offset = opened_at, "notation island opened");
        self.mode = mode;
        self.brace_depth = 0;
        self.opened_at = opened_at;
        self.island_start = island_start;
    }

    /// Hand `chars[island_start..end]` to the parser and return to plain text.
    fn close<P>(
        &mut self,
        chars: &[char],
        end: usize,
        parser: &P,
        context: &ScanContext,
    ) -> Result<()>
    where
        P: NotationParser<N> + ?Sized,
    {
        let source: String = chars[self.island_start..end].iter().collect();
        tracing::trace!(mode = ?self.mode, source = %source, "notation island closed");
        let node = parser.parse_substring(&source, context)?;
        self.segments.push(Segment::Notation(node));
        self.mode = Mode::Plain;
        Ok(())
    }
}

/// Split `text` into plain text and parsed notation islands.
///
/// Text segments are returned raw (escapes already stripped, whitespace
/// untouched). Nothing is returned on failure: an unterminated island or a
/// parser error discards all segments collected so far.
pub fn scan_segments<N, P>(
    text: &str,
    parser: &P,
    context: &ScanContext,
) -> Result<Vec<Segment<N>>>
where
    P: NotationParser<N> + ?Sized,
{
    if context.depth > context.options.max_nesting {
        return Err(Error::NestingTooDeep {
            limit: context.options.max_nesting,
        });
    }

    if !text.contains(|c: char| TRIGGERS.contains(&c)) {
        tracing::debug!(depth = context.depth, len = text.len(), "no notation triggers");
        return Ok(vec![Segment::Text(text.to_string())]);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut state = ScanState::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match (state.mode, c) {
            (Mode::Plain, '$') => {
                state.open(Mode::DollarMath, i, i + 1);
                i += 1;
            }
            (Mode::Plain, '\\') => {
                if let Some(len) = ref_command_len(&chars[i + 1..]) {
                    // The island is the whole `\ref{...}` command.
                    state.open(Mode::RefBraceMath, i, i);
                    i += 1 + len;
                    continue;
                }
                match next {
                    Some('(') => {
                        state.open(Mode::ParenMath, i, i + 2);
                    }
                    Some(escaped) if TRIGGERS.contains(&escaped) => {
                        state.text.push(escaped);
                    }
                    Some(other) => {
                        state.text.push('\\');
                        state.text.push(other);
                    }
                    None => state.text.push('\\'),
                }
                i += 2;
            }
            (Mode::Plain, other) => {
                state.text.push(other);
                i += 1;
            }
            (Mode::DollarMath, '$') if state.brace_depth == 0 => {
                state.close(&chars, i, parser, context)?;
                i += 1;
            }
            (Mode::ParenMath, '\\') if next == Some(')') && state.brace_depth == 0 => {
                state.close(&chars, i, parser, context)?;
                i += 2;
            }
            (_, '\\') => {
                // Escaped pairs inside an island are opaque.
                i += 2;
            }
            (_, '{') => {
                state.brace_depth += 1;
                i += 1;
            }
            (Mode::RefBraceMath, '}') if state.brace_depth == 0 => {
                state.close(&chars, i + 1, parser, context)?;
                i += 1;
            }
            (_, '}') => {
                state.brace_depth = state.brace_depth.saturating_sub(1);
                i += 1;
            }
            (_, _) => {
                i += 1;
            }
        }
    }

    if state.mode != Mode::Plain {
        return Err(Error::UnterminatedNotationIsland {
            delimiter: state.mode.opening_delimiter(),
            offset: state.opened_at,
        });
    }

    state.flush_text();
    Ok(state.segments)
}

/// Scan `text` and materialize the result with `builder`.
///
/// Islands become [`GroupKind::Atom`] groups around the parsed tree. With a
/// `style_level` everything is wrapped in one [`GroupKind::StyleScope`];
/// otherwise several nodes are wrapped in a [`GroupKind::Row`] and a single
/// node is returned as is.
pub fn scan_mixed_content<P, B>(
    text: &str,
    style_level: Option<u8>,
    parser: &P,
    builder: &B,
    context: &ScanContext,
) -> Result<Vec<B::Node>>
where
    P: NotationParser<B::Node> + ?Sized,
    B: TreeBuilder + ?Sized,
{
    let segments = scan_segments(text, parser, context)?;
    let text_attributes = context.text_attributes();
    let no_attributes = Attributes::new();

    let nodes: Vec<B::Node> = segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(content) => {
                builder.text_leaf(&normalize_text_edges(&content), &text_attributes)
            }
            Segment::Notation(tree) => builder.group(GroupKind::Atom, vec![tree], &no_attributes),
        })
        .collect();

    if let Some(level) = style_level {
        let attributes = Attributes::new()
            .with(DISPLAYSTYLE, "false")
            .with(SCRIPTLEVEL, level.to_string());
        return Ok(vec![builder.group(
            GroupKind::StyleScope { level },
            nodes,
            &attributes,
        )]);
    }

    if nodes.len() > 1 {
        return Ok(vec![builder.group(GroupKind::Row, nodes, &no_attributes)]);
    }

    Ok(nodes)
}

/// Collapse the leading and the trailing whitespace run to one [`NBSP`] each.
pub fn normalize_text_edges(text: &str) -> String {
    let after_leading = text.trim_start();
    let core = after_leading.trim_end();

    let mut out = String::with_capacity(core.len() + 2 * NBSP.len_utf8());
    if after_leading.len() != text.len() {
        out.push(NBSP);
    }
    out.push_str(core);
    if core.len() != after_leading.len() {
        out.push(NBSP);
    }
    out
}

/// Length of `ref{` / `eqref{` (with optional whitespace before the brace) at
/// the start of `rest`, which follows a backslash.
fn ref_command_len(rest: &[char]) -> Option<usize> {
    let mut i = 0;
    if rest.starts_with(&['e', 'q']) {
        i += 2;
    }
    if !rest[i..].starts_with(&['r', 'e', 'f']) {
        return None;
    }
    i += 3;
    while rest.get(i).is_some_and(|c| c.is_whitespace()) {
        i += 1;
    }
    (rest.get(i) == Some(&'{')).then_some(i + 1)
}
