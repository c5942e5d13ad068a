// crates/vaglio/src/assemble.rs

use serde::{Deserialize, Serialize};

/// One in-line substitution: at byte `column` of the input line, `removed`
/// bytes of variable name were replaced by `inserted` bytes of rendered
/// value. Columns refer to the original line; consumers accumulate the
/// length deltas in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Splice {
    pub column: u32,
    pub removed: u32,
    pub inserted: u32,
}

/// How one output line relates to its input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LineMap {
    /// Emitted verbatim.
    Copied,
    /// Replaced by an empty line (a directive line, or an inactive span).
    Blanked,
    /// Emitted with in-line substitutions.
    Edited(Vec<Splice>),
}

/// Per-line position metadata for the transform. `lines` has exactly one
/// entry per input line, which is what keeps downstream source maps valid
/// without a separate remapping pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceMap {
    pub lines: Vec<LineMap>,
}

/// The result of transforming one file.
#[derive(Debug, Clone)]
pub struct Transform {
    pub code: String,
    pub map: SourceMap,
}

/// Reassembles the output text line by line, preserving the input line
/// count exactly.
#[derive(Debug, Default)]
pub(crate) struct Assembler {
    code: String,
    lines: Vec<LineMap>,
}

impl Assembler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn sep(&mut self) {
        if !self.lines.is_empty() {
            self.code.push('\n');
        }
    }

    pub(crate) fn copied(&mut self, line: &str) {
        self.sep();
        self.code.push_str(line);
        self.lines.push(LineMap::Copied);
    }

    pub(crate) fn blank(&mut self) {
        self.sep();
        self.lines.push(LineMap::Blanked);
    }

    pub(crate) fn edited(&mut self, line: &str, splices: Vec<Splice>) {
        self.sep();
        self.code.push_str(line);
        self.lines.push(LineMap::Edited(splices));
    }

    pub(crate) fn finish(self) -> Transform {
        Transform {
            code: self.code,
            map: SourceMap { lines: self.lines },
        }
    }
}
