//! Per-line parsing context.

use hdr_ir::Scope;

/// The line being parsed, its neighbours and the scope being filled.
#[derive(Debug)]
pub struct Context<'a> {
    /// Every line of the dump.
    pub lines: &'a [&'a str],
    /// 0-based index of the current line.
    pub line_index: usize,
    pub scope: &'a mut Scope,
}

impl<'a> Context<'a> {
    pub fn new(lines: &'a [&'a str], line_index: usize, scope: &'a mut Scope) -> Self {
        Context {
            lines,
            line_index,
            scope,
        }
    }

    /// 1-based line number for diagnostics.
    pub fn line_number(&self) -> usize {
        self.line_index + 1
    }
}
