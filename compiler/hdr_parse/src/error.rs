//! Parse error types.
//!
//! Sub-parsers report "not my line" as `Ok(false)`; errors are reserved for
//! lines that were recognized but could not be applied, and for strict-mode
//! failures raised by [`crate::Parser`]. Every variant tied to a dump line
//! carries its 1-based line number.

use hdr_ir::{EnumError, ScopeError};

/// Errors raised while parsing a dump.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No sub-parser recognized the line (strict mode only).
    #[error("error parsing line #{line_number}: {line:?}")]
    UnrecognizedLine { line: String, line_number: usize },

    /// A line inside an open `enum` block that is not `name = value`.
    #[error("error parsing line #{line_number}: not an enumerator: {line:?}")]
    MalformedEnumMember { line: String, line_number: usize },

    /// The parsed item could not be stored at its qualified name.
    #[error("error parsing line #{line_number}: {source}")]
    Scope {
        source: ScopeError,
        line_number: usize,
    },

    /// An enumerator was rejected by its enum.
    #[error("error parsing line #{line_number}: {source}")]
    Enum {
        source: EnumError,
        line_number: usize,
    },

    /// `parse_single_line` did not yield exactly one named item.
    #[error("error parsing line: {line:?}")]
    NoSingleValue { line: String },

    /// The parser has no single-line form.
    #[error("single line parsing is not supported by {parser}")]
    Unsupported { parser: &'static str },
}

impl ParseError {
    /// 1-based line number, when the error is tied to a dump line.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ParseError::UnrecognizedLine { line_number, .. }
            | ParseError::MalformedEnumMember { line_number, .. }
            | ParseError::Scope { line_number, .. }
            | ParseError::Enum { line_number, .. } => Some(*line_number),
            ParseError::NoSingleValue { .. } | ParseError::Unsupported { .. } => None,
        }
    }
}
