//! `name = value` lines.
//!
//! The name is everything before the first `=` that separates, which is not
//! simply the first `=`: operator names such as `operator<=(x)::y` or
//! `operator==` carry their own. A separating `=` is outside brackets, is
//! not followed by `=`, `(` or `>`, and is not preceded by `<`, `>`, `!` or
//! `=`. The plugin's `name:=value` form is accepted as well.

use hdr_decode::{decode_value, scope_types, BuiltinTypes};
use hdr_ir::Entry;
use tracing::trace;

use crate::context::Context;
use crate::error::ParseError;
use crate::parser::LineParser;

/// Parses constants into the scope at their qualified name.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantsParser;

impl ConstantsParser {
    pub fn new() -> Self {
        ConstantsParser
    }
}

impl LineParser for ConstantsParser {
    fn name(&self) -> &'static str {
        "ConstantsParser"
    }

    fn try_parse_line(&mut self, line: &str, ctx: &mut Context<'_>) -> Result<bool, ParseError> {
        let Some((name, raw)) = split_constant(line) else {
            return Ok(false);
        };
        let value = decode_value(raw, &scope_types(ctx.scope));
        trace!(constant = name, %value, "parsed constant");

        let line_number = ctx.line_number();
        ctx.scope
            .set(name, value)
            .map_err(|source| ParseError::Scope {
                source,
                line_number,
            })?;
        Ok(true)
    }

    fn parse_single_line(&mut self, line: &str) -> Result<(String, Entry), ParseError> {
        let (name, raw) = split_constant(line).ok_or_else(|| ParseError::NoSingleValue {
            line: line.to_owned(),
        })?;
        Ok((name.to_owned(), Entry::Value(decode_value(raw, &BuiltinTypes))))
    }
}

/// Split a constant line into its name and raw value text.
///
/// One trailing comma after the value is dropped. Lines starting with `#`
/// are directives, never constants.
pub fn split_constant(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.starts_with('#') {
        return None;
    }
    let separator = find_separator(line)?;

    let name = line[..separator].trim_end();
    let name = match name.strip_suffix(':') {
        Some(stripped) if !stripped.ends_with(':') => stripped.trim_end(),
        _ => name,
    };
    let value = line[separator + 1..].trim();
    let value = value.strip_suffix(',').map_or(value, str::trim_end);

    (!name.is_empty() && !value.is_empty()).then_some((name, value))
}

fn find_separator(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b'=' if depth == 0 => {
                let next = bytes.get(i + 1).copied();
                let prev = i.checked_sub(1).and_then(|p| bytes.get(p)).copied();
                if prev == Some(b':')
                    || (!matches!(next, Some(b'=' | b'(' | b'>'))
                        && !matches!(prev, Some(b'<' | b'>' | b'!' | b'=')))
                {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
