//! `# literal Name(literal) = value` lines.
//!
//! The plugin reports string literals used in constant expressions under
//! the placeholder local name `(literal)`. Each one is stored with a
//! `` `N `` suffix, `N` counting literals per enclosing scope, so
//! `ns::(literal)` lines become `` ns::(literal)`0 ``, `` ns::(literal)`1 ``
//! and so on. Counting follows the scope the literal is stored in, so
//! `::(literal)` and `(anonymous namespace)::(literal)` share one counter.

use std::sync::LazyLock;

use hdr_decode::{decode_value, pattern, scope_types, BuiltinTypes};
use hdr_ir::name::{normalize, split_last};
use hdr_ir::Entry;
use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::constants::split_constant;
use crate::context::Context;
use crate::error::ParseError;
use crate::parser::LineParser;

/// Local name the plugin gives to literals.
pub const LITERAL_NAME: &str = "(literal)";

static LITERAL: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\s*#\s*literal\s+(.*)$"));

/// Parses literal directives, numbering them per scope.
#[derive(Debug, Default)]
pub struct LiteralsParser {
    literals_in_scope: FxHashMap<String, usize>,
}

impl LiteralsParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `name = value` part of a literal directive with a literal name.
    fn split_literal(line: &str) -> Option<(&str, &str)> {
        let constant = LITERAL.captures(line)?.get(1)?.as_str();
        split_constant(constant).filter(|(name, _)| name.ends_with(LITERAL_NAME))
    }

    fn numbered(&mut self, name: &str) -> String {
        let (enclosing, _) = split_last(name);
        let counter = self
            .literals_in_scope
            .entry(normalize(enclosing.unwrap_or_default()).into_owned())
            .or_default();
        let index = *counter;
        *counter += 1;
        format!("{name}`{index}")
    }
}

impl LineParser for LiteralsParser {
    fn name(&self) -> &'static str {
        "LiteralsParser"
    }

    fn try_parse_line(&mut self, line: &str, ctx: &mut Context<'_>) -> Result<bool, ParseError> {
        let Some((name, raw)) = Self::split_literal(line) else {
            return Ok(false);
        };
        let value = decode_value(raw, &scope_types(ctx.scope));
        let name = self.numbered(name);
        debug!(literal = %name, %value, "literal numbered");

        let line_number = ctx.line_number();
        ctx.scope
            .set(&name, value)
            .map_err(|source| ParseError::Scope {
                source,
                line_number,
            })?;
        Ok(true)
    }

    fn parse_single_line(&mut self, line: &str) -> Result<(String, Entry), ParseError> {
        let (name, raw) = Self::split_literal(line).ok_or_else(|| ParseError::NoSingleValue {
            line: line.to_owned(),
        })?;
        let value = decode_value(raw, &BuiltinTypes);
        Ok((self.numbered(name), Entry::Value(value)))
    }

    fn reset(&mut self) {
        self.literals_in_scope.clear();
    }
}

#[cfg(test)]
mod tests;
