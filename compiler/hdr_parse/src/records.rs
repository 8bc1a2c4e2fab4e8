//! `Name{field, ...}` lines.
//!
//! A record may show up after constants or nested types that live inside
//! it (`geo::Point::ORIGIN = ...` creates a plain scope `geo::Point`).
//! Registering the record keeps those members.

use std::sync::LazyLock;

use hdr_decode::pattern;
use hdr_ir::{Entry, Record, Scope};
use regex::Regex;
use tracing::debug;

use crate::context::Context;
use crate::error::ParseError;
use crate::parser::LineParser;

static RECORD: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\s*([^=]+?)\{([^=]*)\}\s*$"));

/// Parses record declarations into [`Record`] entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordsParser;

impl RecordsParser {
    pub fn new() -> Self {
        RecordsParser
    }
}

impl LineParser for RecordsParser {
    fn name(&self) -> &'static str {
        "RecordsParser"
    }

    fn try_parse_line(&mut self, line: &str, ctx: &mut Context<'_>) -> Result<bool, ParseError> {
        let Some((name, fields)) = split_record(line) else {
            return Ok(false);
        };
        let record = Record::new(name, fields).with_scope(take_members(ctx.scope, name));
        debug!(record = name, fields = ?record.fields(), "record registered");

        let line_number = ctx.line_number();
        ctx.scope
            .set(name, record)
            .map_err(|source| ParseError::Scope {
                source,
                line_number,
            })?;
        Ok(true)
    }

    fn parse_single_line(&mut self, line: &str) -> Result<(String, Entry), ParseError> {
        let (name, fields) = split_record(line).ok_or_else(|| ParseError::NoSingleValue {
            line: line.to_owned(),
        })?;
        Ok((name.to_owned(), Entry::Record(Record::new(name, fields))))
    }
}

/// Split a record line into its name and raw field list.
pub fn split_record(line: &str) -> Option<(&str, &str)> {
    let captures = RECORD.captures(line)?;
    Some((captures.get(1)?.as_str().trim_end(), captures.get(2)?.as_str()))
}

/// Detach the members already stored at `name`.
fn take_members(scope: &mut Scope, name: &str) -> Scope {
    match scope.get_mut(name) {
        Ok(Entry::Scope(members)) => std::mem::take(members),
        Ok(Entry::Record(record)) => std::mem::take(record.scope_mut()),
        _ => Scope::new(),
    }
}

#[cfg(test)]
mod tests;
