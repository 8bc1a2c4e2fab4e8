//! `enum Name {` ... `}` blocks.
//!
//! ```text
//! enum foo::Color {         idle -> open, foo::Color = Enum("Color")
//! foo::Color::RED = 0,      open: RED = 0
//! foo::Color::GREEN = 1,    open: GREEN = 1
//! }                         open -> idle
//! ```
//!
//! Anonymous enums (clang prints them as `(anonymous enum at f.h:3:1)` or
//! `(unnamed enum at ...)`) are stored under their printed name with a
//! `` `N `` suffix, `N` counting anonymous enums per enclosing scope as
//! stored (a leading `::` and anonymous namespaces do not open a new count).

use std::sync::LazyLock;

use hdr_decode::{decode_value, pattern, scope_types};
use hdr_ir::name::{normalize, split_last};
use hdr_ir::{Entry, Enum};
use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::constants::split_constant;
use crate::context::Context;
use crate::error::ParseError;
use crate::parser::LineParser;

static ENUM_START: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\s*enum\s+(.+?)\s*\{\s*$"));
static ENUM_END: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\s*\}"));
static ANONYMOUS: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^\(\s*(anonymous|unnamed)\b.*\)$"));

/// Whether a local enum name is the compiler's placeholder for an unnamed enum.
pub fn is_anonymous_name(local_name: &str) -> bool {
    ANONYMOUS.is_match(local_name)
}

/// Parses enum blocks, one open enum at a time.
#[derive(Debug, Default)]
pub struct EnumsParser {
    /// Qualified name the open enum is stored under.
    current: Option<String>,
    anonymous_in_scope: FxHashMap<String, usize>,
}

impl EnumsParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an `enum ... {` line was seen without its closing `}`.
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    fn open(&mut self, qualified: &str, ctx: &mut Context<'_>) -> Result<(), ParseError> {
        let (enclosing, local) = split_last(qualified);
        let stored_name = if is_anonymous_name(local) {
            let counter = self
                .anonymous_in_scope
                .entry(normalize(enclosing.unwrap_or_default()).into_owned())
                .or_default();
            let index = *counter;
            *counter += 1;
            format!("{qualified}`{index}")
        } else {
            qualified.to_owned()
        };

        debug!(enum_name = %stored_name, "enum opened");
        let line_number = ctx.line_number();
        ctx.scope
            .set(&stored_name, Enum::new(local))
            .map_err(|source| ParseError::Scope {
                source,
                line_number,
            })?;
        self.current = Some(stored_name);
        Ok(())
    }

    fn add_member(
        &self,
        enum_name: &str,
        line: &str,
        ctx: &mut Context<'_>,
    ) -> Result<(), ParseError> {
        let line_number = ctx.line_number();
        let malformed = || ParseError::MalformedEnumMember {
            line: line.to_owned(),
            line_number,
        };

        let (qualified, raw) = split_constant(line).ok_or_else(malformed)?;
        let (_, member) = split_last(qualified);
        let value = decode_value(raw, &scope_types(ctx.scope))
            .as_integral()
            .ok_or_else(malformed)?;

        let Some(Entry::Enum(target)) = ctx.scope.get_mut(enum_name).ok() else {
            return Err(malformed());
        };
        target
            .insert(member, value)
            .map_err(|source| ParseError::Enum {
                source,
                line_number,
            })
    }
}

impl LineParser for EnumsParser {
    fn name(&self) -> &'static str {
        "EnumsParser"
    }

    fn try_parse_line(&mut self, line: &str, ctx: &mut Context<'_>) -> Result<bool, ParseError> {
        if let Some(captures) = ENUM_START.captures(line) {
            if self.is_open() {
                return Ok(false);
            }
            let qualified = captures.get(1).map_or("", |m| m.as_str());
            self.open(qualified, ctx)?;
            return Ok(true);
        }

        let Some(enum_name) = self.current.take() else {
            return Ok(false);
        };
        if ENUM_END.is_match(line) {
            debug!(%enum_name, "enum closed");
            return Ok(true);
        }
        if line.trim().is_empty() {
            self.current = Some(enum_name);
            return Ok(false);
        }

        let added = self.add_member(&enum_name, line, ctx);
        self.current = Some(enum_name);
        added.map(|()| true)
    }

    fn reset(&mut self) {
        self.current = None;
        self.anonymous_in_scope.clear();
    }
}

#[cfg(test)]
mod tests;
