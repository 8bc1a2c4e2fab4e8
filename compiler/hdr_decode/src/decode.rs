//! Literal expression decoding.
//!
//! Recognition runs in a fixed order and the first rule that accepts the
//! text wins:
//!
//! 1. integer `-?[0-9]+`
//! 2. float in exponential form `-?[0-9]+\.[0-9]+e[+-]?[0-9]+`
//! 3. quoted char or string, delimiters must match
//! 4. `true` / `false`, any case
//! 5. array `(e1, e2, ...)` with balanced brackets inside
//! 6. call `TypeName(args...)`
//! 7. the text itself
//!
//! Nothing is rejected: text that fits no rule comes back as
//! [`Value::Text`], and a call whose constructor is unknown or refuses its
//! arguments keeps the arguments positionally.

use std::sync::LazyLock;

use hdr_ir::name::{contextual_split, has_balanced_brackets, remove_template};
use hdr_ir::Value;
use hdr_stack::ensure_sufficient_stack;
use regex::Regex;
use tracing::{trace, warn};

use crate::escape::unescape;
use crate::pattern;
use crate::registry::TypeRegistry;

static INTEGER: LazyLock<Regex> = LazyLock::new(|| pattern(r"^-?[0-9]+$"));
static FLOAT: LazyLock<Regex> = LazyLock::new(|| pattern(r"^-?[0-9]+\.[0-9]+e[+-]?[0-9]+$"));
static BOOLEAN: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)^(true|false)$"));

/// Decode one literal expression, resolving calls through `registry`.
pub fn decode_value(raw: &str, registry: &dyn TypeRegistry) -> Value {
    ensure_sufficient_stack(|| decode_inner(raw, registry))
}

fn decode_inner(raw: &str, registry: &dyn TypeRegistry) -> Value {
    if INTEGER.is_match(raw) {
        if let Ok(n) = raw.parse::<i128>() {
            return Value::Int(n);
        }
    }
    if FLOAT.is_match(raw) {
        if let Ok(x) = raw.parse::<f64>() {
            return Value::Float(x);
        }
    }
    if let Some(value) = decode_quoted(raw) {
        return value;
    }
    if BOOLEAN.is_match(raw) {
        return Value::Bool(raw.eq_ignore_ascii_case("true"));
    }
    if let Some(elements) = array_elements(raw) {
        return Value::List(decode_all(&elements, registry));
    }
    if let Some((type_name, params)) = split_call(raw) {
        if let Some(value) = construct(type_name, params, registry) {
            return value;
        }
    }

    trace!(raw, "no literal form matched, keeping text");
    Value::Text(raw.to_owned())
}

fn decode_all(pieces: &[&str], registry: &dyn TypeRegistry) -> Vec<Value> {
    pieces
        .iter()
        .map(|piece| decode_value(piece, registry))
        .collect()
}

fn decode_quoted(raw: &str) -> Option<Value> {
    let quote = raw.chars().next().filter(|&c| matches!(c, '\'' | '"'))?;
    if raw.len() < 2 || !raw.ends_with(quote) {
        return None;
    }
    let text = unescape(&raw[1..raw.len() - 1]);
    if quote == '\'' {
        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Value::Char(c));
        }
    }
    Some(Value::Str(text))
}

fn array_elements(raw: &str) -> Option<Vec<&str>> {
    let inner = raw.strip_prefix('(')?.strip_suffix(')')?;
    if !has_balanced_brackets(inner) {
        return None;
    }
    contextual_split(inner, b',')
}

/// Split `Name(args)` at the parenthesis matching the final `)`.
fn split_call(raw: &str) -> Option<(&str, &str)> {
    let body = raw.strip_suffix(')')?;
    if raw.matches('(').count() != raw.matches(')').count() {
        return None;
    }
    let mut depth = 0usize;
    for (i, b) in body.bytes().enumerate().rev() {
        match b {
            b')' => depth += 1,
            b'(' if depth == 0 => return (i > 0).then(|| (&body[..i], &body[i + 1..])),
            b'(' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// `None` when the arguments do not split, leaving the call as text.
fn construct(type_name: &str, params: &str, registry: &dyn TypeRegistry) -> Option<Value> {
    let pieces = contextual_split(params, b',')?;
    let args = decode_all(&pieces, registry);

    let constructor = registry.resolve(type_name).or_else(|| {
        let plain = remove_template(type_name);
        (plain != type_name)
            .then(|| registry.resolve(&plain))
            .flatten()
    });
    let Some(constructor) = constructor else {
        trace!(type_name, "unknown type, keeping arguments positionally");
        return Some(Value::untyped(args));
    };

    Some(match constructor.call(&args) {
        Ok(value) => value,
        Err(err) => {
            warn!(type_name, %err, "constructor rejected its arguments");
            Value::untyped(args)
        }
    })
}
