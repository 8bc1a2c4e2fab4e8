//! Decoder for the literal expressions of a constant dump.
//!
//! [`decode_value`] turns the text on the right of `name = ...` into a
//! [`hdr_ir::Value`]. Calls like `geo::Point(1, 2)` are resolved through a
//! [`TypeRegistry`]; during parsing that is [`scope_types`], the records
//! registered so far layered over the built-in character types.

use regex::Regex;

mod builtins;
mod decode;
mod escape;
mod registry;

pub use builtins::{Builtin, CharEncoding, ConstructError};
pub use decode::decode_value;
pub use escape::unescape;
pub use registry::{scope_types, BuiltinTypes, Constructor, Layered, TypeRegistry};

/// Compile one of the workspace's fixed recognizer patterns.
///
/// Only for literal pattern sources; an invalid one is a bug.
#[allow(clippy::expect_used)]
pub fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("recognizer patterns are valid")
}
