//! Human-readable views of a scope tree.
//!
//! - [`tree`]: box-drawing outline headed by `(global scope)`
//! - [`pretty`]: brace-nested listing, indented per [`RenderConfig`]
//! - [`enums`]: every enum reachable from a scope with its full name
//!
//! Empty scopes are left out of both views. Records are always shown,
//! since their field list is content of its own.

use hdr_ir::{Entry, Enum, Record, Scope};

use crate::emitter::{Emitter, StringEmitter};

const TREE_HEADER: &str = "(global scope)";
const TREE_ITEM: &str = "+--- ";
const TREE_LAST: &str = "`--- ";
const TREE_LINE: &str = "|    ";
const TREE_NONE: &str = "     ";

/// Layout options for [`pretty`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces per nesting level.
    pub indent_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig { indent_width: 4 }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }
}

fn is_hidden(entry: &Entry) -> bool {
    matches!(entry, Entry::Scope(scope) if scope.is_empty())
}

// Tree

/// Render `scope` as an outline into a string.
pub fn tree_string(scope: &Scope) -> String {
    let mut emitter = StringEmitter::new();
    tree(scope, &mut emitter);
    emitter.output()
}

/// Render `scope` as an outline.
///
/// ```text
/// (global scope)
/// +--- LIMIT = 10
/// `--- geo
///      `--- Axis (enum)
///           +--- X = 0
///           `--- Y = 1
/// ```
pub fn tree<E: Emitter>(scope: &Scope, out: &mut E) {
    out.emit(TREE_HEADER);
    out.emit_newline();
    tree_scope(scope, "", out);
}

/// Branch marker for a row and the guide its children continue with.
fn branch(index: usize, count: usize) -> (&'static str, &'static str) {
    if index + 1 == count {
        (TREE_LAST, TREE_NONE)
    } else {
        (TREE_ITEM, TREE_LINE)
    }
}

fn tree_scope<E: Emitter>(scope: &Scope, guide: &str, out: &mut E) {
    let visible: Vec<(&String, &Entry)> = scope.iter().filter(|(_, e)| !is_hidden(e)).collect();
    let count = visible.len();

    for (index, (name, entry)) in visible.into_iter().enumerate() {
        let (marker, continuation) = branch(index, count);
        let child_guide = format!("{guide}{continuation}");
        out.emit(guide);
        out.emit(marker);
        out.emit(name);

        match entry {
            Entry::Value(value) => {
                out.emit(" = ");
                out.emit(&value.to_string());
                out.emit_newline();
            }
            Entry::Enum(enumeration) => {
                out.emit(" (enum)");
                out.emit_newline();
                tree_enum(enumeration, &child_guide, out);
            }
            Entry::Record(record) => {
                out.emit(" (record ");
                out.emit(&record.fields().join(", "));
                out.emit(")");
                out.emit_newline();
                tree_scope(record.scope(), &child_guide, out);
            }
            Entry::Scope(inner) => {
                out.emit_newline();
                tree_scope(inner, &child_guide, out);
            }
        }
    }
}

fn tree_enum<E: Emitter>(enumeration: &Enum, guide: &str, out: &mut E) {
    let count = enumeration.len();
    for (index, (name, value)) in enumeration.iter().enumerate() {
        let (marker, _) = branch(index, count);
        out.emit(guide);
        out.emit(marker);
        out.emit(&format!("{name} = {value}"));
        out.emit_newline();
    }
}

// Pretty

/// Render `scope` as a nested listing into a string.
pub fn pretty_string(scope: &Scope, config: RenderConfig) -> String {
    let mut emitter = StringEmitter::new();
    pretty(scope, config, &mut emitter);
    emitter.output()
}

/// Render `scope` as a nested listing.
///
/// ```text
/// LIMIT = 10
/// geo {
///     enum Axis {
///         X = 0
///     }
///     record Point(x, y)
/// }
/// ```
pub fn pretty<E: Emitter>(scope: &Scope, config: RenderConfig, out: &mut E) {
    Pretty { config, out }.scope(scope, 0);
}

struct Pretty<'a, E: Emitter> {
    config: RenderConfig,
    out: &'a mut E,
}

impl<E: Emitter> Pretty<'_, E> {
    fn line(&mut self, level: usize, text: &str) {
        self.out.emit_indent(level * self.config.indent_width);
        self.out.emit(text);
        self.out.emit_newline();
    }

    fn scope(&mut self, scope: &Scope, level: usize) {
        for (name, entry) in scope {
            match entry {
                _ if is_hidden(entry) => {}
                Entry::Value(value) => self.line(level, &format!("{name} = {value}")),
                Entry::Enum(enumeration) => {
                    self.line(level, &format!("enum {name} {{"));
                    for (member, value) in enumeration.iter() {
                        self.line(level + 1, &format!("{member} = {value}"));
                    }
                    self.line(level, "}");
                }
                Entry::Record(record) => self.record(name, record, level),
                Entry::Scope(inner) => {
                    self.line(level, &format!("{name} {{"));
                    self.scope(inner, level + 1);
                    self.line(level, "}");
                }
            }
        }
    }

    fn record(&mut self, name: &str, record: &Record, level: usize) {
        let header = format!("record {name}({})", record.fields().join(", "));
        if record.scope().is_empty() {
            self.line(level, &header);
            return;
        }
        self.line(level, &format!("{header} {{"));
        self.scope(record.scope(), level + 1);
        self.line(level, "}");
    }
}

// Enum listing

/// Every enum reachable from `scope`, keyed by its `::`-joined full name,
/// in declaration order (depth first).
///
/// Enums declared inside records are included.
pub fn enums(scope: &Scope) -> Vec<(String, &Enum)> {
    let mut found = Vec::new();
    collect_enums(scope, None, &mut found);
    found
}

fn collect_enums<'a>(scope: &'a Scope, prefix: Option<&str>, found: &mut Vec<(String, &'a Enum)>) {
    for (name, entry) in scope {
        let path = match prefix {
            Some(prefix) => format!("{prefix}::{name}"),
            None => name.clone(),
        };
        match entry {
            Entry::Enum(enumeration) => found.push((path, enumeration)),
            Entry::Scope(inner) => collect_enums(inner, Some(&path), found),
            Entry::Record(record) => collect_enums(record.scope(), Some(&path), found),
            Entry::Value(_) => {}
        }
    }
}

#[cfg(test)]
mod tests;
