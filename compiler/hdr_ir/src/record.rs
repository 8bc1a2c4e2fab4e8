//! C++ classes and structs.
//!
//! A [`Record`] is registered from a `Name{field, ...}` line of the dump. It
//! carries the sanitized field names as a shared [`StructLayout`], builds
//! [`StructValue`]s when a literal calls it as a constructor, and owns a
//! member [`Scope`] for static members and nested types.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::name::{is_identifier, is_reserved_word, remove_template, split_last};
use crate::scope::Scope;
use crate::value::{StructLayout, StructValue, Value};

/// Errors from constructing a record value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("{type_name} takes {expected} fields, got {got}")]
    Arity {
        type_name: String,
        expected: usize,
        got: usize,
    },
}

/// A class or struct with its field layout and member scope.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    name: String,
    layout: Arc<StructLayout>,
    scope: Scope,
}

impl Record {
    /// Create a record from a raw comma or whitespace separated field list.
    pub fn new(name: &str, raw_fields: &str) -> Self {
        Self::from_fields(name, &split_field_list(raw_fields))
    }

    /// Create a record from already split field names.
    pub fn from_fields<S: AsRef<str>>(name: &str, fields: &[S]) -> Self {
        let layout = StructLayout::new(record_type_name(name), sanitize_field_names(fields));
        Record {
            name: name.to_owned(),
            layout: Arc::new(layout),
            scope: Scope::new(),
        }
    }

    /// Replace the member scope, keeping members registered earlier.
    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// The declaration name as it appeared in the dump.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier used for constructed values.
    pub fn type_name(&self) -> &str {
        self.layout.type_name()
    }

    /// Sanitized field names in declaration order.
    pub fn fields(&self) -> &[String] {
        self.layout.fields()
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }

    /// Build an instance from positional field values.
    pub fn construct(&self, args: Vec<Value>) -> Result<Value, RecordError> {
        if args.len() != self.layout.len() {
            return Err(RecordError::Arity {
                type_name: self.type_name().to_owned(),
                expected: self.layout.len(),
                got: args.len(),
            });
        }
        Ok(Value::Struct(StructValue::new(Arc::clone(&self.layout), args)))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {}{{{}}}", self.name, self.fields().join(", "))
    }
}

/// Split a raw field list on commas and whitespace.
pub fn split_field_list(raw: &str) -> Vec<&str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect()
}

fn is_safe_name(name: &str) -> bool {
    is_identifier(name) && !is_reserved_word(name)
}

/// Rename field names so every one is a unique, non-reserved identifier.
///
/// Runs right to left so earlier positional placeholders stay stable:
/// invalid names become `_<index>`, leading underscores are stripped when
/// the result is still a valid name, and repeated names get `_<n>` suffixes.
pub fn sanitize_field_names<S: AsRef<str>>(fields: &[S]) -> Vec<String> {
    let mut safe = vec![String::new(); fields.len()];
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();

    for (index, raw) in fields.iter().enumerate().rev() {
        let raw = raw.as_ref();
        let mut name = if is_safe_name(raw) {
            let stripped = raw.trim_start_matches('_');
            if is_safe_name(stripped) { stripped } else { raw }.to_owned()
        } else {
            format!("_{index}")
        };

        if let Some(&count) = seen.get(&name) {
            let mut n = count;
            let mut candidate = format!("{name}_{n}");
            while seen.contains_key(&candidate) {
                n += 1;
                candidate = format!("{name}_{n}");
            }
            seen.insert(name, n + 1);
            name = candidate;
        }

        seen.insert(name.clone(), 1);
        safe[index] = name;
    }
    safe
}

/// Identifier for values of the record `name`: the local name without
/// template arguments, `_`-prefixed when it is a reserved word.
pub fn record_type_name(name: &str) -> String {
    let (_, local) = split_last(name);
    let mut type_name = remove_template(local);
    if is_reserved_word(&type_name) {
        type_name.insert(0, '_');
    }
    type_name
}
