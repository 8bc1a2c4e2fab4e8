//! Hierarchical, qualified-name addressable scopes.
//!
//! A [`Scope`] maps name components to [`Entry`] values in insertion order.
//! Every operation takes a qualified name, normalizes it (leading separator,
//! anonymous namespaces) and descends one component at a time using the
//! bracket-aware splitting in [`crate::name`].
//!
//! # Descent rules
//!
//! | entry on the path | lookup | assignment |
//! |---|---|---|
//! | `Scope` | descend | descend |
//! | `Record` | descend into its member scope | same |
//! | `Enum` | last component is an enumerator | enumerator assignment |
//! | `Value` | not found | [`ScopeError::NotAScope`] |
//! | missing | not found | a new empty `Scope` is created |

use indexmap::IndexMap;

use crate::enum_type::{Enum, EnumError};
use crate::name::{normalize, split_first};
use crate::record::Record;
use crate::value::Value;

/// Errors from scope operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    #[error("name not found: {name}")]
    NotFound { name: String },
    /// A component of the path names something that cannot hold members.
    #[error("cannot assign {name}: {component} is a {kind}, not a scope")]
    NotAScope {
        name: String,
        component: String,
        kind: &'static str,
    },
    #[error("cannot assign {name}: enumerator values must be integral, got {kind}")]
    NonIntegralEnumerator { name: String, kind: &'static str },
    #[error(transparent)]
    Enum(#[from] EnumError),
}

/// One member of a scope.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    Value(Value),
    Enum(Enum),
    Record(Record),
    Scope(Scope),
}

impl Entry {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Entry::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&Enum> {
        match self {
            Entry::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Entry::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_scope(&self) -> Option<&Scope> {
        match self {
            Entry::Scope(scope) => Some(scope),
            _ => None,
        }
    }

    /// Member scope of scopes and records.
    pub fn members(&self) -> Option<&Scope> {
        match self {
            Entry::Scope(scope) => Some(scope),
            Entry::Record(record) => Some(record.scope()),
            Entry::Value(_) | Entry::Enum(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Value(value) => value.kind(),
            Entry::Enum(_) => "enum",
            Entry::Record(_) => "record",
            Entry::Scope(_) => "scope",
        }
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry::Value(value)
    }
}

impl From<Enum> for Entry {
    fn from(e: Enum) -> Self {
        Entry::Enum(e)
    }
}

impl From<Record> for Entry {
    fn from(record: Record) -> Self {
        Entry::Record(record)
    }
}

impl From<Scope> for Entry {
    fn from(scope: Scope) -> Self {
        Entry::Scope(scope)
    }
}

/// Result of resolving a qualified name.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lookup<'a> {
    /// A stored entry.
    Entry(&'a Entry),
    /// An enumerator reached through its enum (`ns::Color::RED`).
    Enumerator(i128),
}

impl<'a> Lookup<'a> {
    pub fn entry(self) -> Option<&'a Entry> {
        match self {
            Lookup::Entry(entry) => Some(entry),
            Lookup::Enumerator(_) => None,
        }
    }

    /// Integer behind an enumerator or an integral value.
    pub fn as_int(self) -> Option<i128> {
        match self {
            Lookup::Entry(entry) => entry.as_value().and_then(Value::as_integral),
            Lookup::Enumerator(n) => Some(n),
        }
    }
}

/// Ordered mapping from name components to entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scope {
    entries: IndexMap<String, Entry>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a qualified name.
    pub fn get(&self, name: &str) -> Result<Lookup<'_>, ScopeError> {
        self.lookup(&normalize(name))
            .ok_or_else(|| ScopeError::NotFound {
                name: name.to_owned(),
            })
    }

    fn lookup(&self, path: &str) -> Option<Lookup<'_>> {
        match split_first(path) {
            (first, None) => self.entries.get(first).map(Lookup::Entry),
            (first, Some(rest)) => match self.entries.get(first)? {
                Entry::Scope(scope) => scope.lookup(rest),
                Entry::Record(record) => record.scope().lookup(rest),
                Entry::Enum(e) => match split_first(rest) {
                    (enumerator, None) => e.value_of(enumerator).map(Lookup::Enumerator),
                    (_, Some(_)) => None,
                },
                Entry::Value(_) => None,
            },
        }
    }

    /// Resolve a qualified name to a stored entry.
    pub fn get_entry(&self, name: &str) -> Option<&Entry> {
        self.get(name).ok().and_then(Lookup::entry)
    }

    pub fn get_value(&self, name: &str) -> Option<&Value> {
        self.get_entry(name).and_then(Entry::as_value)
    }

    pub fn get_enum(&self, name: &str) -> Option<&Enum> {
        self.get_entry(name).and_then(Entry::as_enum)
    }

    pub fn get_record(&self, name: &str) -> Option<&Record> {
        self.get_entry(name).and_then(Entry::as_record)
    }

    pub fn get_scope(&self, name: &str) -> Option<&Scope> {
        self.get_entry(name).and_then(Entry::as_scope)
    }

    /// Mutable access to a stored entry.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Entry, ScopeError> {
        self.lookup_mut(&normalize(name))
            .ok_or_else(|| ScopeError::NotFound {
                name: name.to_owned(),
            })
    }

    fn lookup_mut(&mut self, path: &str) -> Option<&mut Entry> {
        match split_first(path) {
            (first, None) => self.entries.get_mut(first),
            (first, Some(rest)) => match self.entries.get_mut(first)? {
                Entry::Scope(scope) => scope.lookup_mut(rest),
                Entry::Record(record) => record.scope_mut().lookup_mut(rest),
                Entry::Enum(_) | Entry::Value(_) => None,
            },
        }
    }

    /// Whether a qualified name resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(&normalize(name)).is_some()
    }

    /// Assign a qualified name, creating missing intermediate scopes.
    ///
    /// An existing name keeps its position.
    pub fn set(&mut self, name: &str, entry: impl Into<Entry>) -> Result<(), ScopeError> {
        self.assign(&normalize(name), entry.into(), name)
    }

    fn assign(&mut self, path: &str, entry: Entry, full_name: &str) -> Result<(), ScopeError> {
        let (first, rest) = split_first(path);
        let Some(rest) = rest else {
            self.entries.insert(first.to_owned(), entry);
            return Ok(());
        };

        let child = self
            .entries
            .entry(first.to_owned())
            .or_insert_with(|| Entry::Scope(Scope::new()));
        match child {
            Entry::Scope(scope) => scope.assign(rest, entry, full_name),
            Entry::Record(record) => record.scope_mut().assign(rest, entry, full_name),
            Entry::Enum(e) if split_first(rest).1.is_none() => {
                let value = match &entry {
                    Entry::Value(value) => value.as_integral(),
                    _ => None,
                };
                let value = value.ok_or_else(|| ScopeError::NonIntegralEnumerator {
                    name: full_name.to_owned(),
                    kind: entry.kind(),
                })?;
                e.insert(rest, value)?;
                Ok(())
            }
            other => Err(ScopeError::NotAScope {
                name: full_name.to_owned(),
                component: first.to_owned(),
                kind: other.kind(),
            }),
        }
    }

    /// Shallow merge: entries of `other` replace same-named entries.
    pub fn update(&mut self, other: Scope) {
        self.entries.extend(other.entries);
    }

    /// Remove a direct member, keeping the order of the others.
    pub fn remove(&mut self, component: &str) -> Option<Entry> {
        self.entries.shift_remove(component)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direct members in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Entry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a Scope {
    type Item = (&'a String, &'a Entry);
    type IntoIter = indexmap::map::Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, Entry)> for Scope {
    fn from_iter<I: IntoIterator<Item = (String, Entry)>>(iter: I) -> Self {
        Scope {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests;
