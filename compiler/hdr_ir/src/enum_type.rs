//! C++ enumerations as ordered, bidirectional name/value maps.

use std::fmt;

use indexmap::IndexMap;

use crate::name::is_identifier;

/// Errors from enumerator assignment and lookup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnumError {
    #[error("invalid enumerator name {name:?}")]
    InvalidName { name: String },
    #[error("no enumerator {key} in enum {enum_name}")]
    NotFound { enum_name: String, key: String },
}

/// Key for enum lookups: an enumerator name or a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumKey<'a> {
    Name(&'a str),
    Value(i128),
}

impl<'a> From<&'a str> for EnumKey<'a> {
    fn from(name: &'a str) -> Self {
        EnumKey::Name(name)
    }
}

macro_rules! enum_key_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for EnumKey<'_> {
                fn from(value: $int) -> Self {
                    EnumKey::Value(i128::from(value))
                }
            }
        )*
    };
}

enum_key_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl fmt::Display for EnumKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumKey::Name(name) => f.write_str(name),
            EnumKey::Value(value) => write!(f, "{value}"),
        }
    }
}

/// Result of an enum lookup: the opposite side of the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumItem<'a> {
    /// Looked up by name.
    Value(i128),
    /// Looked up by value; the first enumerator with that value.
    Name(&'a str),
}

/// A C++ enum: enumerators in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Enum {
    name: String,
    items: IndexMap<String, i128>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Enum {
            name: name.into(),
            items: IndexMap::new(),
        }
    }

    /// Display name (the enum's local name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add or overwrite an enumerator.
    pub fn insert(&mut self, name: &str, value: i128) -> Result<(), EnumError> {
        if !is_identifier(name) {
            return Err(EnumError::InvalidName {
                name: name.to_owned(),
            });
        }
        self.items.insert(name.to_owned(), value);
        Ok(())
    }

    /// Look up either direction.
    pub fn get<'k>(&self, key: impl Into<EnumKey<'k>>) -> Result<EnumItem<'_>, EnumError> {
        let key = key.into();
        let found = match key {
            EnumKey::Name(name) => self.value_of(name).map(EnumItem::Value),
            EnumKey::Value(value) => self.name_of(value).map(EnumItem::Name),
        };
        found.ok_or_else(|| EnumError::NotFound {
            enum_name: self.name.clone(),
            key: key.to_string(),
        })
    }

    pub fn value_of(&self, name: &str) -> Option<i128> {
        self.items.get(name).copied()
    }

    /// First enumerator holding `value`.
    pub fn name_of(&self, value: i128) -> Option<&str> {
        self.items
            .iter()
            .find(|(_, &v)| v == value)
            .map(|(name, _)| name.as_str())
    }

    pub fn contains<'k>(&self, key: impl Into<EnumKey<'k>>) -> bool {
        match key.into() {
            EnumKey::Name(name) => self.items.contains_key(name),
            EnumKey::Value(value) => self.items.values().any(|&v| v == value),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Enumerators in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i128)> + '_ {
        self.items.iter().map(|(name, &value)| (name.as_str(), value))
    }
}

impl fmt::Display for Enum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enum {}", self.name)
    }
}
