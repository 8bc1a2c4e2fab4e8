//! Decoded literal values.
//!
//! A [`Value`] is what one literal expression of the dump turns into. Record
//! instances share a [`StructLayout`] through `Arc`, so decoding thousands of
//! instances of the same record does not repeat its field names.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

/// A decoded compile-time value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Integer literal. Wide enough for every 64-bit signed or unsigned value.
    Int(i128),
    /// Floating-point literal in exponential form.
    Float(f64),
    Bool(bool),
    /// Single-quoted literal holding exactly one character.
    Char(char),
    Str(String),
    /// Code units that did not decode in their declared encoding.
    Bytes(Vec<u8>),
    /// Array literal.
    List(Vec<Value>),
    /// Arguments of a call to an unknown type.
    Tuple(Vec<Value>),
    /// Instance of a registered record type.
    Struct(StructValue),
    /// Text the decoder did not recognize, kept verbatim.
    Text(String),
}

impl Value {
    /// The fallback for calls to unknown types: a single argument is
    /// returned as is, anything else becomes a tuple.
    pub fn untyped(mut fields: Vec<Value>) -> Self {
        if fields.len() == 1 {
            if let Some(only) = fields.pop() {
                return only;
            }
        }
        Value::Tuple(fields)
    }

    /// Integral view of the value, used for enumerators.
    ///
    /// Characters map to their code point and booleans to 0/1.
    pub fn as_integral(&self) -> Option<i128> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Char(c) => Some(i128::from(u32::from(*c))),
            Value::Bool(b) => Some(i128::from(*b)),
            _ => None,
        }
    }

    /// String contents of `Str` and `Text` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) | Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Struct(_) => "struct",
            Value::Text(_) => "text",
        }
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

fn write_sequence(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c:?}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Bytes(bytes) => write!(f, "b\"{}\"", bytes.escape_ascii()),
            Value::List(items) => {
                f.write_str("[")?;
                write_sequence(f, items)?;
                f.write_str("]")
            }
            Value::Tuple(items) => {
                f.write_str("(")?;
                write_sequence(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Value::Struct(value) => write!(f, "{value}"),
            Value::Text(text) => f.write_str(text),
        }
    }
}

// StructLayout

/// Field layout shared by every instance of one record type.
#[derive(Debug, PartialEq, Eq)]
pub struct StructLayout {
    type_name: String,
    fields: Vec<String>,
    field_indices: FxHashMap<String, usize>,
}

impl StructLayout {
    /// Create a layout. Field names are expected to be unique.
    pub fn new(type_name: impl Into<String>, fields: Vec<String>) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        StructLayout {
            type_name: type_name.into(),
            fields,
            field_indices,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Field names in declaration order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn get_index(&self, field: &str) -> Option<usize> {
        self.field_indices.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// StructValue

/// Instance of a record type: values in layout order.
#[derive(Clone, Debug, PartialEq)]
pub struct StructValue {
    layout: Arc<StructLayout>,
    values: Vec<Value>,
}

impl StructValue {
    /// Pair a layout with its values. The caller checks the arity.
    pub(crate) fn new(layout: Arc<StructLayout>, values: Vec<Value>) -> Self {
        debug_assert_eq!(layout.len(), values.len());
        StructValue { layout, values }
    }

    pub fn type_name(&self) -> &str {
        self.layout.type_name()
    }

    pub fn layout(&self) -> &StructLayout {
        &self.layout
    }

    /// Values in field order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get_field(&self, field: &str) -> Option<&Value> {
        let index = self.layout.get_index(field)?;
        self.values.get(index)
    }

    /// `(field, value)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.layout
            .fields()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

impl fmt::Display for StructValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.type_name())?;
        for (i, (field, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}={value}")?;
        }
        f.write_str(")")
    }
}
