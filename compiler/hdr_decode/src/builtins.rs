//! Built-in character types.
//!
//! The plugin prints non-narrow character values as calls:
//! `char16_t(65)` for a scalar, `char16_t[](char16_t(104), char16_t(105))`
//! for an array. Scalars carry one code unit; the unit is laid out in
//! native byte order and decoded in the encoding that matches its width.
//!
//! A unit that does not decode on its own (half of a surrogate pair, one
//! byte of a multi-byte UTF-8 sequence) becomes [`Value::Bytes`]. The string
//! variants join adjacent byte chunks before decoding, so a pair split over
//! two scalars still comes out as one character.
//!
//! `wchar_t` is 16 bits on some targets and 32 on others. A `wchar_t` unit
//! that is not a code point on its own is a surrogate half and becomes its
//! 16-bit unit as bytes. `wchar_t[]` decodes such runs as UTF-16, putting
//! U+FFFD in place of halves left unpaired.

use hdr_ir::{RecordError, Value};

/// Errors from calling a constructor with unsuitable arguments.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConstructError {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error("{type_name} takes {expected} argument, got {got}")]
    Arity {
        type_name: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("{type_name}: {value} is not a valid code unit")]
    InvalidCodePoint { type_name: &'static str, value: i128 },
    #[error("{type_name} cannot take a {kind} argument")]
    UnexpectedArgument {
        type_name: &'static str,
        kind: &'static str,
    },
    #[error("{type_name}: code units do not form valid text")]
    Decode { type_name: &'static str },
}

/// Unicode transformation used by a fixed-width character type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharEncoding {
    Utf8,
    Utf16,
    Utf32,
}

impl CharEncoding {
    /// Width of one code unit in bytes.
    pub fn unit_width(self) -> usize {
        match self {
            CharEncoding::Utf8 => 1,
            CharEncoding::Utf16 => 2,
            CharEncoding::Utf32 => 4,
        }
    }

    /// Decode native-endian code units.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            CharEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            CharEncoding::Utf16 => {
                if bytes.len() % 2 != 0 {
                    return None;
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|unit| u16::from_ne_bytes([unit[0], unit[1]]))
                    .collect();
                String::from_utf16(&units).ok()
            }
            CharEncoding::Utf32 => {
                if bytes.len() % 4 != 0 {
                    return None;
                }
                bytes
                    .chunks_exact(4)
                    .map(|unit| {
                        char::from_u32(u32::from_ne_bytes([unit[0], unit[1], unit[2], unit[3]]))
                    })
                    .collect()
            }
        }
    }

    /// Native-endian bytes of one code unit, `None` when `value` does not fit.
    fn unit_bytes(self, value: i128) -> Option<Vec<u8>> {
        match self {
            CharEncoding::Utf8 => u8::try_from(value).ok().map(|unit| vec![unit]),
            CharEncoding::Utf16 => u16::try_from(value)
                .ok()
                .map(|unit| unit.to_ne_bytes().to_vec()),
            CharEncoding::Utf32 => u32::try_from(value)
                .ok()
                .map(|unit| unit.to_ne_bytes().to_vec()),
        }
    }
}

/// A constructor known without any dump input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Builtin {
    /// `char8_t`, `char16_t`, `char32_t`: one code unit.
    Char(CharEncoding),
    /// `wchar_t`: one code point, or one UTF-16 surrogate half.
    WideChar,
    /// `char8_t[]`, `char16_t[]`, `char32_t[]`: concatenated chunks.
    CharString(CharEncoding),
    /// `wchar_t[]`: concatenated characters.
    WideString,
}

impl Builtin {
    pub const ALL: [Builtin; 8] = [
        Builtin::WideChar,
        Builtin::Char(CharEncoding::Utf8),
        Builtin::Char(CharEncoding::Utf16),
        Builtin::Char(CharEncoding::Utf32),
        Builtin::WideString,
        Builtin::CharString(CharEncoding::Utf8),
        Builtin::CharString(CharEncoding::Utf16),
        Builtin::CharString(CharEncoding::Utf32),
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::WideChar => "wchar_t",
            Builtin::Char(CharEncoding::Utf8) => "char8_t",
            Builtin::Char(CharEncoding::Utf16) => "char16_t",
            Builtin::Char(CharEncoding::Utf32) => "char32_t",
            Builtin::WideString => "wchar_t[]",
            Builtin::CharString(CharEncoding::Utf8) => "char8_t[]",
            Builtin::CharString(CharEncoding::Utf16) => "char16_t[]",
            Builtin::CharString(CharEncoding::Utf32) => "char32_t[]",
        }
    }

    pub fn call(self, args: &[Value]) -> Result<Value, ConstructError> {
        match self {
            Builtin::Char(encoding) => {
                let unit = self.single_integral(args)?;
                let bytes = encoding.unit_bytes(unit).ok_or(ConstructError::InvalidCodePoint {
                    type_name: self.name(),
                    value: unit,
                })?;
                Ok(match encoding.decode(&bytes) {
                    Some(text) => text_value(text),
                    None => Value::Bytes(bytes),
                })
            }
            Builtin::WideChar => {
                let code_point = self.single_integral(args)?;
                let invalid = ConstructError::InvalidCodePoint {
                    type_name: self.name(),
                    value: code_point,
                };
                let unit = u32::try_from(code_point).map_err(|_| invalid.clone())?;
                if let Some(c) = char::from_u32(unit) {
                    return Ok(Value::Char(c));
                }
                u16::try_from(unit)
                    .map(|half| Value::Bytes(half.to_ne_bytes().to_vec()))
                    .map_err(|_| invalid)
            }
            Builtin::CharString(_) | Builtin::WideString => self.concat(args).map(Value::Str),
        }
    }

    fn single_integral(self, args: &[Value]) -> Result<i128, ConstructError> {
        let [arg] = args else {
            return Err(ConstructError::Arity {
                type_name: self.name(),
                expected: 1,
                got: args.len(),
            });
        };
        match arg {
            Value::Int(n) => Ok(*n),
            other => Err(ConstructError::UnexpectedArgument {
                type_name: self.name(),
                kind: other.kind(),
            }),
        }
    }

    /// Join text chunks, decoding each run of byte chunks as a whole.
    fn concat(self, args: &[Value]) -> Result<String, ConstructError> {
        let mut text = String::new();
        let mut pending: Vec<u8> = Vec::new();

        for arg in args {
            match arg {
                Value::Char(c) => {
                    self.flush(&mut pending, &mut text)?;
                    text.push(*c);
                }
                Value::Str(chunk) => {
                    self.flush(&mut pending, &mut text)?;
                    text.push_str(chunk);
                }
                Value::Bytes(bytes) => pending.extend_from_slice(bytes),
                other => {
                    return Err(ConstructError::UnexpectedArgument {
                        type_name: self.name(),
                        kind: other.kind(),
                    })
                }
            }
        }
        self.flush(&mut pending, &mut text)?;
        Ok(text)
    }

    fn flush(self, pending: &mut Vec<u8>, text: &mut String) -> Result<(), ConstructError> {
        if pending.is_empty() {
            return Ok(());
        }
        match self {
            Builtin::Char(encoding) | Builtin::CharString(encoding) => {
                let decoded = encoding
                    .decode(pending)
                    .ok_or(ConstructError::Decode { type_name: self.name() })?;
                text.push_str(&decoded);
            }
            Builtin::WideChar | Builtin::WideString => {
                text.push_str(&decode_utf16_lossy(pending));
            }
        }
        pending.clear();
        Ok(())
    }
}

/// Native-endian UTF-16 with unpaired surrogates (and a trailing odd byte)
/// replaced by U+FFFD.
fn decode_utf16_lossy(bytes: &[u8]) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|unit| u16::from_ne_bytes([unit[0], unit[1]]));
    let mut text: String = char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    if bytes.len() % 2 != 0 {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

fn text_value(text: String) -> Value {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Value::Char(c),
        _ => Value::Str(text),
    }
}
