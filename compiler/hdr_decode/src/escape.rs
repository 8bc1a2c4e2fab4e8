//! Backslash escapes inside quoted literals.
//!
//! The plugin prints non-printable characters of narrow strings as octal
//! byte escapes, so `é` arrives as `\303\251`. Numeric byte escapes are
//! collected into a byte run and decoded as UTF-8 once the run ends; a run
//! that is not valid UTF-8 maps every byte to the code point of the same
//! value (Latin-1).

use std::iter::Peekable;
use std::str::Chars;

/// Expand the escapes of a quoted literal body (quotes already removed).
///
/// Unknown escapes are kept verbatim, including the backslash.
pub fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut bytes = Vec::new();
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_bytes(&mut bytes, &mut out);
            out.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            flush_bytes(&mut bytes, &mut out);
            out.push('\\');
            break;
        };

        match escape {
            '0'..='7' => {
                let mut digits = String::from(escape);
                digits.push_str(&take_digits(&mut chars, 8, 2));
                push_numeric(&digits, 8, &mut bytes, &mut out);
            }
            'x' => {
                let digits = take_digits(&mut chars, 16, 2);
                if digits.is_empty() {
                    flush_bytes(&mut bytes, &mut out);
                    out.push_str("\\x");
                } else {
                    push_numeric(&digits, 16, &mut bytes, &mut out);
                }
            }
            'u' | 'U' => {
                flush_bytes(&mut bytes, &mut out);
                push_universal(escape, &mut chars, &mut out);
            }
            _ => {
                flush_bytes(&mut bytes, &mut out);
                match simple_escape(escape) {
                    Some(expanded) => out.push(expanded),
                    None => {
                        out.push('\\');
                        out.push(escape);
                    }
                }
            }
        }
    }
    flush_bytes(&mut bytes, &mut out);
    out
}

fn simple_escape(escape: char) -> Option<char> {
    Some(match escape {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'v' => '\u{0B}',
        '\\' | '\'' | '"' | '?' => escape,
        _ => return None,
    })
}

fn take_digits(chars: &mut Peekable<Chars<'_>>, radix: u32, max: usize) -> String {
    let mut digits = String::new();
    while digits.len() < max {
        match chars.peek() {
            Some(&c) if c.is_digit(radix) => {
                digits.push(c);
                chars.next();
            }
            _ => break,
        }
    }
    digits
}

/// Octal and hex escapes: values up to 0xFF are bytes, larger octal values
/// (`\777`) are code points.
fn push_numeric(digits: &str, radix: u32, bytes: &mut Vec<u8>, out: &mut String) {
    let Ok(value) = u32::from_str_radix(digits, radix) else {
        return;
    };
    if let Ok(byte) = u8::try_from(value) {
        bytes.push(byte);
    } else if let Some(c) = char::from_u32(value) {
        flush_bytes(bytes, out);
        out.push(c);
    }
}

/// `\uXXXX`, `\UXXXXXXXX` and `\u{...}`.
fn push_universal(escape: char, chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    let braced = escape == 'u' && chars.peek() == Some(&'{');
    let digits = if braced {
        chars.next();
        let digits = take_digits(chars, 16, 6);
        if chars.peek() == Some(&'}') {
            chars.next();
        } else {
            out.push_str("\\u{");
            out.push_str(&digits);
            return;
        }
        digits
    } else {
        let width = if escape == 'u' { 4 } else { 8 };
        let digits = take_digits(chars, 16, width);
        if digits.len() != width {
            out.push('\\');
            out.push(escape);
            out.push_str(&digits);
            return;
        }
        digits
    };

    match u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32) {
        Some(c) => out.push(c),
        None if braced => {
            out.push_str("\\u{");
            out.push_str(&digits);
            out.push('}');
        }
        None => {
            out.push('\\');
            out.push(escape);
            out.push_str(&digits);
        }
    }
}

fn flush_bytes(bytes: &mut Vec<u8>, out: &mut String) {
    if bytes.is_empty() {
        return;
    }
    match String::from_utf8(std::mem::take(bytes)) {
        Ok(text) => out.push_str(&text),
        Err(err) => out.extend(err.into_bytes().into_iter().map(char::from)),
    }
}
