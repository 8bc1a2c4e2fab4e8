//! Qualified names and bracket-aware text scanning.
//!
//! Names in a plugin dump are C++ qualified names such as
//! `ns::Foo<std::pair<int, int>>::operator<(int)::(literal)`. Splitting them
//! on [`SEPARATOR`] must ignore separators hidden inside template arguments
//! or parentheses, and must not mistake the `<` of `operator<` for the start
//! of a template argument list.
//!
//! The same module hosts the comma splitting used for argument lists of
//! literal expressions, which tracks every bracket kind and skips quoted
//! text.

use std::borrow::Cow;

/// Scope separator used in qualified names.
pub const SEPARATOR: &str = "::";

/// Marker the compiler prints in place of an anonymous namespace name.
pub const ANONYMOUS_NAMESPACE: &str = "(anonymous namespace)";

const ANONYMOUS_NAMESPACE_PREFIX: &str = concat!("(anonymous namespace)", "::");
const ANONYMOUS_NAMESPACE_SUFFIX: &str = concat!("::", "(anonymous namespace)");

const OPERATOR: &[u8] = b"operator";

/// Strip one leading separator and elide anonymous namespace markers.
///
/// `::(anonymous namespace)::detail::N` becomes `detail::N`.
pub fn normalize(name: &str) -> Cow<'_, str> {
    let name = name.strip_prefix(SEPARATOR).unwrap_or(name);
    if !name.contains(ANONYMOUS_NAMESPACE) {
        return Cow::Borrowed(name);
    }

    let mut cleaned = name.replace(ANONYMOUS_NAMESPACE_PREFIX, "");
    if let Some(stripped) = cleaned.strip_suffix(ANONYMOUS_NAMESPACE_SUFFIX) {
        cleaned.truncate(stripped.len());
    } else if cleaned == ANONYMOUS_NAMESPACE {
        cleaned.clear();
    }
    Cow::Owned(cleaned)
}

/// Split a qualified name at its first unguarded separator.
///
/// Returns the first component and the remainder, if any.
pub fn split_first(name: &str) -> (&str, Option<&str>) {
    match unguarded_separators(name).first() {
        Some(&index) => (&name[..index], Some(&name[index + SEPARATOR.len()..])),
        None => (name, None),
    }
}

/// Split a qualified name at its last unguarded separator.
///
/// Returns the enclosing scope path (if any) and the local name.
pub fn split_last(name: &str) -> (Option<&str>, &str) {
    match unguarded_separators(name).last() {
        Some(&index) => (Some(&name[..index]), &name[index + SEPARATOR.len()..]),
        None => (None, name),
    }
}

/// Byte offsets of every separator that is outside brackets and template
/// arguments.
fn unguarded_separators(name: &str) -> Vec<usize> {
    let bytes = name.as_bytes();
    let mut separators = Vec::new();
    let mut nested = 0usize;
    let mut template = 0usize;

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' | b'[' | b'{' => nested += 1,
            b')' | b']' | b'}' => nested = nested.saturating_sub(1),
            b'<' if !is_operator_symbol(bytes, i) => template += 1,
            b'>' if !is_operator_symbol(bytes, i) => template = template.saturating_sub(1),
            b':' if nested == 0 && template == 0 && bytes.get(i + 1) == Some(&b':') => {
                separators.push(i);
                i += SEPARATOR.len();
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    separators
}

/// Whether the `<` or `>` at `index` belongs to an `operator` token
/// (`operator<`, `operator<=>`, `operator->`, `operator>>=`, ...).
fn is_operator_symbol(bytes: &[u8], index: usize) -> bool {
    let mut start = index;
    while start > 0 && matches!(bytes[start - 1], b'<' | b'>' | b'=' | b'-') {
        start -= 1;
    }
    let head = bytes[..start].trim_ascii_end();
    let Some(prefix) = head.strip_suffix(OPERATOR) else {
        return false;
    };
    prefix.last().map_or(true, |&b| !is_ident_byte(b))
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || !b.is_ascii()
}

/// Remove template argument lists from a name.
///
/// `ns::Box<int>::Inner<char>` becomes `ns::Box::Inner`. A stray `>` is kept
/// as ordinary text; an unclosed `<` drops the rest of the name.
pub fn remove_template(name: &str) -> String {
    let bytes = name.as_bytes();
    let mut stripped = String::with_capacity(name.len());
    let mut depth = 0usize;
    let mut kept_from = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if !matches!(b, b'<' | b'>') || is_operator_symbol(bytes, i) {
            continue;
        }
        if b == b'<' {
            if depth == 0 {
                stripped.push_str(&name[kept_from..i]);
            }
            depth += 1;
        } else if depth > 0 {
            depth -= 1;
            if depth == 0 {
                kept_from = i + 1;
            }
        }
    }
    if depth == 0 {
        stripped.push_str(&name[kept_from..]);
    }
    stripped
}

// Bracket matching for literal expressions

fn closing_bracket(open: u8) -> Option<u8> {
    match open {
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        b'{' => Some(b'}'),
        b'<' => Some(b'>'),
        _ => None,
    }
}

/// Offsets of every top-level `separator`, or `None` when brackets or
/// quotes do not balance.
fn top_level_positions(text: &str, separator: Option<u8>) -> Option<Vec<usize>> {
    let mut expected_closers: Vec<u8> = Vec::new();
    let mut positions = Vec::new();
    let mut quote: Option<u8> = None;
    let mut escaped = false;

    for (i, &b) in text.as_bytes().iter().enumerate() {
        if let Some(delimiter) = quote {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == delimiter {
                quote = None;
            }
            continue;
        }

        if let Some(closer) = closing_bracket(b) {
            expected_closers.push(closer);
        } else if matches!(b, b')' | b']' | b'}' | b'>') {
            if expected_closers.pop() != Some(b) {
                return None;
            }
        } else if matches!(b, b'"' | b'\'') {
            quote = Some(b);
        } else if Some(b) == separator && expected_closers.is_empty() {
            positions.push(i);
        }
    }

    (expected_closers.is_empty() && quote.is_none()).then_some(positions)
}

/// Whether every bracket in `text` is closed by its matching partner.
///
/// Quoted text is skipped, so `("(", ")")` counts as balanced.
pub fn has_balanced_brackets(text: &str) -> bool {
    top_level_positions(text, None).is_some()
}

/// Split `text` on top-level `separator` bytes and trim each piece.
///
/// Returns `None` when brackets do not balance. Empty (or all-blank) input
/// yields no pieces.
pub fn contextual_split(text: &str, separator: u8) -> Option<Vec<&str>> {
    if text.trim().is_empty() {
        return Some(Vec::new());
    }

    let positions = top_level_positions(text, Some(separator))?;
    let mut pieces = Vec::with_capacity(positions.len() + 1);
    let mut start = 0;
    for position in positions {
        pieces.push(text[start..position].trim());
        start = position + 1;
    }
    pieces.push(text[start..].trim());
    Some(pieces)
}

// Identifiers

/// Whether `name` is a plain identifier (letter or `_`, then letters,
/// digits or `_`).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// Whether `name` is a C++ keyword or alternative operator token.
pub fn is_reserved_word(name: &str) -> bool {
    matches!(
        name,
        "alignas"
            | "alignof"
            | "and"
            | "and_eq"
            | "asm"
            | "auto"
            | "bitand"
            | "bitor"
            | "bool"
            | "break"
            | "case"
            | "catch"
            | "char"
            | "char8_t"
            | "char16_t"
            | "char32_t"
            | "class"
            | "compl"
            | "concept"
            | "const"
            | "consteval"
            | "constexpr"
            | "constinit"
            | "const_cast"
            | "continue"
            | "co_await"
            | "co_return"
            | "co_yield"
            | "decltype"
            | "default"
            | "delete"
            | "do"
            | "double"
            | "dynamic_cast"
            | "else"
            | "enum"
            | "explicit"
            | "export"
            | "extern"
            | "false"
            | "float"
            | "for"
            | "friend"
            | "goto"
            | "if"
            | "inline"
            | "int"
            | "long"
            | "mutable"
            | "namespace"
            | "new"
            | "noexcept"
            | "not"
            | "not_eq"
            | "nullptr"
            | "operator"
            | "or"
            | "or_eq"
            | "private"
            | "protected"
            | "public"
            | "register"
            | "reinterpret_cast"
            | "requires"
            | "return"
            | "short"
            | "signed"
            | "sizeof"
            | "static"
            | "static_assert"
            | "static_cast"
            | "struct"
            | "switch"
            | "template"
            | "this"
            | "thread_local"
            | "throw"
            | "true"
            | "try"
            | "typedef"
            | "typeid"
            | "typename"
            | "union"
            | "unsigned"
            | "using"
            | "virtual"
            | "void"
            | "volatile"
            | "wchar_t"
            | "while"
            | "xor"
            | "xor_eq"
    )
}
