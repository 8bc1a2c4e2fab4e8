//! Stack growth for recursive literal decoding.
//!
//! Literal expressions in a plugin dump nest arbitrarily: arrays of records
//! holding arrays of char-type calls, and so on. The value decoder recurses
//! once per nesting level, so a pathological dump line could exhaust the
//! thread stack. Every recursive step of the decoder goes through
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` allocates a fresh stack segment when the
//!   remaining space drops below the red zone.
//! - **WASM targets**: plain passthrough.

/// Remaining stack below which a new segment is allocated (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn decode(raw: &str) -> Value {
///     ensure_sufficient_stack(|| match split_array(raw) {
///         Some(items) => Value::List(items.map(decode).collect()),
///         None => Value::Text(raw.to_owned()),
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
