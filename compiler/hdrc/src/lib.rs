//! Headerscope: C++ constant dumps as scope trees.
//!
//! The constants plugin prints every compile-time constant of a translation
//! unit as text. [`load_dump`] parses such a dump into a [`SrcData`], the
//! scope tree together with the macros captured alongside it, and
//! [`render`] turns a scope back into text for inspection.
//!
//! ```text
//! dump text ──► hdr_parse::Parser ──► hdr_ir::Scope ──► render::{tree, pretty}
//!                    │
//!                    └─ hdr_decode::decode_value (literal expressions)
//! ```

use std::sync::Once;

use indexmap::IndexMap;
use tracing::debug;

pub mod emitter;
pub mod render;

pub use emitter::{Emitter, IoEmitter, StringEmitter};
pub use hdr_decode::{decode_value, scope_types, BuiltinTypes, TypeRegistry};
pub use hdr_ir::{Entry, Enum, Lookup, Record, Scope, ScopeError, StructValue, Value};
pub use hdr_parse::{standard_parser, LineParser, ParseConfig, ParseError, Parser};
pub use render::{enums, RenderConfig};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing if `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call installs a subscriber.
///
/// # Example
///
/// ```bash
/// RUST_LOG=hdr_parse=debug cargo test -p hdrc
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Constants of one or more dumps plus their preprocessor macros.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SrcData {
    pub scope: Scope,
    /// Macro name to replacement text, in definition order.
    pub macros: IndexMap<String, String>,
}

impl SrcData {
    pub fn new(scope: Scope, macros: IndexMap<String, String>) -> Self {
        SrcData { scope, macros }
    }

    /// Merge `other` into `self`; on name clashes `other` wins.
    ///
    /// The scope merge is shallow: a top-level namespace present in both
    /// is replaced, not combined.
    pub fn update(&mut self, other: SrcData) {
        self.scope.update(other.scope);
        self.macros.extend(other.macros);
    }

    /// Parse `dump` on top of the current scope and add `macros`.
    ///
    /// Entries from earlier loads stay visible to the decoder, so records
    /// declared in one dump construct values in the next. On error, the
    /// lines before the failing one stay applied and `macros` are dropped.
    pub fn load<I>(&mut self, dump: &str, macros: I, config: ParseConfig) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        standard_parser(config).parse_into(dump, &mut self.scope)?;
        self.macros.extend(macros);
        debug!(
            entries = self.scope.len(),
            macros = self.macros.len(),
            "dump loaded"
        );
        Ok(())
    }
}

/// Parse a dump with the standard parser stack.
pub fn load_dump<I>(dump: &str, macros: I, config: ParseConfig) -> Result<SrcData, ParseError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut data = SrcData::default();
    data.load(dump, macros, config)?;
    Ok(data)
}

/// Decode one literal expression against the records of `scope`.
pub fn decode_in_scope(raw: &str, scope: &Scope) -> Value {
    decode_value(raw, &scope_types(scope))
}
