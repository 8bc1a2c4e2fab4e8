//! Scope tree and value types for C++ constant dumps.
//!
//! This crate holds the data model the rest of the pipeline writes into:
//! - [`name`]: qualified names, bracket-aware splitting, identifiers
//! - [`Value`]: decoded literal values, [`StructValue`] record instances
//! - [`Scope`]: ordered, qualified-name addressable containers
//! - [`Enum`] and [`Record`]: enumerations and class/struct types
//!
//! # Design
//!
//! Entries of a scope are a closed sum ([`Entry`]), so consumers match
//! exhaustively instead of inspecting types at runtime. Scopes own their
//! children; nothing points back to a parent.

mod enum_type;
pub mod name;
mod record;
mod scope;
mod value;

pub use enum_type::{Enum, EnumError, EnumItem, EnumKey};
pub use record::{record_type_name, sanitize_field_names, split_field_list, Record, RecordError};
pub use scope::{Entry, Lookup, Scope, ScopeError};
pub use value::{StructLayout, StructValue, Value};
