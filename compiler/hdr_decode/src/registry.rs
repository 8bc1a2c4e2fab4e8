//! Constructor lookup for named-type calls.
//!
//! The decoder resolves `TypeName(...)` through a [`TypeRegistry`]. The
//! registries compose: records registered in the scope being filled come
//! first and shadow the built-in character types.
//!
//! ```text
//! Layered<&Scope, BuiltinTypes>
//!     ├── Scope         geo::Point, Box<int>, ...
//!     └── BuiltinTypes  char8_t, char16_t, wchar_t[], ...
//! ```

use hdr_ir::{Record, Scope, Value};

use crate::builtins::{Builtin, ConstructError};

/// A callable type.
#[derive(Clone, Copy, Debug)]
pub enum Constructor<'a> {
    Builtin(Builtin),
    Record(&'a Record),
}

impl Constructor<'_> {
    pub fn name(&self) -> &str {
        match self {
            Constructor::Builtin(builtin) => builtin.name(),
            Constructor::Record(record) => record.name(),
        }
    }

    pub fn call(&self, args: &[Value]) -> Result<Value, ConstructError> {
        match self {
            Constructor::Builtin(builtin) => builtin.call(args),
            Constructor::Record(record) => {
                record.construct(args.to_vec()).map_err(ConstructError::from)
            }
        }
    }
}

/// Name to constructor lookup.
pub trait TypeRegistry {
    fn resolve(&self, name: &str) -> Option<Constructor<'_>>;
}

impl<T: TypeRegistry + ?Sized> TypeRegistry for &T {
    fn resolve(&self, name: &str) -> Option<Constructor<'_>> {
        (**self).resolve(name)
    }
}

/// The built-in character types.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinTypes;

impl TypeRegistry for BuiltinTypes {
    fn resolve(&self, name: &str) -> Option<Constructor<'_>> {
        Builtin::from_name(name).map(Constructor::Builtin)
    }
}

/// Records stored in a scope, addressed by qualified name.
impl TypeRegistry for Scope {
    fn resolve(&self, name: &str) -> Option<Constructor<'_>> {
        self.get_record(name).map(Constructor::Record)
    }
}

/// Two registries, `front` consulted first.
#[derive(Clone, Copy, Debug)]
pub struct Layered<A, B> {
    pub front: A,
    pub back: B,
}

impl<A, B> Layered<A, B> {
    pub fn new(front: A, back: B) -> Self {
        Layered { front, back }
    }
}

impl<A: TypeRegistry, B: TypeRegistry> TypeRegistry for Layered<A, B> {
    fn resolve(&self, name: &str) -> Option<Constructor<'_>> {
        self.front
            .resolve(name)
            .or_else(|| self.back.resolve(name))
    }
}

/// Records of `scope` layered over the built-in types.
pub fn scope_types(scope: &Scope) -> Layered<&Scope, BuiltinTypes> {
    Layered::new(scope, BuiltinTypes)
}
