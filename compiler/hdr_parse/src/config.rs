//! Parser configuration.

/// Failure policy of a [`crate::Parser`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    /// Fail on lines no sub-parser recognizes. Defaults to `true`.
    pub strict: bool,

    /// Accept blank lines in strict mode. Defaults to `true`.
    pub ignore_empty: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            strict: true,
            ignore_empty: true,
        }
    }
}

impl ParseConfig {
    /// Accept every line, recognized or not.
    pub fn lenient() -> Self {
        Self {
            strict: false,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_strict(self, strict: bool) -> Self {
        Self { strict, ..self }
    }

    #[must_use]
    pub fn with_ignore_empty(self, ignore_empty: bool) -> Self {
        Self {
            ignore_empty,
            ..self
        }
    }
}
