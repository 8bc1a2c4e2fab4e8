//! The line parser trait and the composite [`Parser`].
//!
//! A dump is parsed one line at a time. Every registered sub-parser sees
//! every line, so a line may be applied by more than one of them (an
//! enumerator line is stored both by the enum parser and, through the
//! enum, by the constants parser). The composite only decides whether the
//! line counts as recognized and applies the failure policy of its
//! [`ParseConfig`].

use hdr_ir::{Entry, Scope};
use tracing::trace;

use crate::config::ParseConfig;
use crate::context::Context;
use crate::error::ParseError;

/// One recognizer of the dump format.
pub trait LineParser {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Apply `line` to `ctx.scope` if recognized.
    ///
    /// Returns `Ok(false)`, without side effects, for lines this parser does
    /// not handle.
    fn try_parse_line(&mut self, line: &str, ctx: &mut Context<'_>) -> Result<bool, ParseError>;

    /// Parse one line outside of a dump, returning the item's full name
    /// (not split into scopes) and the item.
    fn parse_single_line(&mut self, _line: &str) -> Result<(String, Entry), ParseError> {
        Err(ParseError::Unsupported {
            parser: self.name(),
        })
    }

    /// Forget per-document state such as disambiguation counters.
    fn reset(&mut self) {}
}

/// Runs a set of sub-parsers over whole dumps.
pub struct Parser {
    parsers: Vec<Box<dyn LineParser>>,
    config: ParseConfig,
}

impl Parser {
    pub fn new(config: ParseConfig) -> Self {
        Parser {
            parsers: Vec::new(),
            config,
        }
    }

    /// Register a sub-parser. Sub-parsers run in registration order.
    #[must_use]
    pub fn with(mut self, parser: impl LineParser + 'static) -> Self {
        self.push(Box::new(parser));
        self
    }

    pub fn push(&mut self, parser: Box<dyn LineParser>) {
        self.parsers.push(parser);
    }

    pub fn config(&self) -> ParseConfig {
        self.config
    }

    /// Parse a whole dump into a fresh scope.
    ///
    /// Counters of the sub-parsers are reset first, so numbering of
    /// anonymous items starts over for every document.
    pub fn parse(&mut self, data: &str) -> Result<Scope, ParseError> {
        self.reset();
        let mut scope = Scope::new();
        self.parse_into(data, &mut scope)?;
        Ok(scope)
    }

    /// Parse a dump into an existing scope.
    ///
    /// On error, the lines before the failing one stay applied.
    pub fn parse_into(&mut self, data: &str, scope: &mut Scope) -> Result<(), ParseError> {
        let lines: Vec<&str> = data.lines().collect();
        for (line_index, line) in lines.iter().enumerate() {
            let mut ctx = Context::new(&lines, line_index, scope);
            if !self.try_parse_line(line, &mut ctx)? {
                return Err(ParseError::UnrecognizedLine {
                    line: (*line).to_owned(),
                    line_number: ctx.line_number(),
                });
            }
        }
        Ok(())
    }
}

impl LineParser for Parser {
    fn name(&self) -> &'static str {
        "Parser"
    }

    fn try_parse_line(&mut self, line: &str, ctx: &mut Context<'_>) -> Result<bool, ParseError> {
        trace!(line_number = ctx.line_number(), line, "parsing line");

        let mut recognized = false;
        for parser in &mut self.parsers {
            recognized |= parser.try_parse_line(line, ctx)?;
        }

        Ok(recognized
            || !self.config.strict
            || (self.config.ignore_empty && line.trim().is_empty()))
    }

    /// The first sub-parser that yields an item wins.
    fn parse_single_line(&mut self, line: &str) -> Result<(String, Entry), ParseError> {
        self.parsers
            .iter_mut()
            .find_map(|parser| parser.parse_single_line(line).ok())
            .ok_or_else(|| ParseError::NoSingleValue {
                line: line.to_owned(),
            })
    }

    fn reset(&mut self) {
        for parser in &mut self.parsers {
            parser.reset();
        }
    }
}
