//! Line parsers for the text dump of the constants plugin.
//!
//! The dump is line oriented:
//!
//! ```text
//! geo::Point{x, y}                          RecordsParser
//! enum geo::Axis {                          EnumsParser
//! geo::Axis::X = 0,
//! }
//! geo::ORIGIN = geo::Point(0, 0)            ConstantsParser
//! # literal geo::(literal) = "origin"       LiteralsParser
//! ```
//!
//! Each recognizer implements [`LineParser`]; a [`Parser`] runs a set of
//! them over every line and applies the strict/lenient policy of its
//! [`ParseConfig`].

mod config;
mod constants;
mod context;
mod enums;
mod error;
mod literals;
mod parser;
mod records;

pub use config::ParseConfig;
pub use constants::{split_constant, ConstantsParser};
pub use context::Context;
pub use enums::{is_anonymous_name, EnumsParser};
pub use error::ParseError;
pub use literals::{LiteralsParser, LITERAL_NAME};
pub use parser::{LineParser, Parser};
pub use records::{split_record, RecordsParser};

/// A parser with every recognizer of the dump format registered.
pub fn standard_parser(config: ParseConfig) -> Parser {
    Parser::new(config)
        .with(RecordsParser::new())
        .with(EnumsParser::new())
        .with(ConstantsParser::new())
        .with(LiteralsParser::new())
}
