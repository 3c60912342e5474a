use std::fmt::{Display, Formatter};
use std::ops::Range;

use colored::Colorize;
use thiserror::Error;

/// The error returned by the conversion helpers. Apart from [`BaseError::EmptyAlphabet`], all
/// of these concern a single input token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BaseError {
    #[error("alphabet is empty")]
    EmptyAlphabet,
    #[error("'{}': not in alphabet", std::ascii::escape_default(*.0))]
    UnknownSymbol(u8),
    #[error("\"{0}\": not an integer")]
    InvalidNumber(String),
    #[error("standard counting needs at least two symbols")]
    DegenerateBase,
}


/// The error type returned by [`parse`](crate::parse) and [`build`](crate::build). Contains the
/// description of the error and the byte range of the expression it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    reason: String,
    span: Range<usize>,
}

impl ParseError {
    pub fn new(text: impl Into<String>, span: Range<usize>) -> ParseError {
        ParseError{reason: text.into(), span}
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Shows the location of the parse error on standard error. For this purpose, the input
    /// expression is reproduced in full, with the part causing the error highlighted.
    ///
    /// For the actual description of the error, use the `Display` trait.
    pub fn display(&self, input: &str) {
        let span = self.span();
        let start = span.start.min(input.len());
        let end = span.end.clamp(start, input.len());
        match (input.get(..start), input.get(start..end), input.get(end..)) {
            (Some(pre), Some(bad), Some(post)) if !bad.is_empty() =>
                eprintln!("{pre}{}{post}", bad.red().bold()),
            // empty span: mark the position itself
            (Some(pre), _, Some(post)) =>
                eprintln!("{pre}{}{post}", "_".red().bold()),
            _ => eprintln!("{input}")
        }
    }
}

impl std::error::Error for ParseError { }

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.reason, f)
    }
}
