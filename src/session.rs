use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use crate::base::*;
use crate::base::tracing::{Event, Tracer};
use crate::{decode, encode};

/// Everything that stays fixed while a stream of tokens is converted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub alphabet: Alphabet,
    pub convention: Convention,
    pub origin: Origin,
    pub direction: Direction,
}

/// Counts of the tokens seen by [`Session::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub converted: usize,
    pub skipped: usize,
}

impl Report {
    /// A run counts as successful if at least one token was converted.
    pub fn success(&self) -> bool {
        self.converted > 0
    }
}

/// A `Session` converts input tokens one at a time according to a [`Config`], reporting every
/// outcome to its [`Tracer`].
pub struct Session {
    config: Config,
    tracer: Rc<RefCell<dyn Tracer>>,
}

impl Session {
    pub fn new(config: Config) -> Session {
        Session{config, tracer: Rc::new(RefCell::new(()))}
    }

    pub fn with_tracer(mut self, tracer: Rc<RefCell<dyn Tracer>>) -> Session {
        self.tracer = tracer;
        self
    }

    /// Converts a single token. In the encode direction, the token must be a decimal integer.
    pub fn convert(&self, token: &[u8]) -> Result<Vec<u8>, BaseError> {
        let Config{alphabet, convention, origin, direction} = &self.config;
        match direction {
            Direction::Encode =>
                encode(&parse_number(token)?, alphabet, *convention, *origin),
            Direction::Decode =>
                Ok(decode(token, alphabet, *convention, *origin)?.to_string().into_bytes())
        }
    }

    /// Reads whitespace-separated tokens from `input` until its end and writes one line to
    /// `output` for each token that converts. Tokens that fail are skipped.
    ///
    /// Only I/O errors abort the run.
    pub fn run(&self, mut input: impl BufRead, mut output: impl Write) -> io::Result<Report> {
        let mut report = Report::default();
        let mut line = Vec::new();
        loop {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            for token in line.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty()) {
                match self.convert(token) {
                    Ok(out) => {
                        output.write_all(&out)?;
                        output.write_all(b"\n")?;
                        self.tracer.borrow_mut().log(Event::Converted{input: token, output: &out});
                        report.converted += 1;
                    },
                    Err(reason) => {
                        self.tracer.borrow_mut().log(Event::Skipped{input: token, reason: &reason});
                        report.skipped += 1;
                    }
                }
            }
        }
        output.flush()?;
        Ok(report)
    }
}

/// Reads a decimal integer with an optional leading minus sign. Nothing else is accepted, in
/// particular no `+` and no digit separators.
fn parse_number(token: &[u8]) -> Result<Number, BaseError> {
    let digits = token.strip_prefix(b"-").unwrap_or(token);
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(BaseError::InvalidNumber(String::from_utf8_lossy(token).into_owned()));
    }
    Number::parse_bytes(token, 10)
        .ok_or_else(|| BaseError::InvalidNumber(String::from_utf8_lossy(token).into_owned()))
}
