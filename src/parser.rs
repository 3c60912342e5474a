use crate::base::*;

/// Where the scanner is with respect to a `[start-end]` range.
#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Outside,
    /// After `[`, at the given byte offset.
    ExpectStart(usize),
    ExpectSeparator(usize, u8),
    ExpectEnd(usize, u8),
    ExpectClose(usize, u8, u8),
}

/// Builds an [`Alphabet`] from `expr`. If `ranges` is set, `expr` is interpreted using the range
/// grammar (see [`parse`]), otherwise every byte of `expr` is taken as one symbol verbatim.
pub fn build(expr: &str, ranges: bool) -> Result<Alphabet, ParseError> {
    let vec = match ranges {
        true => expand(expr)?,
        false => expr.as_bytes().to_vec()
    };
    Alphabet::try_from(vec).map_err(|err| ParseError::new(err.to_string(), 0..expr.len()))
}

/// Builds an [`Alphabet`] from a range expression.
///
/// A `[s-e]` block stands for all symbols from `s` to `e` inclusive, counting up or down
/// depending on which of the two is greater. Any other character stands for itself. Thus
/// `"[0-9][A-F]"` gives the uppercase hexadecimal digits and `"[z-a]"` the English alphabet
/// in reverse.
pub fn parse(expr: &str) -> Result<Alphabet, ParseError> {
    build(expr, true)
}

fn expand(expr: &str) -> Result<Vec<u8>, ParseError> {
    let mut vec = Vec::with_capacity(expr.len());
    let mut state = State::Outside;
    for (pos, ch) in expr.bytes().enumerate() {
        state = match (state, ch) {
            (State::Outside, b'[') => State::ExpectStart(pos),
            (State::Outside, _) => {
                vec.push(ch);
                State::Outside
            },
            (State::ExpectStart(open), _) => State::ExpectSeparator(open, ch),
            (State::ExpectSeparator(open, start), b'-') => State::ExpectEnd(open, start),
            (State::ExpectSeparator(..), _) =>
                return Err(ParseError::new("expected '-'", pos..(pos + 1))),
            (State::ExpectEnd(open, start), _) => State::ExpectClose(open, start, ch),
            (State::ExpectClose(_, start, end), b']') => {
                push_range(&mut vec, start, end);
                State::Outside
            },
            (State::ExpectClose(..), _) =>
                return Err(ParseError::new("expected ']'", pos..(pos + 1))),
        };
    }
    match state {
        State::Outside => Ok(vec),
        State::ExpectStart(open)
            | State::ExpectSeparator(open, _)
            | State::ExpectEnd(open, _)
            | State::ExpectClose(open, _, _)
            => Err(ParseError::new("unterminated range", open..expr.len()))
    }
}

fn push_range(vec: &mut Vec<u8>, start: u8, end: u8) {
    if start <= end {
        vec.extend(start..=end);
    } else {
        vec.extend((end..=start).rev());
    }
}
