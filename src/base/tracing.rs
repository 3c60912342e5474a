use crate::base::*;

/// What happened to one input token.
#[derive(Debug)]
pub enum Event<'a> {
    Converted { input: &'a [u8], output: &'a [u8] },
    Skipped { input: &'a [u8], reason: &'a BaseError }
}

/// Receives an [`Event`] for every token a [`Session`](crate::Session) processes.
pub trait Tracer {
    fn log(&mut self, ev: Event<'_>);
}

impl Tracer for () {
    fn log(&mut self, _ev: Event<'_>) { }
}
