//! Conversion between integers of any size and numerals over a user-supplied alphabet, in
//! standard positional or bijective (spreadsheet-column) counting.

pub mod base;
mod parser;
mod conv;
mod session;

pub use parser::{build, parse};
pub use conv::{decode, encode};
pub use session::{Config, Report, Session};
