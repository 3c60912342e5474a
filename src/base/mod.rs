pub(crate) use num::{Integer, ToPrimitive, Zero};

mod alphabet;
mod config;
mod error;
pub mod tracing;

pub use alphabet::*;
pub use config::*;
pub use error::*;

/// The integer type on either side of a conversion. The requirement is that it allows
/// arbitrary-precision arithmetics, since input tokens may have hundreds of digits.
pub type Number = num::BigInt;

/// The unsigned variant of the [`Number`] type.
pub type UNumber = num::BigUint;
