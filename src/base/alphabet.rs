use crate::base::*;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// The digits of a numeral system, in order of their value. Symbols are single bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    vec: Vec<u8>,
    map: HashMap<u8, usize>
}

impl Alphabet {
    /// The number of symbols, i.e., the base of the numeral system. Never zero.
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// Returns the symbol with digit value `ix`.
    ///
    /// Panics if `ix` is not below [`Alphabet::len`].
    pub fn chr(&self, ix: usize) -> u8 {
        self.vec[ix]
    }

    /// Returns the digit value of `chr`. If the symbol is listed more than once, its first
    /// position counts.
    pub fn ord(&self, chr: u8) -> Result<usize, BaseError> {
        self.map.get(&chr)
            .copied()
            .ok_or(BaseError::UnknownSymbol(chr))
    }

    /// Checks whether the alphabet contains `chr`.
    pub fn contains(&self, chr: u8) -> bool {
        self.map.contains_key(&chr)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.vec
    }
}

impl TryFrom<Vec<u8>> for Alphabet {
    type Error = BaseError;

    fn try_from(vec: Vec<u8>) -> Result<Alphabet, BaseError> {
        if vec.is_empty() {
            return Err(BaseError::EmptyAlphabet);
        }
        let mut map = HashMap::with_capacity(vec.len());
        for (ix, &chr) in vec.iter().enumerate() {
            map.entry(chr).or_insert(ix);
        }
        Ok(Alphabet{vec, map})
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = BaseError;

    fn try_from(letters: &str) -> Result<Alphabet, BaseError> {
        Alphabet::try_from(letters.as_bytes().to_vec())
    }
}

/// Lowercase hexadecimal digits.
impl Default for Alphabet {
    fn default() -> Alphabet {
        Alphabet::try_from(b"0123456789abcdef".to_vec())
            .expect("default alphabet is not empty")
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.vec.escape_ascii())
    }
}
