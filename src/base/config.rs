/// The way positions of a numeral are counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Convention {
    /// Ordinary positional base-N. The first symbol of the alphabet plays the role of zero.
    #[default]
    Standard,
    /// Spreadsheet-column counting (..., Y, Z, AA, AB, ...). No symbol stands for an empty
    /// place, so every string denotes a different number.
    Bijective,
}

/// Whether the numbers being converted start counting at 0 or at 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Origin {
    #[default]
    Zero,
    One,
}

impl Origin {
    /// The shift subtracted before encoding and added after decoding.
    pub fn offset(self) -> u32 {
        match self {
            Origin::Zero => 0,
            Origin::One => 1,
        }
    }
}

/// Which way tokens are converted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Integer to alphabet string.
    #[default]
    Encode,
    /// Alphabet string to integer.
    Decode,
}
