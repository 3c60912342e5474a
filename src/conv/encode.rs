use crate::base::*;

/// Writes `value` as a numeral over `alphabet`, most significant symbol first.
///
/// With [`Origin::One`], the value is decreased by one first. Zero gives the first symbol of the
/// alphabet under either [`Convention`]. Negative values give an empty numeral.
///
/// Returns [`BaseError::DegenerateBase`] when asked for a positive value in [`Convention::Standard`]
/// over a single-symbol alphabet, which has no finite representation.
pub fn encode(value: &Number, alphabet: &Alphabet, convention: Convention, origin: Origin)
    -> Result<Vec<u8>, BaseError>
{
    let value = value - origin.offset();
    if value.is_zero() {
        return Ok(vec![alphabet.chr(0)]);
    }
    let Some(mut value) = value.to_biguint() else {
        return Ok(Vec::new());
    };
    if alphabet.len() == 1 && convention == Convention::Standard {
        return Err(BaseError::DegenerateBase);
    }
    let base = UNumber::from(alphabet.len());
    let mut digits = Vec::new();
    loop {
        let (quot, rem) = value.div_rem(&base);
        let ix = rem.to_usize().expect("remainder is below alphabet length");
        digits.push(alphabet.chr(ix));
        if quot.is_zero() {
            break;
        }
        value = match convention {
            Convention::Standard => quot,
            // every place is worth one more than in standard counting
            Convention::Bijective => quot - 1u32
        };
    }
    digits.reverse();
    Ok(digits)
}
