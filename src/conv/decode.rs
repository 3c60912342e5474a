use crate::base::*;

/// Reads `text` as a numeral over `alphabet`. The inverse of [`encode`](crate::encode).
///
/// Fails with [`BaseError::UnknownSymbol`] at the first byte not present in the alphabet.
pub fn decode(text: &[u8], alphabet: &Alphabet, convention: Convention, origin: Origin)
    -> Result<Number, BaseError>
{
    let base = alphabet.len();
    let mut acc = Number::zero();
    for (ix, &chr) in text.iter().enumerate() {
        let digit = alphabet.ord(chr)?;
        if convention == Convention::Bijective && ix != 0 {
            acc += 1u32;
        }
        acc *= base;
        acc += digit;
    }
    acc += origin.offset();
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn dec(text: &str, alphabet: &str, convention: Convention, origin: Origin) -> Result<Number, BaseError> {
        decode(text.as_bytes(), &Alphabet::try_from(alphabet).unwrap(), convention, origin)
    }

    #[test]
    fn test_standard() {
        use Convention::Standard;
        assert_eq!(dec("f", "0123456789abcdef", Standard, Origin::Zero), Ok(Number::from(15)));
        assert_eq!(dec("111", "01", Standard, Origin::Zero), Ok(Number::from(7)));
        assert_eq!(dec("00111", "01", Standard, Origin::Zero), Ok(Number::from(7)));
        assert_eq!(dec("111", "01", Standard, Origin::One), Ok(Number::from(8)));
        assert_eq!(dec("zz", "0123456789abcdefghijklmnopqrstuvwxyz", Standard, Origin::Zero),
            Ok(Number::from(1295)));
        assert_eq!(dec("a", "a", Standard, Origin::Zero), Ok(Number::from(0)));
        assert_eq!(dec("", "01", Standard, Origin::Zero), Ok(Number::from(0)));
    }

    #[test]
    fn test_bijective() {
        use Convention::Bijective;
        let az = parse("[A-Z]").unwrap();
        let dec_az = |text: &str, origin| decode(text.as_bytes(), &az, Bijective, origin);
        assert_eq!(dec_az("AAAA", Origin::Zero), Ok(Number::from(18278)));
        assert_eq!(dec_az("AAAA", Origin::One), Ok(Number::from(18279)));
        assert_eq!(dec_az("Z", Origin::Zero), Ok(Number::from(25)));
        assert_eq!(dec_az("AA", Origin::Zero), Ok(Number::from(26)));
        assert_eq!(dec_az("AB", Origin::One), Ok(Number::from(28)));
        assert_eq!(dec_az("ZZ", Origin::Zero), Ok(Number::from(701)));
        assert_eq!(dec("aaaaa", "a", Bijective, Origin::One), Ok(Number::from(5)));
        assert_eq!(dec("000", "01", Bijective, Origin::Zero), Ok(Number::from(6)));
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(dec("12g4", "0123456789abcdef", Convention::Standard, Origin::Zero),
            Err(BaseError::UnknownSymbol(b'g')));
        assert_eq!(dec("aB", "abc", Convention::Bijective, Origin::Zero),
            Err(BaseError::UnknownSymbol(b'B')));
        assert_eq!(dec("-1", "0123456789", Convention::Standard, Origin::Zero),
            Err(BaseError::UnknownSymbol(b'-')));
    }

    #[test]
    fn test_large() {
        let text = "f".repeat(256);
        let value = dec(&text, "0123456789abcdef", Convention::Standard, Origin::Zero).unwrap();
        assert_eq!(value, Number::from(2).pow(1024u32) - 1u32);
    }
}
