//! Positional digit encoding over a fixed symbol alphabet.

use crate::EncodeError;
use crate::consts::BASE54_SYMBOLS;

/// An ordered set of ASCII digit symbols. The base is the number of symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: &'static [u8],
}

/// The 54-symbol alphabet used by every datetag.
pub const BASE54: Alphabet = Alphabet::new(BASE54_SYMBOLS);

impl Alphabet {
    pub const fn new(symbols: &'static [u8]) -> Self {
        Self { symbols }
    }

    pub const fn base(&self) -> usize {
        self.symbols.len()
    }

    pub const fn symbols(&self) -> &'static [u8] {
        self.symbols
    }

    /// The symbol for a single digit value, if it is below the base.
    #[inline]
    pub fn digit(&self, value: u32) -> Option<u8> {
        self.symbols.get(usize::try_from(value).ok()?).copied()
    }

    /// The digit value of a symbol, if it belongs to the alphabet.
    pub fn index_of(&self, symbol: u8) -> Option<u32> {
        let position = self.symbols.iter().position(|&s| s == symbol)?;
        u32::try_from(position).ok()
    }

    /// Number of digits needed to write `value`. Zero takes one digit.
    pub fn width(&self, mut value: u32) -> Result<usize, EncodeError> {
        let base = self.checked_base()?;
        let mut width = 1;
        while value >= base {
            value /= base;
            width += 1;
        }
        Ok(width)
    }

    /// Writes `value` into `buf`, least significant digit first, and returns
    /// the number of digits written.
    ///
    /// # Errors
    /// Returns `EncodeError::DegenerateBase` for alphabets with fewer than two
    /// symbols and `EncodeError::EncodingCapacity` if `buf` is too short.
    pub fn encode_into(&self, mut value: u32, buf: &mut [u8]) -> Result<usize, EncodeError> {
        let base = self.checked_base()?;
        let required = self.width(value)?;
        if buf.len() < required {
            return Err(EncodeError::EncodingCapacity {
                required,
                available: buf.len(),
            });
        }

        for slot in &mut buf[..required] {
            // value % base < base == symbols.len()
            *slot = self.symbols[(value % base) as usize];
            value /= base;
        }
        Ok(required)
    }

    /// Renders `value` most significant digit first, the way numbers are read.
    ///
    /// # Errors
    /// Returns `EncodeError::DegenerateBase` for alphabets with fewer than two symbols.
    pub fn encode_msb_first(&self, value: u32) -> Result<String, EncodeError> {
        let mut digits = vec![0; self.width(value)?];
        let written = self.encode_into(value, &mut digits)?;
        digits.truncate(written);
        Ok(digits.iter().rev().map(|&b| char::from(b)).collect())
    }

    /// Parses a most-significant-first digit string.
    /// Returns `None` for empty input, foreign symbols or overflow.
    pub fn decode_msb_first(&self, digits: &str) -> Option<u32> {
        let base = self.checked_base().ok()?;
        if digits.is_empty() {
            return None;
        }
        digits.bytes().try_fold(0_u32, |acc, symbol| {
            acc.checked_mul(base)?.checked_add(self.index_of(symbol)?)
        })
    }

    fn checked_base(&self) -> Result<u32, EncodeError> {
        match u32::try_from(self.base()) {
            Ok(base) if base > 1 => Ok(base),
            _ => Err(EncodeError::DegenerateBase(self.base())),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        BASE54
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BASE54_LEN;

    #[test]
    fn test_alphabet_shape() {
        assert_eq!(BASE54.base(), BASE54_LEN);
        assert!(BASE54.symbols().iter().all(u8::is_ascii_alphanumeric));

        let mut sorted = BASE54.symbols().to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), BASE54_LEN, "symbols must be unique");

        for ambiguous in *b"lIO01257" {
            assert_eq!(BASE54.index_of(ambiguous), None, "{}", char::from(ambiguous));
        }
    }

    #[test]
    fn test_digit_and_index_of() {
        assert_eq!(BASE54.digit(0), Some(b'a'));
        assert_eq!(BASE54.digit(19), Some(b'u'));
        assert_eq!(BASE54.digit(39), Some(b'Q'));
        assert_eq!(BASE54.digit(53), Some(b'9'));
        assert_eq!(BASE54.digit(54), None);

        for value in 0..54 {
            let symbol = BASE54.digit(value).unwrap();
            assert_eq!(BASE54.index_of(symbol), Some(value));
        }
        assert_eq!(BASE54.index_of(b'-'), None);
    }

    #[test]
    fn test_encode_single_digit() {
        let mut buf = [0u8; 1];
        assert_eq!(BASE54.encode_into(0, &mut buf), Ok(1));
        assert_eq!(&buf, b"a");
        assert_eq!(BASE54.encode_into(53, &mut buf), Ok(1));
        assert_eq!(&buf, b"9");
    }

    #[test]
    fn test_encode_multiple_digits_lsb_first() {
        let mut buf = [0u8; 4];
        // 54 = 1 * 54 + 0
        assert_eq!(BASE54.encode_into(54, &mut buf), Ok(2));
        assert_eq!(&buf[..2], b"ab");
        // 3000 = 1 * 54^2 + 1 * 54 + 30
        assert_eq!(BASE54.encode_into(3000, &mut buf), Ok(3));
        assert_eq!(&buf[..3], b"Fbb");
        assert_eq!(buf[3], 0, "bytes past the digits are untouched");
    }

    #[test]
    fn test_encode_capacity() {
        let mut buf = [0u8; 1];
        assert_eq!(
            BASE54.encode_into(54, &mut buf),
            Err(EncodeError::EncodingCapacity {
                required:  2,
                available: 1,
            })
        );
        assert_eq!(buf, [0], "nothing is written on failure");

        let mut empty: [u8; 0] = [];
        assert!(BASE54.encode_into(0, &mut empty).is_err());
    }

    #[test]
    fn test_degenerate_base() {
        let unary = Alphabet::new(b"x");
        let mut buf = [0u8; 8];
        assert_eq!(unary.encode_into(3, &mut buf), Err(EncodeError::DegenerateBase(1)));
        assert_eq!(Alphabet::new(b"").width(0), Err(EncodeError::DegenerateBase(0)));
        assert_eq!(unary.decode_msb_first("x"), None);
    }

    #[test]
    fn test_width() {
        assert_eq!(BASE54.width(0), Ok(1));
        assert_eq!(BASE54.width(53), Ok(1));
        assert_eq!(BASE54.width(54), Ok(2));
        assert_eq!(BASE54.width(54 * 54 - 1), Ok(2));
        assert_eq!(BASE54.width(54 * 54), Ok(3));
    }

    #[test]
    fn test_msb_first() {
        assert_eq!(BASE54.encode_msb_first(0).unwrap(), "a");
        assert_eq!(BASE54.encode_msb_first(3000).unwrap(), "bbF");
        assert_eq!(BASE54.decode_msb_first("bbF"), Some(3000));
        assert_eq!(BASE54.decode_msb_first(""), None);
        assert_eq!(BASE54.decode_msb_first("b-F"), None);
        assert_eq!(BASE54.decode_msb_first("999999999"), None, "overflows u32");
    }

    #[test]
    fn test_other_alphabet() {
        let binary = Alphabet::new(b"01");
        assert_eq!(binary.encode_msb_first(6).unwrap(), "110");
        assert_eq!(binary.decode_msb_first("110"), Some(6));
    }
}
