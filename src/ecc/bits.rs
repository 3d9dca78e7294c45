//! Conversion between written bit strings (`"1011"`) and [`BitWord`]s.

use crate::ecc::{BitWord, Bits, Result};
use crate::error::Error;

/// Parses a string of `'0'`/`'1'` characters into a bit word, leftmost character first.
///
/// Leading and trailing whitespace is not stripped; it is reported as an
/// [`Error::InvalidCharacter`] like any other symbol.
pub fn parse_bits(text: &str) -> Result<BitWord> {
    text.chars()
        .enumerate()
        .map(|(index, character)| match character {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(Error::InvalidCharacter { character, index }),
        })
        .collect()
}

/// Renders a bit word as a string of `'0'`/`'1'` characters, index 0 first.
pub fn to_bit_string(bits: &Bits) -> String {
    bits.iter()
        .map(|bit| if *bit { '1' } else { '0' })
        .collect()
}
