//! Code parameters and the layout of data and parity bits inside a codeword.
//!
//! A codeword of length `n` is addressed two ways:
//!
//! - **index**: 0-indexed from the left of the written bit string (how a
//!   [`BitWord`] stores it and how callers report positions)
//! - **position**: 1-indexed from the right end, the numbering the parity
//!   equations use
//!
//! They are related by `position = n - index`. Parity bits sit at positions that
//! are exact powers of two (1, 2, 4, ...); every other position carries a data
//! bit. Data bits are laid out from the right as well: the last bit of the data
//! word lands at position 3, the next-to-last at position 5, and so on, so the
//! data bits keep their relative order when the codeword is read left to right.

use crate::ecc::{BitWord, Bits, Result};
use crate::error::Error;
use bitvec::prelude::*;

/// Smallest supported number of parity bits, giving the (3, 1) repetition code
pub const MIN_PARITY_BITS: usize = 2;

/// Largest supported number of parity bits, giving the (4095, 4083) code.
/// The generator matrix is stored densely, so its size grows with `n * k`.
pub const MAX_PARITY_BITS: usize = 12;

/// Derived sizes of a Hamming code with `m` parity bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameters {
    /// Number of parity bits (m)
    parity_bits: usize,
    /// Codeword length (n = 2^m - 1)
    codeword_length: usize,
    /// Data word length (k = n - m)
    data_length: usize,
}

impl Parameters {
    /// Computes `n` and `k` for the given number of parity bits.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `parity_bits` is below [`MIN_PARITY_BITS`]
    /// or above [`MAX_PARITY_BITS`].
    pub fn new(parity_bits: usize) -> Result<Self> {
        if parity_bits < MIN_PARITY_BITS {
            return Err(Error::invalid_parameter(format!(
                "Number of parity bits must be at least {}, got {}",
                MIN_PARITY_BITS, parity_bits
            )));
        }
        if parity_bits > MAX_PARITY_BITS {
            return Err(Error::invalid_parameter(format!(
                "Number of parity bits must be at most {}, got {}",
                MAX_PARITY_BITS, parity_bits
            )));
        }

        let codeword_length = (1 << parity_bits) - 1;
        Ok(Parameters {
            parity_bits,
            codeword_length,
            data_length: codeword_length - parity_bits,
        })
    }

    /// Number of parity bits (m)
    pub fn parity_bits(&self) -> usize {
        self.parity_bits
    }

    /// Codeword length (n)
    pub fn codeword_length(&self) -> usize {
        self.codeword_length
    }

    /// Data word length (k)
    pub fn data_length(&self) -> usize {
        self.data_length
    }

    /// Maps a 0-indexed string index to its 1-indexed position from the right.
    ///
    /// Only meaningful for `index < n`.
    pub fn position_of(&self, index: usize) -> usize {
        self.codeword_length - index
    }

    /// Maps a 1-indexed position from the right back to its 0-indexed string index.
    ///
    /// Only meaningful for `1 <= position <= n`.
    pub fn index_of(&self, position: usize) -> usize {
        self.codeword_length - position
    }

    /// Data-bearing positions in ascending order.
    pub fn data_positions(&self) -> impl Iterator<Item = usize> {
        (1..=self.codeword_length).filter(|&position| !is_parity_position(position))
    }

    /// Positions of the parity bits in ascending order (1, 2, 4, ...).
    pub fn parity_positions(&self) -> impl Iterator<Item = usize> {
        (0..self.parity_bits).map(|p| 1 << p)
    }
}

/// Returns true if the 1-indexed position is reserved for a parity bit.
pub fn is_parity_position(position: usize) -> bool {
    position.is_power_of_two()
}

/// Places the data bits into their codeword positions, leaving every parity slot zero.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if `data` is not exactly `k` bits long.
pub fn position_bits(parameters: &Parameters, data: &Bits) -> Result<BitWord> {
    if data.len() != parameters.data_length() {
        return Err(Error::length_mismatch(
            parameters.data_length(),
            data.len(),
        ));
    }

    let mut positioned = bitvec![u8, Msb0; 0; parameters.codeword_length()];
    for (position, bit) in parameters.data_positions().zip(data.iter().rev()) {
        positioned.set(parameters.index_of(position), *bit);
    }
    Ok(positioned)
}

/// Recovers the data word from a codeword by dropping the parity positions.
///
/// Positions are counted from the right end of whatever length `codeword` has,
/// so this never fails; for a length-`n` codeword it inverts [`position_bits`].
pub fn extract_data_bits(codeword: &Bits) -> BitWord {
    let length = codeword.len();
    let mut data: BitWord = (1..=length)
        .filter(|&position| !is_parity_position(position))
        .map(|position| codeword[length - position])
        .collect();
    data.reverse();
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecc::bits::{parse_bits, to_bit_string};

    #[test]
    fn test_parameters() {
        for m in MIN_PARITY_BITS..=MAX_PARITY_BITS {
            let parameters = Parameters::new(m).unwrap();
            assert_eq!(parameters.parity_bits(), m);
            assert_eq!(parameters.codeword_length(), (1 << m) - 1);
            assert_eq!(
                parameters.data_length(),
                parameters.codeword_length() - m
            );
        }

        let minimum = Parameters::new(2).unwrap();
        assert_eq!(minimum.codeword_length(), 3);
        assert_eq!(minimum.data_length(), 1);
    }

    #[test]
    fn test_parameters_out_of_range() {
        assert!(matches!(
            Parameters::new(1),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            Parameters::new(0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            Parameters::new(MAX_PARITY_BITS + 1),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_index_position_mapping() {
        let parameters = Parameters::new(3).unwrap();
        assert_eq!(parameters.position_of(0), 7);
        assert_eq!(parameters.position_of(6), 1);
        for index in 0..7 {
            assert_eq!(parameters.index_of(parameters.position_of(index)), index);
        }
    }

    #[test]
    fn test_position_lists() {
        let parameters = Parameters::new(4).unwrap();
        assert_eq!(
            parameters.data_positions().collect::<Vec<_>>(),
            vec![3, 5, 6, 7, 9, 10, 11, 12, 13, 14, 15]
        );
        assert_eq!(
            parameters.parity_positions().collect::<Vec<_>>(),
            vec![1, 2, 4, 8]
        );
    }

    #[test]
    fn test_position_bits() {
        let parameters = Parameters::new(3).unwrap();
        let positioned = position_bits(&parameters, &parse_bits("1011").unwrap()).unwrap();
        // Positions 7..1 hold d0, d1, d2, p4, d3, p2, p1
        assert_eq!(to_bit_string(&positioned), "1010100");

        let parameters = Parameters::new(2).unwrap();
        let positioned = position_bits(&parameters, &parse_bits("1").unwrap()).unwrap();
        assert_eq!(to_bit_string(&positioned), "100");
    }

    #[test]
    fn test_position_bits_wrong_length() {
        let parameters = Parameters::new(3).unwrap();
        assert_eq!(
            position_bits(&parameters, &parse_bits("101").unwrap()),
            Err(Error::length_mismatch(4, 3))
        );
        assert_eq!(
            position_bits(&parameters, &parse_bits("10110").unwrap()),
            Err(Error::length_mismatch(4, 5))
        );
    }

    #[test]
    fn test_extract_data_bits() {
        assert_eq!(to_bit_string(&extract_data_bits(&parse_bits("1010101").unwrap())), "1011");
        // Parity slots are ignored whatever they hold
        assert_eq!(to_bit_string(&extract_data_bits(&parse_bits("1011111").unwrap())), "1011");
        assert!(extract_data_bits(&parse_bits("").unwrap()).is_empty());
    }

    #[test]
    fn test_extract_inverts_position() {
        let parameters = Parameters::new(4).unwrap();
        for value in [0u16, 1, 0b101_0101_0101, 0b111_1111_1111, 0b100_0000_0001] {
            let data: BitWord = (0..11).rev().map(|bit| value >> bit & 1 == 1).collect();
            let positioned = position_bits(&parameters, &data).unwrap();
            assert_eq!(extract_data_bits(&positioned), data);
        }
    }
}
