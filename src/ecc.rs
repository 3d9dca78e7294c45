//! Error correction code implementations.
//!
//! This module provides a systematic binary Hamming code over GF(2):
//! - Construction of the parity-check and generator matrices for `m` parity bits
//! - Encoding of a `k`-bit data word into an `n`-bit codeword (`n = 2^m - 1`, `k = n - m`)
//! - Syndrome-based detection and correction of a single flipped bit
//! - Validity checking of a received codeword
//!
//! # Bit order
//!
//! Words are [`BitWord`]s stored most-significant-first: index 0 is the leftmost
//! character of the written bit string. Codeword *positions* used by the parity
//! arithmetic are 1-indexed from the other end, so position 1 is the rightmost bit.
//! [`Parameters::position_of`] and [`Parameters::index_of`] are the only places
//! this mapping is spelled out.
//!
//! # Examples
//!
//! ```rust
//! use hamming_code::ecc::bits::{parse_bits, to_bit_string};
//! use hamming_code::HammingCode;
//!
//! let code = HammingCode::new(3).unwrap();
//! let mut codeword = code.encode(&parse_bits("1011").unwrap()).unwrap();
//! assert_eq!(to_bit_string(&codeword), "1010101");
//!
//! let flipped = !codeword[4];
//! codeword.set(4, flipped);
//! let decoded = code.decode(&codeword).unwrap();
//! assert_eq!(decoded.error_position, Some(4));
//! assert_eq!(to_bit_string(&decoded.data), "1011");
//! ```

use bitvec::prelude::*;

pub use crate::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Owned bit string, most-significant (leftmost) bit at index 0
pub type BitWord = BitVec<u8, Msb0>;

/// Borrowed bit string in the same order as [`BitWord`]
pub type Bits = BitSlice<u8, Msb0>;

pub mod bits;
pub mod gf2;
pub mod hamming;
pub mod matrix;
pub mod positioning;

pub use hamming::{Decoded, HammingCode};
pub use matrix::{build_check_matrix, build_generator_matrix, CheckMatrix, GeneratorMatrix};
pub use positioning::{extract_data_bits, position_bits, Parameters, MAX_PARITY_BITS};
