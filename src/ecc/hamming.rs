//! Hamming error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! A code with `m` parity bits encodes `k = 2^m - m - 1` data bits into `n = 2^m - 1` bits and
//! corrects any single flipped bit. The most common variant is the (7,4) code with 3 parity bits.
//!
//! This implementation provides:
//! - Construction of the parity-check and generator matrices for any `m` in `2..=12`
//! - Encoding by placing data bits around power-of-two parity slots
//! - Syndrome decoding with single-bit error correction
//! - Validity checking of a received codeword
//!
//! # Limitations
//!
//! Decoding assumes at most one bit is wrong. Two or more flipped bits still
//! produce a nonzero syndrome that names some position, and that position is
//! "corrected", usually landing on a different valid codeword. A plain Hamming
//! code cannot tell the two cases apart.
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Satellite communications
//! - Data storage systems

use crate::ecc::bits::{parse_bits, to_bit_string};
use crate::ecc::gf2::{matrix_vector_product, to_integer, vector_matrix_product};
use crate::ecc::matrix::{build_check_matrix, build_generator_matrix, CheckMatrix, GeneratorMatrix};
use crate::ecc::positioning::{extract_data_bits, position_bits, Parameters};
use crate::ecc::{BitWord, Bits, Result};
use crate::error::Error;
use log::{debug, trace};

/// Outcome of decoding one received codeword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Received codeword with the located bit flipped back, if any
    pub codeword: BitWord,
    /// Data bits extracted from the corrected codeword
    pub data: BitWord,
    /// 0-indexed (from the left) index of the corrected bit, `None` when the syndrome was zero
    pub error_position: Option<usize>,
}

impl Decoded {
    /// Whether a bit was flipped during decoding
    pub fn error_detected(&self) -> bool {
        self.error_position.is_some()
    }
}

/// A Hamming code with a fixed number of parity bits.
///
/// All state is computed by [`HammingCode::new`] and never changes, so a
/// single instance can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct HammingCode {
    /// Derived code sizes (m, n, k)
    parameters: Parameters,
    /// Parity-check matrix H (m x n)
    check_matrix: CheckMatrix,
    /// Generator matrix G (k x n)
    generator_matrix: GeneratorMatrix,
}

impl HammingCode {
    /// Creates a new Hamming code.
    ///
    /// # Arguments
    ///
    /// * `parity_bits` - Number of parity bits `m`, at least 2
    ///
    /// # Returns
    ///
    /// A new `HammingCode` instance or an error if invalid parameters
    pub fn new(parity_bits: usize) -> Result<Self> {
        let parameters = Parameters::new(parity_bits)?;
        let check_matrix = build_check_matrix(&parameters);
        let generator_matrix = build_generator_matrix(&parameters, &check_matrix)?;

        debug!(
            "Constructed ({}, {}) Hamming code with {} parity bits",
            parameters.codeword_length(),
            parameters.data_length(),
            parameters.parity_bits()
        );

        Ok(HammingCode {
            parameters,
            check_matrix,
            generator_matrix,
        })
    }

    /// Derived code sizes
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Number of parity bits (m)
    pub fn parity_bits(&self) -> usize {
        self.parameters.parity_bits()
    }

    /// Codeword length (n)
    pub fn codeword_length(&self) -> usize {
        self.parameters.codeword_length()
    }

    /// Data word length (k)
    pub fn data_length(&self) -> usize {
        self.parameters.data_length()
    }

    /// Parity-check matrix H
    pub fn check_matrix(&self) -> &CheckMatrix {
        &self.check_matrix
    }

    /// Generator matrix G
    pub fn generator_matrix(&self) -> &GeneratorMatrix {
        &self.generator_matrix
    }

    /// Encodes a data word.
    ///
    /// # Arguments
    ///
    /// * `data` - Exactly `k` data bits, leftmost first
    ///
    /// # Returns
    ///
    /// The `n`-bit codeword, or [`Error::LengthMismatch`] if `data` has the wrong length
    pub fn encode(&self, data: &Bits) -> Result<BitWord> {
        let mut codeword = position_bits(&self.parameters, data)?;

        for parity_position in self.parameters.parity_positions() {
            // The parity slot itself is still zero, so including it is harmless.
            let parity = (1..=self.codeword_length())
                .filter(|position| position & parity_position != 0)
                .fold(false, |acc, position| {
                    acc ^ codeword[self.parameters.index_of(position)]
                });
            codeword.set(self.parameters.index_of(parity_position), parity);
        }

        Ok(codeword)
    }

    /// Encodes a data word by multiplying it with the generator matrix.
    ///
    /// Produces the same codeword as [`HammingCode::encode`].
    pub fn encode_with_generator(&self, data: &Bits) -> Result<BitWord> {
        self.ensure_length(data, self.data_length())?;
        vector_matrix_product(data, self.generator_matrix.view())
    }

    /// Computes the syndrome `H * c (mod 2)`.
    ///
    /// Element `i` of the syndrome is bit `i` of the position of a single flipped bit.
    pub fn syndrome(&self, codeword: &Bits) -> Result<BitWord> {
        self.ensure_length(codeword, self.codeword_length())?;

        // H's columns run over positions 1..=n, i.e. the codeword read right to left.
        let by_position: BitWord = codeword.iter().rev().map(|bit| *bit).collect();
        matrix_vector_product(self.check_matrix.view(), &by_position)
    }

    /// Locates a single flipped bit.
    ///
    /// # Returns
    ///
    /// `None` for a zero syndrome, otherwise the 1-indexed position (counted from
    /// the right end) of the bit to flip
    pub fn detect_error(&self, codeword: &Bits) -> Result<Option<usize>> {
        let position = to_integer(&self.syndrome(codeword)?);
        Ok((position != 0).then_some(position))
    }

    /// Decodes a received codeword, correcting at most one flipped bit.
    ///
    /// # Arguments
    ///
    /// * `codeword` - Exactly `n` received bits
    ///
    /// # Returns
    ///
    /// The corrected codeword, its data bits and the index of the corrected bit.
    /// With two or more flipped bits the reported correction is wrong; see the
    /// module documentation.
    pub fn decode(&self, codeword: &Bits) -> Result<Decoded> {
        let mut corrected = codeword.to_bitvec();

        let error_position = match self.detect_error(codeword)? {
            Some(position) => {
                let index = self.parameters.index_of(position);
                trace!(
                    "Syndrome names position {}, flipping bit at index {}",
                    position,
                    index
                );
                let flipped = !corrected[index];
                corrected.set(index, flipped);
                Some(index)
            }
            None => None,
        };

        let data = extract_data_bits(&corrected);
        Ok(Decoded {
            codeword: corrected,
            data,
            error_position,
        })
    }

    /// Returns true if the codeword has an all-zero syndrome. Nothing is corrected.
    pub fn check(&self, codeword: &Bits) -> Result<bool> {
        Ok(self.syndrome(codeword)?.not_any())
    }

    /// [`HammingCode::encode`] over a `'0'`/`'1'` string.
    pub fn encode_str(&self, data: &str) -> Result<String> {
        let codeword = self.encode(&parse_bits(data)?)?;
        Ok(to_bit_string(&codeword))
    }

    /// [`HammingCode::decode`] over a `'0'`/`'1'` string.
    pub fn decode_str(&self, codeword: &str) -> Result<Decoded> {
        self.decode(&parse_bits(codeword)?)
    }

    /// [`HammingCode::check`] over a `'0'`/`'1'` string.
    pub fn check_str(&self, codeword: &str) -> Result<bool> {
        self.check(&parse_bits(codeword)?)
    }

    fn ensure_length(&self, bits: &Bits, expected: usize) -> Result<()> {
        if bits.len() != expected {
            return Err(Error::length_mismatch(expected, bits.len()));
        }
        Ok(())
    }
}

/// Creates a Hamming code with `parity_bits` parity bits
pub fn create_hamming(parity_bits: usize) -> Result<HammingCode> {
    HammingCode::new(parity_bits)
}

/// Encodes a data word with a one-off code of `parity_bits` parity bits
pub fn hamming_encode(parity_bits: usize, data: &Bits) -> Result<BitWord> {
    create_hamming(parity_bits)?.encode(data)
}

/// Decodes a codeword with a one-off code of `parity_bits` parity bits
pub fn hamming_decode(parity_bits: usize, codeword: &Bits) -> Result<Decoded> {
    create_hamming(parity_bits)?.decode(codeword)
}
