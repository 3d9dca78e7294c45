//! Linear algebra over GF(2).
//!
//! Matrices are `ndarray` arrays of `u8` holding 0 or 1; any other value is read
//! through its lowest bit. Vectors are bit words. Addition is XOR and
//! multiplication is AND, so every dot product reduces to the parity of the
//! number of positions where both operands are set.

use crate::ecc::{BitWord, Bits, Result};
use crate::error::Error;
use ndarray::ArrayView2;

/// Computes `matrix * vector` (mod 2).
///
/// Element `i` of the result is the XOR over `j` of `matrix[i][j] AND vector[j]`.
///
/// # Errors
///
/// [`Error::ShapeMismatch`] if the vector length differs from the column count.
pub fn matrix_vector_product(matrix: ArrayView2<'_, u8>, vector: &Bits) -> Result<BitWord> {
    if vector.len() != matrix.ncols() {
        return Err(Error::shape_mismatch(matrix.ncols(), vector.len()));
    }

    Ok(matrix
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .zip(vector.iter())
                .fold(false, |acc, (entry, bit)| acc ^ (entry & 1 == 1 && *bit))
        })
        .collect())
}

/// Computes `vector * matrix` (mod 2) for a row vector.
///
/// Element `j` of the result is the XOR over `i` of `vector[i] AND matrix[i][j]`.
///
/// # Errors
///
/// [`Error::ShapeMismatch`] if the vector length differs from the row count.
pub fn vector_matrix_product(vector: &Bits, matrix: ArrayView2<'_, u8>) -> Result<BitWord> {
    if vector.len() != matrix.nrows() {
        return Err(Error::shape_mismatch(matrix.nrows(), vector.len()));
    }

    Ok(matrix
        .columns()
        .into_iter()
        .map(|column| {
            column
                .iter()
                .zip(vector.iter())
                .fold(false, |acc, (entry, bit)| acc ^ (entry & 1 == 1 && *bit))
        })
        .collect())
}

/// Reads a bit vector as an unsigned integer with element `i` weighted by `2^i`.
///
/// This is how a syndrome names a codeword position.
pub fn to_integer(vector: &Bits) -> usize {
    vector.iter_ones().fold(0, |acc, i| acc | 1 << i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitvec::prelude::*;
    use ndarray::array;

    #[test]
    fn test_matrix_vector_product() {
        let matrix = array![[1u8, 0, 1, 0], [0, 1, 1, 0], [1, 1, 1, 1]];
        let vector = bitvec![u8, Msb0; 1, 0, 1, 1];

        let result = matrix_vector_product(matrix.view(), &vector).unwrap();
        // Row 0: 1 ^ 1 = 0, row 1: 1, row 2: 1 ^ 1 ^ 1 = 1
        assert_eq!(result, bitvec![u8, Msb0; 0, 1, 1]);
    }

    #[test]
    fn test_matrix_vector_product_zero_vector() {
        let matrix = array![[1u8, 1, 1], [0, 1, 0]];
        let vector = bitvec![u8, Msb0; 0; 3];
        let result = matrix_vector_product(matrix.view(), &vector).unwrap();
        assert!(result.not_any());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_vector_matrix_product() {
        let matrix = array![[1u8, 0, 0, 1], [0, 1, 0, 1], [0, 0, 1, 1]];
        let vector = bitvec![u8, Msb0; 1, 1, 0];

        let result = vector_matrix_product(&vector, matrix.view()).unwrap();
        assert_eq!(result, bitvec![u8, Msb0; 1, 1, 0, 0]);
    }

    #[test]
    fn test_shape_mismatch() {
        let matrix = array![[1u8, 0, 1], [0, 1, 1]];
        let too_long = bitvec![u8, Msb0; 1, 0, 1, 1];

        assert_eq!(
            matrix_vector_product(matrix.view(), &too_long),
            Err(Error::shape_mismatch(3, 4))
        );
        assert_eq!(
            vector_matrix_product(&too_long, matrix.view()),
            Err(Error::shape_mismatch(2, 4))
        );
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(to_integer(&bitvec![u8, Msb0; 0, 0, 0]), 0);
        assert_eq!(to_integer(&bitvec![u8, Msb0; 1, 1, 0]), 3);
        assert_eq!(to_integer(&bitvec![u8, Msb0; 0, 0, 1]), 4);
        assert_eq!(to_integer(&bitvec![u8, Msb0; 1, 1, 1, 1]), 15);
    }
}
