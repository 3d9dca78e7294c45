//! Parity-check and generator matrices of a Hamming code.
//!
//! Both matrices are built once by pure functions and never mutated afterwards;
//! callers only ever get read-only views.

use crate::ecc::positioning::Parameters;
use crate::ecc::Result;
use crate::error::Error;
use ndarray::{Array2, ArrayView2, Axis};
use std::fmt::{Display, Formatter};

/// The `m x n` parity-check matrix H.
///
/// Columns are indexed by codeword position: column `j` (0-indexed) belongs to
/// position `j + 1` and holds the binary representation of `j + 1`, least
/// significant bit in row 0. Multiplying H by a codeword laid out by position
/// therefore yields the position of a single flipped bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckMatrix {
    parameters: Parameters,
    entries: Array2<u8>,
}

impl CheckMatrix {
    /// Code the matrix was built for
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Read-only view of the entries
    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.entries.view()
    }

    /// Column for a 1-indexed codeword position, top row first
    pub fn column_for_position(&self, position: usize) -> Vec<u8> {
        self.entries.column(position - 1).to_vec()
    }
}

/// The `k x n` generator matrix G.
///
/// Row `r` is the codeword of the data word whose only set bit is bit `r`
/// (counted from the left). Columns follow the codeword's written order, so
/// `d * G (mod 2)` is the encoding of `d` bit for bit. Restricted to the data
/// columns G is the identity; restricted to the parity columns it is the
/// transpose of H's data columns. [`GeneratorMatrix::block_form`] regroups the
/// columns into the textbook `[I_k | P]` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorMatrix {
    parameters: Parameters,
    entries: Array2<u8>,
}

impl GeneratorMatrix {
    /// Code the matrix was built for
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Read-only view of the entries
    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.entries.view()
    }

    /// The same matrix with its columns regrouped as `[I_k | P]`.
    ///
    /// The first `k` columns are the data bits in data-word order; the last `m`
    /// are the parity bits for positions 1, 2, 4, ... in that order.
    pub fn block_form(&self) -> Array2<u8> {
        let parameters = &self.parameters;
        let data_columns = parameters
            .data_positions()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .map(|position| parameters.index_of(position));
        let parity_columns = parameters
            .parity_positions()
            .map(|position| parameters.index_of(position));
        let order: Vec<usize> = data_columns.chain(parity_columns).collect();

        self.entries.select(Axis(1), &order)
    }
}

/// Builds the parity-check matrix: entry `(i, j)` is bit `i` of `j + 1`.
pub fn build_check_matrix(parameters: &Parameters) -> CheckMatrix {
    let entries = Array2::from_shape_fn(
        (parameters.parity_bits(), parameters.codeword_length()),
        |(row, column)| ((column + 1) >> row & 1) as u8,
    );

    CheckMatrix {
        parameters: *parameters,
        entries,
    }
}

/// Builds the generator matrix from the identity block and the data columns of H.
///
/// # Errors
///
/// [`Error::ShapeMismatch`] if `check_matrix` was built for a different number
/// of parity bits.
pub fn build_generator_matrix(
    parameters: &Parameters,
    check_matrix: &CheckMatrix,
) -> Result<GeneratorMatrix> {
    if check_matrix.parameters() != parameters {
        return Err(Error::shape_mismatch(
            parameters.parity_bits(),
            check_matrix.parameters().parity_bits(),
        ));
    }

    let data_length = parameters.data_length();
    let mut entries = Array2::<u8>::zeros((data_length, parameters.codeword_length()));

    // Data positions ascend while data-word rows descend.
    for (row, position) in (0..data_length).rev().zip(parameters.data_positions()) {
        entries[[row, parameters.index_of(position)]] = 1;
        for (p, parity_position) in parameters.parity_positions().enumerate() {
            entries[[row, parameters.index_of(parity_position)]] =
                check_matrix.entries[[p, position - 1]];
        }
    }

    Ok(GeneratorMatrix {
        parameters: *parameters,
        entries,
    })
}

fn fmt_rows(entries: &Array2<u8>, f: &mut Formatter<'_>) -> std::fmt::Result {
    for row in entries.rows() {
        let cells: Vec<String> = row.iter().map(|entry| entry.to_string()).collect();
        writeln!(f, "[{}]", cells.join(", "))?;
    }
    Ok(())
}

impl Display for CheckMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fmt_rows(&self.entries, f)
    }
}

impl Display for GeneratorMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fmt_rows(&self.entries, f)
    }
}
