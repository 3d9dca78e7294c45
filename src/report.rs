//! Human-readable rendering of encode/decode results.
//!
//! Nothing here takes part in the coding arithmetic; it only formats values
//! produced by [`HammingCode`].

use crate::ecc::bits::to_bit_string;
use crate::ecc::{BitWord, Bits, Decoded, HammingCode};
use crate::error::{Error, Result};
use std::fmt::{Display, Formatter};

/// Width of the label column in a transcript
const LABEL_WIDTH: usize = 25;

const RULE: &str = "------------------------------------------------";

/// Flips the bit at a 0-indexed position, simulating a transmission error.
///
/// # Errors
///
/// [`Error::IndexOutOfRange`] if `index` is not inside the codeword.
pub fn flip_bit(codeword: &Bits, index: usize) -> Result<BitWord> {
    if index >= codeword.len() {
        return Err(Error::IndexOutOfRange {
            index,
            length: codeword.len(),
        });
    }

    let mut flipped = codeword.to_bitvec();
    let bit = !flipped[index];
    flipped.set(index, bit);
    Ok(flipped)
}

/// One encode, transmit, decode round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Data word supplied by the caller
    pub data: BitWord,
    /// Codeword produced by the encoder
    pub sent: BitWord,
    /// Codeword after the optional simulated error
    pub received: BitWord,
    /// Whether the received codeword passed the parity check
    pub valid: bool,
    /// Decoder output for the received codeword
    pub decoded: Decoded,
}

impl Session {
    /// Encodes `data`, optionally flips the bit at index `flip`, then checks and decodes.
    pub fn run(code: &HammingCode, data: &Bits, flip: Option<usize>) -> Result<Self> {
        let sent = code.encode(data)?;
        let received = match flip {
            Some(index) => flip_bit(&sent, index)?,
            None => sent.clone(),
        };
        let valid = code.check(&received)?;
        let decoded = code.decode(&received)?;

        Ok(Session {
            data: data.to_bitvec(),
            sent,
            received,
            valid,
            decoded,
        })
    }
}

fn labelled(f: &mut Formatter<'_>, label: &str, value: impl Display) -> std::fmt::Result {
    writeln!(f, "{:<width$} {}", label, value, width = LABEL_WIDTH)
}

impl Display for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", RULE)?;
        labelled(f, "Data word:", to_bit_string(&self.data))?;
        labelled(f, "Received data word:", to_bit_string(&self.decoded.data))?;
        writeln!(f, "{}", RULE)?;
        labelled(f, "Sent encoded word:", to_bit_string(&self.sent))?;
        labelled(f, "Received encoded word:", to_bit_string(&self.received))?;
        labelled(f, "Encoded word is correct:", self.valid)?;
        writeln!(f, "{}", RULE)?;
        labelled(f, "Encoded word:", to_bit_string(&self.decoded.codeword))?;
        match self.decoded.error_position {
            Some(index) => {
                // The caret sits under the corrected bit of the line above.
                writeln!(f, "{:<width$} ^", "", width = LABEL_WIDTH + index)?;
                writeln!(
                    f,
                    "{:<width$} {}",
                    "Error at position:",
                    index,
                    width = LABEL_WIDTH + index
                )?;
            }
            None => writeln!(f, "No error detected.")?,
        }
        writeln!(f, "{}", RULE)
    }
}
