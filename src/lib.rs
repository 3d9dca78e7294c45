pub mod ecc;
pub mod error;
pub mod report;

pub use ecc::{Decoded, HammingCode};
pub use error::{Error, Result};
