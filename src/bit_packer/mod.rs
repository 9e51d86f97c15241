//! Conversion between bytes and 5-bit quanta.
//!
//! Two bit orders are supported. [`Policy::Standard`] reads the input as one big-endian bit
//! string and takes quanta from the most significant end. [`Policy::Rspamd`] reads each
//! 5-byte block as a little-endian 40-bit integer and takes quanta from the least
//! significant end, which is the order used by rspamd's own base-32 code.

pub mod pack;
pub mod unpack;

use std::{error, fmt, str::FromStr};

pub const QUANTUM_BITS: usize = 5;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Policy {
    #[default]
    Standard,
    Rspamd,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownPolicy {
    name: String,
}

impl error::Error for UnknownPolicy {}

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown policy '{}'", self.name)
    }
}

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "rspamd" => Ok(Self::Rspamd),
            _ => Err(UnknownPolicy { name: name.to_string() }),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Rspamd => write!(f, "rspamd"),
        }
    }
}

/// Number of quanta produced from `len` bytes, `ceil(8 * len / 5)`.
pub const fn packed_len(len: usize) -> usize {
    len / 5 * 8 + (len % 5 * 8 + QUANTUM_BITS - 1) / QUANTUM_BITS
}

/// Number of bytes recovered from `len` quanta, `floor(5 * len / 8)`.
pub const fn unpacked_len(len: usize) -> usize {
    len / 8 * 5 + len % 8 * QUANTUM_BITS / 8
}
