use crate::{
    base_common::alphabet,
    bit_packer::{unpacked_len, Policy},
    Alphabet, ALPHABET,
};
use std::{error, fmt};

pub use alphabet::DecodeError as Error;

/// Failure of [`Decoder::decode_into`]: either the input is invalid or the output buffer cannot hold it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IntoError {
    BufferTooSmall,
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for IntoError {}

impl fmt::Display for IntoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl From<Error> for IntoError {
    fn from(error: Error) -> Self {
        match error {
            Error::InvalidCharacter { character, index } => IntoError::InvalidCharacter { character, index },
            Error::NonAsciiCharacter { character, index } => IntoError::NonAsciiCharacter { character, index },
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<32>,
    policy: Policy,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<32>, policy: Policy) -> Self {
        Self { alphabet, policy }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    fn quanta(&self, input: &[u8]) -> Result<Vec<u8>, Error> {
        input
            .iter()
            .enumerate()
            .map(|(index, &value)| self.alphabet.decode(value, index))
            .collect()
    }

    /// Writes the bytes for `input` to the front of `output` and returns how many were written.
    /// Nothing is written unless every character is valid and `output` can hold [`decoded_len`] bytes.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, IntoError> {
        let input = input.as_ref();
        let output = output.as_mut();
        if output.len() < decoded_len(input.len()) {
            return Err(IntoError::BufferTooSmall);
        }
        let quanta = self.quanta(input)?;
        let mut index = 0;
        self.policy.unpack(quanta, |byte| {
            output[index] = byte;
            index += 1;
        });
        Ok(index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let quanta = self.quanta(input)?;
        let mut output = Vec::with_capacity(decoded_len(input.len()));
        self.policy.unpack(quanta, |byte| output.push(byte));
        Ok(output)
    }
}

impl Decoder<'static> {
    pub fn default() -> &'static Self {
        &DECODER
    }

    pub fn rspamd() -> &'static Self {
        &RSPAMD_DECODER
    }

    pub fn with_policy(policy: Policy) -> &'static Self {
        match policy {
            Policy::Standard => Self::default(),
            Policy::Rspamd => Self::rspamd(),
        }
    }
}

static DECODER: Decoder = Decoder::new(&ALPHABET, Policy::Standard);
static RSPAMD_DECODER: Decoder = Decoder::new(&ALPHABET, Policy::Rspamd);

/// Number of bytes decoded from `len` symbols. Trailing bits short of a byte are padding.
pub const fn decoded_len(len: usize) -> usize {
    unpacked_len(len)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, IntoError> {
    Decoder::default().decode_into(input, output)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_rspamd_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, IntoError> {
    Decoder::rspamd().decode_into(input, output)
}

pub fn decode_rspamd(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::rspamd().decode(input)
}
