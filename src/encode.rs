use crate::{
    bit_packer::{packed_len, Policy},
    Alphabet, ALPHABET,
};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<32>,
    policy: Policy,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<32>, policy: Policy) -> Self {
        Self { alphabet, policy }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Writes the symbols for `input` to the front of `output` and returns how many were written.
    /// Nothing is written when `output` is shorter than [`encoded_len`] of the input.
    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let len = encoded_len(input.len());
        if output.len() < len {
            return Err(Error::BufferTooSmall);
        }
        let mut index = 0;
        self.policy.pack(input, |quantum| {
            output[index] = self.alphabet.encode(quantum as usize);
            index += 1;
        });
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = String::with_capacity(encoded_len(input.len()));
        self.policy.pack(input, |quantum| output.push(self.alphabet.encode(quantum as usize) as char));
        output
    }
}

impl Encoder<'static> {
    pub fn default() -> &'static Self {
        &ENCODER
    }

    pub fn rspamd() -> &'static Self {
        &RSPAMD_ENCODER
    }

    pub fn with_policy(policy: Policy) -> &'static Self {
        match policy {
            Policy::Standard => Self::default(),
            Policy::Rspamd => Self::rspamd(),
        }
    }
}

static ENCODER: Encoder = Encoder::new(&ALPHABET, Policy::Standard);
static RSPAMD_ENCODER: Encoder = Encoder::new(&ALPHABET, Policy::Rspamd);

/// Number of symbols in the encoding of `len` bytes.
pub const fn encoded_len(len: usize) -> usize {
    packed_len(len)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_rspamd_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::rspamd().encode_into(input, output)
}

pub fn encode_rspamd(input: impl AsRef<[u8]>) -> String {
    Encoder::rspamd().encode(input)
}

#[cfg(test)]
mod tests {
    use super::{encoded_len, Error};
    use crate::Policy;
    use proptest::prelude::*;

    #[test]
    fn encode() {
        assert_eq!(super::encode(b""), "");
        assert_eq!(super::encode(b"asdasd"), "cf3seamuco");
        assert_eq!(super::encode([0xf0, 0xbf, 0xc7]), "6n9hq");
        assert_eq!(super::encode([0xd4, 0x7a, 0x04]), "4t7ye");
        assert_eq!(super::encode([0xff]), "9h");
        assert_eq!(super::encode([0xb5]), "sw");
        assert_eq!(super::encode([0x34, 0x5a]), "gtpy");
        assert_eq!(super::encode([0xff; 5]), "99999999");
        assert_eq!(super::encode([0xff; 6]), "999999999h");
        assert_eq!(
            super::encode([
                0xc0, 0x73, 0x62, 0x4a, 0xaf, 0x39, 0x78, 0x51, 0x4e, 0xf8, 0x44, 0x3b, 0xb2, 0xa8, 0x59, 0xc7, 0x5f, 0xc3, 0xcc, 0x6a,
                0xf2, 0x6d, 0x5a, 0xaa,
            ]),
            "ab3sr1ix8fhfnuzaeo75fkn3a7xh8udk6jsiiko"
        );
    }

    #[test]
    fn encode_rspamd() {
        assert_eq!(super::encode_rspamd(b""), "");
        assert_eq!(super::encode_rspamd(b"test123"), "wm3g84fg13cy");
        assert_eq!(super::encode_rspamd(b"TEST123"), "wktgfkfg13cy");
        assert_eq!(super::encode_rspamd(b"hello"), "em3ags7p");
        assert_eq!(super::encode_rspamd(b"HELLO"), "ektarg7j");
        assert_eq!(super::encode_rspamd(b"!HELLO~"), "bb1krgtjx19y");
        assert_eq!(super::encode_rspamd(b"~hello!"), "6d4kgstpxmey");
        assert_eq!(super::encode_rspamd([0x00; 5]), "yyyyyyyy");
        assert_eq!(super::encode_rspamd([0x21, 0x84, 0x10, 0x42, 0x08]), "bbbbbbbb");
        assert_eq!(super::encode_rspamd([0x42, 0x08, 0x21, 0x84, 0x10]), "nnnnnnnn");
        assert_eq!(super::encode_rspamd([0x84, 0x10, 0x42, 0x08, 0x21]), "rrrrrrrr");
        assert_eq!(super::encode_rspamd([0x08, 0x21, 0x84, 0x10, 0x42]), "eeeeeeee");
        assert_eq!(super::encode_rspamd([0x10, 0x42, 0x08, 0x21, 0x84]), "oooooooo");
        assert_eq!(super::encode_rspamd([0xb5, 0xd6, 0x5a, 0x6b, 0xad]), "iiiiiiii");
        assert_eq!(super::encode_rspamd([0x4a, 0x29, 0xa5, 0x94, 0x52]), "kkkkkkkk");
        assert_eq!(super::encode_rspamd([0xff; 5]), "99999999");
    }

    #[test]
    fn encode_into() {
        let mut output = [0u8; 10];
        assert_eq!(super::encode_into(b"asdasd", &mut output), Ok(10));
        assert_eq!(&output, b"cf3seamuco");

        let mut output = [0u8; 16];
        assert_eq!(super::encode_rspamd_into(b"hello", &mut output), Ok(8));
        assert_eq!(&output[..8], b"em3ags7p");
        assert_eq!(&output[8..], [0u8; 8]);
    }

    #[test]
    fn encode_into_buffer_too_small() {
        let mut output = [0u8; 9];
        assert_eq!(super::encode_into(b"asdasd", &mut output), Err(Error::BufferTooSmall));
        assert_eq!(output, [0u8; 9]);
        assert_eq!(super::encode_rspamd_into(b"asdasd", &mut output), Err(Error::BufferTooSmall));
    }

    #[test]
    fn with_policy() {
        assert_eq!(super::Encoder::default().policy(), Policy::Standard);
        assert_eq!(super::Encoder::rspamd().policy(), Policy::Rspamd);
        assert_eq!(super::Encoder::with_policy(Policy::Rspamd).policy(), Policy::Rspamd);
    }

    proptest! {
        #[test]
        fn length(ref input in prop::collection::vec(any::<u8>(), 0..256)) {
            let expected = (input.len() * 8 + 4) / 5;
            prop_assert_eq!(super::encode(input).len(), expected);
            prop_assert_eq!(super::encode_rspamd(input).len(), expected);
            prop_assert_eq!(encoded_len(input.len()), expected);
        }

        #[test]
        fn canonical_lowercase(ref input in prop::collection::vec(any::<u8>(), 0..64)) {
            let output = super::encode(input);
            prop_assert!(output.bytes().all(|c| crate::ALPHABET.decode(c, 0).is_ok() && !c.is_ascii_uppercase()));
        }

        #[test]
        fn deterministic(ref input in prop::collection::vec(any::<u8>(), 0..64)) {
            prop_assert_eq!(super::encode(input), super::encode(input));
            prop_assert_eq!(super::encode_rspamd(input), super::encode_rspamd(input));
        }
    }
}
