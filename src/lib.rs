//! z-base-32 encoding and decoding, in the standard bit order and in the order used by rspamd.
//!
//! ```
//! assert_eq!(zbase32::encode(b"asdasd"), "cf3seamuco");
//! assert_eq!(zbase32::decode("CF3SEAMUCO").unwrap(), b"asdasd");
//! assert_eq!(zbase32::encode_rspamd(b"hello"), "em3ags7p");
//! assert!(zbase32::decode("bar#").is_err());
//! ```

pub mod base_common;
pub mod bit_packer;
pub mod decode;
pub mod encode;
pub mod serde;

pub use base_common::Alphabet;
pub use bit_packer::Policy;
pub use decode::{decode, decode_into, decode_rspamd, decode_rspamd_into, decoded_len, Decoder, Error as DecodeError};
pub use encode::{encode, encode_into, encode_rspamd, encode_rspamd_into, encoded_len, Encoder};

pub const ALPHABET: Alphabet<32> = match Alphabet::new(b"ybndrfg8ejkmcpqxot1uwisza345h769") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};
