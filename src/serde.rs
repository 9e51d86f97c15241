//! Serde adapters storing byte fields as z-base-32 strings.
//!
//! ```
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Key {
//!     #[serde(with = "zbase32::serde")]
//!     fingerprint: Vec<u8>,
//!     #[serde(with = "zbase32::serde::rspamd")]
//!     token: Vec<u8>,
//! }
//! ```

use crate::{Decoder, Encoder, Policy};
use ::serde::{de::Error, Deserialize, Deserializer, Serializer};
use std::{borrow::Cow, iter::FromIterator};

fn serialize_with<S, T>(data: T, serializer: S, policy: Policy) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    serializer.serialize_str(&Encoder::with_policy(policy).encode(data))
}

fn deserialize_with<'de, D, T>(deserializer: D, policy: Policy) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromIterator<u8>,
{
    let input: Cow<str> = Deserialize::deserialize(deserializer)?;
    let output = Decoder::with_policy(policy).decode(input.as_bytes()).map_err(D::Error::custom)?;
    Ok(output.into_iter().collect())
}

pub fn serialize<S, T>(data: T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    serialize_with(data, serializer, Policy::Standard)
}

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromIterator<u8>,
{
    deserialize_with(deserializer, Policy::Standard)
}

pub mod rspamd {
    use super::{deserialize_with, serialize_with};
    use crate::Policy;
    use ::serde::{Deserializer, Serializer};
    use std::iter::FromIterator;

    pub fn serialize<S, T>(data: T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<[u8]>,
    {
        serialize_with(data, serializer, Policy::Rspamd)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromIterator<u8>,
    {
        deserialize_with(deserializer, Policy::Rspamd)
    }
}
