use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
    UppercaseCharacter { character: char, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Self::UppercaseCharacter { character, index } => write!(f, "Uppercase character '{}' at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

/// A symbol table mapping values `0..N` to lowercase ASCII characters.
///
/// Decoding folds case: both `'a'` and `'A'` resolve to the value of `'a'`.
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, value: u8, index: usize) -> Result<u8, DecodeError> {
        if value >= 128 {
            return Err(DecodeError::NonAsciiCharacter { index, character: value });
        }
        match self.decode[value as usize] {
            Some(value) => Ok(value),
            None => Err(DecodeError::InvalidCharacter {
                character: value as char,
                index,
            }),
        }
    }

    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < encode.len() {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if character.is_ascii_uppercase() {
                return Err(Error::UppercaseCharacter {
                    character: character as char,
                    index,
                });
            }
            if let Some(v) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: v as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            if character.is_ascii_lowercase() {
                decode[character.to_ascii_uppercase() as usize] = Some(index as u8);
            }
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    pub const fn len(&self) -> usize {
        self.encode.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, DecodeError, Error};

    const ALPHABET: Alphabet<4> = match Alphabet::new(b"a1b2") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };

    #[test]
    fn encode_decode() {
        for value in 0..ALPHABET.len() {
            assert_eq!(ALPHABET.decode(ALPHABET.encode(value), 0), Ok(value as u8));
        }
    }

    #[test]
    fn decode_folds_case() {
        assert_eq!(ALPHABET.decode(b'A', 0), Ok(0));
        assert_eq!(ALPHABET.decode(b'B', 0), Ok(2));
        assert_eq!(ALPHABET.decode(b'1', 0), Ok(1));
    }

    #[test]
    fn decode_invalid() {
        assert_eq!(
            ALPHABET.decode(b'#', 7),
            Err(DecodeError::InvalidCharacter { character: '#', index: 7 })
        );
        assert_eq!(
            ALPHABET.decode(0xc3, 2),
            Err(DecodeError::NonAsciiCharacter { character: 0xc3, index: 2 })
        );
    }

    #[test]
    fn new_invalid() {
        assert!(matches!(
            Alphabet::new(b"abca"),
            Err(Error::DuplicateCharacter { character: 'a', first: 0, second: 3 })
        ));
        assert!(matches!(
            Alphabet::new(b"abCd"),
            Err(Error::UppercaseCharacter { character: 'C', index: 2 })
        ));
        assert!(matches!(
            Alphabet::new(&[b'a', 0xff]),
            Err(Error::NonAsciiCharacter { character: 0xff, index: 1 })
        ));
    }
}
