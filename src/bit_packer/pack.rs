use super::{Policy, QUANTUM_BITS};

const MASK: usize = (1 << QUANTUM_BITS) - 1;

impl Policy {
    /// Splits `input` into 5-bit quanta, calling `emit` once per quantum in output order.
    /// An incomplete final quantum is padded with zero bits.
    pub fn pack(self, input: impl AsRef<[u8]>, emit: impl FnMut(u8)) {
        match self {
            Self::Standard => pack_big_endian(input.as_ref(), emit),
            Self::Rspamd => pack_little_endian(input.as_ref(), emit),
        }
    }
}

fn pack_big_endian(input: &[u8], mut emit: impl FnMut(u8)) {
    let mut accumulator: usize = 0;
    let mut bits: usize = 0;
    for &value in input {
        accumulator = (accumulator << 8) | (value as usize);
        bits += 8;
        while bits >= QUANTUM_BITS {
            bits -= QUANTUM_BITS;
            emit((accumulator >> bits) as u8);
            accumulator &= (1 << bits) - 1;
        }
    }
    if bits > 0 {
        emit((accumulator << (QUANTUM_BITS - bits)) as u8);
    }
}

fn pack_little_endian(input: &[u8], mut emit: impl FnMut(u8)) {
    let mut accumulator: usize = 0;
    let mut bits: usize = 0;
    for &value in input {
        accumulator |= (value as usize) << bits;
        bits += 8;
        while bits >= QUANTUM_BITS {
            emit((accumulator & MASK) as u8);
            accumulator >>= QUANTUM_BITS;
            bits -= QUANTUM_BITS;
        }
    }
    if bits > 0 {
        emit(accumulator as u8);
    }
}
