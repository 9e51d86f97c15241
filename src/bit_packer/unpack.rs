use super::{Policy, QUANTUM_BITS};

impl Policy {
    /// Reassembles bytes from 5-bit quanta, calling `emit` once per complete byte.
    /// Bits left over after the last complete byte are padding and are dropped.
    pub fn unpack(self, quanta: impl IntoIterator<Item = u8>, emit: impl FnMut(u8)) {
        match self {
            Self::Standard => unpack_big_endian(quanta, emit),
            Self::Rspamd => unpack_little_endian(quanta, emit),
        }
    }
}

fn unpack_big_endian(quanta: impl IntoIterator<Item = u8>, mut emit: impl FnMut(u8)) {
    let mut accumulator: usize = 0;
    let mut bits: usize = 0;
    for quantum in quanta {
        accumulator = (accumulator << QUANTUM_BITS) | (quantum as usize);
        bits += QUANTUM_BITS;
        if bits >= 8 {
            bits -= 8;
            emit((accumulator >> bits) as u8);
            accumulator &= (1 << bits) - 1;
        }
    }
}

fn unpack_little_endian(quanta: impl IntoIterator<Item = u8>, mut emit: impl FnMut(u8)) {
    let mut accumulator: usize = 0;
    let mut bits: usize = 0;
    for quantum in quanta {
        accumulator |= (quantum as usize) << bits;
        bits += QUANTUM_BITS;
        if bits >= 8 {
            emit(accumulator as u8);
            accumulator >>= 8;
            bits -= 8;
        }
    }
}
