//! The 1600-bit sponge state, viewed as bytes.
//!
//! Absorption and extraction address the state byte by byte; the
//! permutation sees it as 25 little-endian 64-bit lanes. The two views are
//! a lossless round trip of the same 1600 bits, on any host byte order.
use core::ops::{Index, IndexMut, Range, RangeFrom, RangeFull, RangeTo};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::permutation::keccak_f;

/// Size of the Keccak-f\[1600\] state in bytes.
pub const STATE_BYTES: usize = 200;

/// Number of 64-bit lanes in the state.
pub const STATE_LANES: usize = 25;

/// A 200-byte Keccak state, exclusively owned by one sponge and wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeccakState([u8; STATE_BYTES]);

impl KeccakState {
    /// Apply Keccak-f\[1600\] to the full state.
    pub fn permute(&mut self) {
        let mut lanes = self.load_lanes();
        keccak_f(&mut lanes);
        self.store_lanes(&lanes);
    }

    /// Repack the byte view into 25 lanes, byte 0 least significant.
    pub(crate) fn load_lanes(&self) -> [u64; STATE_LANES] {
        let mut lanes = [0u64; STATE_LANES];
        for (lane, b) in lanes.iter_mut().zip(self.0.chunks_exact(8)) {
            *lane = u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
        }
        lanes
    }

    /// Write 25 lanes back over the byte view, least-significant byte first.
    pub(crate) fn store_lanes(&mut self, lanes: &[u64; STATE_LANES]) {
        for (chunk, lane) in self.0.chunks_exact_mut(8).zip(lanes.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
    }
}

impl Default for KeccakState {
    fn default() -> Self {
        Self([0u8; STATE_BYTES])
    }
}

impl Index<usize> for KeccakState {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for KeccakState {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Index<Range<usize>> for KeccakState {
    type Output = [u8];

    fn index(&self, index: Range<usize>) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<Range<usize>> for KeccakState {
    fn index_mut(&mut self, index: Range<usize>) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Index<RangeFrom<usize>> for KeccakState {
    type Output = [u8];

    fn index(&self, index: RangeFrom<usize>) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<RangeFrom<usize>> for KeccakState {
    fn index_mut(&mut self, index: RangeFrom<usize>) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Index<RangeTo<usize>> for KeccakState {
    type Output = [u8];

    fn index(&self, index: RangeTo<usize>) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<RangeTo<usize>> for KeccakState {
    fn index_mut(&mut self, index: RangeTo<usize>) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Index<RangeFull> for KeccakState {
    type Output = [u8];

    fn index(&self, _index: RangeFull) -> &Self::Output {
        &self.0
    }
}

impl IndexMut<RangeFull> for KeccakState {
    fn index_mut(&mut self, _index: RangeFull) -> &mut Self::Output {
        &mut self.0
    }
}
