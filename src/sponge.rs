//! The sponge state machine behind every FIPS 202 hash.
//!
//! A [`Sponge`] is created for a chosen output length, fed input through
//! [`Sponge::absorb`] any number of times, and then leaves the absorbing
//! stage exactly once: [`Sponge::finalize`] emits a fixed digest, or
//! [`Sponge::begin_squeeze`] switches the context into repeatable
//! extendable-output squeezing. No transition ever returns to absorbing;
//! contexts are single-use.
//!
//! The checked operations validate the lifecycle stage and report misuse
//! as [`Sha3Error`]; the crate-internal `*_unchecked` layer underneath
//! them carries the actual data flow and is driven directly by the named
//! entry points, which only ever pass statically valid parameters.
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{Sha3Error, Sha3Result};
use crate::state::{KeccakState, STATE_BYTES};

/// Domain-separation suffix for the fixed-output SHA-3 functions.
const SHA3_DOMAIN: u8 = 0x06;

/// Domain-separation suffix for the SHAKE extendable-output functions.
const XOF_DOMAIN: u8 = 0x1f;

/// Top bit of the multi-rate padding, XORed into the last byte of the block.
const PAD_TERMINATOR: u8 = 0x80;

/// Lifecycle stage of a [`Sponge`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    /// Accepting input. The only stage a context can be created in.
    Absorbing,
    /// A fixed digest has been emitted. Terminal.
    FixedSqueezed,
    /// Emitting extendable output. Left only by disposal.
    XofSqueezing,
}

/// A byte-oriented sponge over the 200-byte Keccak state.
///
/// The input block size (the *rate*) is `200 - 2 * output_len` and is fixed
/// for the lifetime of the context. Between absorb operations the cursor
/// always sits inside the current block; while squeezing it may rest at the
/// end of a block, and the permutation runs lazily on the next byte out.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sponge {
    state: KeccakState,
    rate: usize,
    output_len: usize,
    cursor: usize,
    #[zeroize(skip)]
    mode: Mode,
}

impl Sponge {
    /// Create a sponge producing `output_len`-byte digests.
    ///
    /// The standard widths are 28, 32, 48 and 64 bytes for
    /// SHA3-224/256/384/512 (rates 144, 136, 104, 72) and 16 or 32 bytes
    /// for the SHAKE128/SHAKE256 security levels. Any `output_len` whose
    /// rate lands strictly inside `(0, 200)` is accepted.
    pub fn new(output_len: usize) -> Sha3Result<Self> {
        if output_len == 0 || 2 * output_len >= STATE_BYTES {
            return Err(Sha3Error::invalid_parameter(output_len));
        }
        Ok(Self::new_unchecked(output_len))
    }

    pub(crate) fn new_unchecked(output_len: usize) -> Self {
        Self {
            state: KeccakState::default(),
            rate: STATE_BYTES - 2 * output_len,
            output_len,
            cursor: 0,
            mode: Mode::Absorbing,
        }
    }

    /// Digest length in bytes chosen at construction.
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// Input block size in bytes, `200 - 2 * output_len`.
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Current lifecycle stage.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Feed input bytes into the sponge.
    ///
    /// Accepts any total length, including zero, split across any number of
    /// calls; only the concatenation matters.
    pub fn absorb(&mut self, input: &[u8]) -> Sha3Result<()> {
        if self.mode != Mode::Absorbing {
            return Err(Sha3Error::invalid_state("absorb into", self.mode));
        }
        self.absorb_unchecked(input);
        Ok(())
    }

    /// Close the sponge and emit the fixed-length digest.
    ///
    /// Valid exactly once, while absorbing. A second call fails with
    /// [`Sha3Error::InvalidState`] rather than producing another digest.
    pub fn finalize(&mut self) -> Sha3Result<Vec<u8>> {
        if self.mode != Mode::Absorbing {
            return Err(Sha3Error::invalid_state("finalize", self.mode));
        }
        let mut digest = vec![0u8; self.output_len];
        self.finalize_unchecked(&mut digest);
        self.mode = Mode::FixedSqueezed;
        Ok(digest)
    }

    /// Close the sponge for extendable output.
    ///
    /// Identical to [`Sponge::finalize`] except for the domain separator,
    /// and instead of emitting a digest it arms [`Sponge::squeeze_into`].
    pub fn begin_squeeze(&mut self) -> Sha3Result<()> {
        if self.mode != Mode::Absorbing {
            return Err(Sha3Error::invalid_state("begin squeezing", self.mode));
        }
        self.begin_squeeze_unchecked();
        self.mode = Mode::XofSqueezing;
        Ok(())
    }

    /// Fill `output` with the next squeezed bytes.
    ///
    /// Repeatable; the total output length is unbounded, and incremental
    /// reads concatenate to the same stream as one large read.
    pub fn squeeze_into(&mut self, output: &mut [u8]) -> Sha3Result<()> {
        if self.mode != Mode::XofSqueezing {
            return Err(Sha3Error::invalid_state("squeeze", self.mode));
        }
        self.squeeze_unchecked(output);
        Ok(())
    }

    /// Squeeze the next `len` bytes into an owned buffer.
    pub fn squeeze(&mut self, len: usize) -> Sha3Result<Vec<u8>> {
        let mut output = vec![0u8; len];
        self.squeeze_into(&mut output)?;
        Ok(output)
    }

    pub(crate) fn absorb_unchecked(&mut self, input: &[u8]) {
        for &byte in input {
            self.state[self.cursor] ^= byte;
            self.cursor += 1;
            if self.cursor == self.rate {
                self.state.permute();
                self.cursor = 0;
            }
        }
    }

    pub(crate) fn finalize_unchecked(&mut self, digest: &mut [u8]) {
        debug_assert!(digest.len() <= self.output_len);
        self.pad_and_permute(SHA3_DOMAIN);
        digest.copy_from_slice(&self.state[..digest.len()]);
    }

    pub(crate) fn begin_squeeze_unchecked(&mut self) {
        self.pad_and_permute(XOF_DOMAIN);
        // The padding permutation consumed a full block: restart the cursor.
        self.cursor = 0;
    }

    pub(crate) fn squeeze_unchecked(&mut self, output: &mut [u8]) {
        for byte in output.iter_mut() {
            if self.cursor >= self.rate {
                self.state.permute();
                self.cursor = 0;
            }
            *byte = self.state[self.cursor];
            self.cursor += 1;
        }
    }

    /// Multi-rate padding: the domain suffix lands at the cursor and the
    /// terminator bit on the last byte of the block. When the cursor sits on
    /// `rate - 1` both XORs hit the same byte; XOR commutes, so both apply.
    fn pad_and_permute(&mut self, domain: u8) {
        self.state[self.cursor] ^= domain;
        self.state[self.rate - 1] ^= PAD_TERMINATOR;
        self.state.permute();
    }
}

impl core::fmt::Debug for Sponge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Keep the state itself out of debug output.
        write!(
            f,
            "Sponge(rate: {}, output_len: {}, mode: {:?})",
            self.rate, self.output_len, self.mode
        )
    }
}

/// One-shot hash: absorb all of `input` and emit an `output_len`-byte digest.
///
/// The composition of [`Sponge::new`], [`Sponge::absorb`] and
/// [`Sponge::finalize`] for callers that have the whole message in hand.
pub fn hash(input: &[u8], output_len: usize) -> Sha3Result<Vec<u8>> {
    let mut sponge = Sponge::new(output_len)?;
    sponge.absorb(input)?;
    sponge.finalize()
}
