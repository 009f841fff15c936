//! One-shot entry points for the SHAKE extendable-output functions.
//!
//! Both fill the caller's buffer with as much output as it holds. For
//! incremental squeezing, use a [`Sponge`](crate::Sponge) directly or the
//! [`digest`]-compatible readers in [`crate::bridge`].
use crate::sponge::Sponge;

/// Security-level parameter of SHAKE128, giving it its 168-byte rate.
pub(crate) const SHAKE128_LEVEL: usize = 16;

/// Security-level parameter of SHAKE256, giving it its 136-byte rate.
pub(crate) const SHAKE256_LEVEL: usize = 32;

fn xof(level: usize, input: &[u8], output: &mut [u8]) {
    let mut sponge = Sponge::new_unchecked(level);
    sponge.absorb_unchecked(input);
    sponge.begin_squeeze_unchecked();
    sponge.squeeze_unchecked(output);
}

/// Fill `output` with SHAKE128 of `input`.
pub fn shake128(input: &[u8], output: &mut [u8]) {
    xof(SHAKE128_LEVEL, input, output)
}

/// Fill `output` with SHAKE256 of `input`.
pub fn shake256(input: &[u8], output: &mut [u8]) {
    xof(SHAKE256_LEVEL, input, output)
}
