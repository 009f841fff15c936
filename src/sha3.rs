//! One-shot entry points for the fixed-output SHA-3 functions.
use crate::sponge::Sponge;

fn fixed_digest<const N: usize>(input: &[u8]) -> [u8; N] {
    let mut sponge = Sponge::new_unchecked(N);
    sponge.absorb_unchecked(input);
    let mut digest = [0u8; N];
    sponge.finalize_unchecked(&mut digest);
    digest
}

/// SHA3-224 digest of `input`.
pub fn sha3_224(input: &[u8]) -> [u8; 28] {
    fixed_digest(input)
}

/// SHA3-256 digest of `input`.
pub fn sha3_256(input: &[u8]) -> [u8; 32] {
    fixed_digest(input)
}

/// SHA3-384 digest of `input`.
pub fn sha3_384(input: &[u8]) -> [u8; 48] {
    fixed_digest(input)
}

/// SHA3-512 digest of `input`.
pub fn sha3_512(input: &[u8]) -> [u8; 64] {
    fixed_digest(input)
}
