//! Byte-oriented sponge implementation of the FIPS 202 hash functions:
//! the fixed-output SHA-3 family (SHA3-224/256/384/512) and the SHAKE
//! extendable-output functions (SHAKE128/256).
//!
//! Everything is built on one primitive: the 24-round Keccak-f\[1600\]
//! permutation over a 1600-bit state, driven as a sponge. Input bytes are
//! XORed into the state and the permutation runs each time an input block
//! fills up; output bytes are read back out of the state, permuting again
//! whenever a block is exhausted.
//!
//! # One-shot hashing
//!
//! ```
//! use fips202::sha3_256;
//!
//! let digest = sha3_256(b"abc");
//! assert_eq!(
//!     hex::encode(digest),
//!     "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
//! );
//! ```
//!
//! # Streaming
//!
//! A [`Sponge`] accepts input split any way the caller likes; only the
//! concatenation matters. Contexts are single-use: once finalized, a
//! sponge never returns to absorbing.
//!
//! ```
//! use fips202::{hash, Sponge};
//!
//! let mut sponge = Sponge::new(32)?;
//! sponge.absorb(b"streamed ")?;
//! sponge.absorb(b"in pieces")?;
//! assert_eq!(sponge.finalize()?, hash(b"streamed in pieces", 32)?);
//! # Ok::<(), fips202::Sha3Error>(())
//! ```
//!
//! # Extendable output
//!
//! SHAKE contexts switch into squeezing once and then emit as much output
//! as is asked for, incrementally or at once.
//!
//! ```
//! use fips202::Sponge;
//!
//! let mut xof = Sponge::new(16)?; // SHAKE128 parameters
//! xof.absorb(b"seed")?;
//! xof.begin_squeeze()?;
//! let first = xof.squeeze(16)?;
//! let second = xof.squeeze(16)?;
//!
//! let mut whole = Sponge::new(16)?;
//! whole.absorb(b"seed")?;
//! whole.begin_squeeze()?;
//! assert_eq!([first, second].concat(), whole.squeeze(32)?);
//! # Ok::<(), fips202::Sha3Error>(())
//! ```
//!
//! # Batteries included
//!
//! The [`bridge`] module exposes the same hashers through the RustCrypto
//! [`digest`] traits ([`Sha3_256`] and friends as [`digest::Digest`]s, the
//! SHAKE types as [`digest::ExtendableOutput`]), so they slot into
//! anything written against those interfaces.
//!
//! All sponge state is zeroized on drop.

/// [`digest`] trait bindings for the sponge.
pub mod bridge;
/// Built-in error types.
mod errors;
/// The Keccak-f\[1600\] permutation.
pub mod permutation;
/// Fixed-output SHA-3 entry points.
mod sha3;
/// SHAKE entry points.
mod shake;
/// Sponge context and state machine.
mod sponge;
/// The 1600-bit state and its byte/lane views.
mod state;

pub use bridge::{
    Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake128Reader, Shake256, Shake256Reader,
};
pub use errors::{Sha3Error, Sha3Result};
pub use permutation::keccak_f;
pub use sha3::{sha3_224, sha3_256, sha3_384, sha3_512};
pub use shake::{shake128, shake256};
pub use sponge::{hash, Mode, Sponge};
pub use state::KeccakState;
