//! Errors surfaced by sponge contexts.
//!
//! The taxonomy is deliberately narrow. [`Sha3Error::InvalidParameter`]
//! rejects output lengths that leave no room for the sponge capacity, and
//! [`Sha3Error::InvalidState`] rejects operations issued in the wrong
//! lifecycle stage (finalizing twice, squeezing a context that was never
//! switched to XOF mode, and so on). Everything else the crate does is a
//! total function over its input domain: there is nothing to retry and
//! nothing degrades silently, so misuse is reported immediately.
use std::{error::Error, fmt::Display};

use crate::sponge::Mode;

/// A caller contract violation detected by a sponge context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sha3Error {
    /// The requested digest length `output_len` would put the input block
    /// size `200 - 2 * output_len` outside `(0, 200)`.
    InvalidParameter {
        /// The rejected output length, in bytes.
        output_len: usize,
    },
    /// An operation was attempted on a context in the wrong lifecycle stage.
    InvalidState {
        /// The operation that was attempted.
        operation: &'static str,
        /// The stage the context was actually in.
        mode: Mode,
    },
}

/// The result type of all fallible sponge operations.
pub type Sha3Result<T> = Result<T, Sha3Error>;

impl Display for Sha3Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter { output_len } => {
                write!(f, "invalid output length: {} bytes", output_len)
            }
            Self::InvalidState { operation, mode } => {
                write!(f, "cannot {} a sponge in {:?} mode", operation, mode)
            }
        }
    }
}

impl Error for Sha3Error {}

impl Sha3Error {
    pub(crate) fn invalid_parameter(output_len: usize) -> Self {
        let error = Self::InvalidParameter { output_len };
        log::error!("sponge misuse: {}", error);
        error
    }

    pub(crate) fn invalid_state(operation: &'static str, mode: Mode) -> Self {
        let error = Self::InvalidState { operation, mode };
        log::error!("sponge misuse: {}", error);
        error
    }
}
