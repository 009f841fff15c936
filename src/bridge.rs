//! [`digest`] trait bindings for the sponge.
//!
//! These types let the crate's hashers slot into any API written against
//! the RustCrypto [`digest`] traits: the fixed-output types implement
//! enough for the blanket [`digest::Digest`] impl, and the SHAKE types
//! implement [`ExtendableOutput`] with plain [`XofReader`] readers.
//!
//! The sponge lifecycle needs no runtime checking here: the trait surface
//! itself enforces it, since finalizing consumes the hasher (or resets it).
use digest::{
    ExtendableOutput, ExtendableOutputReset, FixedOutput, FixedOutputReset, HashMarker, Output,
    OutputSizeUser, Reset, Update, XofReader,
};
use generic_array::typenum::{U28, U32, U48, U64};

use crate::shake::{SHAKE128_LEVEL, SHAKE256_LEVEL};
use crate::sponge::Sponge;

macro_rules! impl_fixed_hasher {
    ($(#[$attr:meta])* $name:ident, $size:ty, $bytes:expr) => {
        $(#[$attr])*
        #[derive(Clone)]
        pub struct $name {
            sponge: Sponge,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    sponge: Sponge::new_unchecked($bytes),
                }
            }
        }

        impl HashMarker for $name {}

        impl Update for $name {
            fn update(&mut self, data: &[u8]) {
                self.sponge.absorb_unchecked(data);
            }
        }

        impl OutputSizeUser for $name {
            type OutputSize = $size;
        }

        impl FixedOutput for $name {
            fn finalize_into(mut self, out: &mut Output<Self>) {
                self.sponge.finalize_unchecked(out.as_mut_slice());
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                self.sponge = Sponge::new_unchecked($bytes);
            }
        }

        impl FixedOutputReset for $name {
            fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
                self.sponge.finalize_unchecked(out.as_mut_slice());
                Reset::reset(self);
            }
        }
    };
}

impl_fixed_hasher!(
    /// SHA3-224 hasher usable wherever a [`digest::Digest`] is expected.
    Sha3_224,
    U28,
    28
);
impl_fixed_hasher!(
    /// SHA3-256 hasher usable wherever a [`digest::Digest`] is expected.
    Sha3_256,
    U32,
    32
);
impl_fixed_hasher!(
    /// SHA3-384 hasher usable wherever a [`digest::Digest`] is expected.
    Sha3_384,
    U48,
    48
);
impl_fixed_hasher!(
    /// SHA3-512 hasher usable wherever a [`digest::Digest`] is expected.
    Sha3_512,
    U64,
    64
);

macro_rules! impl_xof_hasher {
    ($(#[$attr:meta])* $name:ident, $reader:ident, $level:expr) => {
        $(#[$attr])*
        #[derive(Clone)]
        pub struct $name {
            sponge: Sponge,
        }

        /// Squeezing half of the matching XOF hasher.
        #[derive(Clone)]
        pub struct $reader {
            sponge: Sponge,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    sponge: Sponge::new_unchecked($level),
                }
            }
        }

        impl Update for $name {
            fn update(&mut self, data: &[u8]) {
                self.sponge.absorb_unchecked(data);
            }
        }

        impl ExtendableOutput for $name {
            type Reader = $reader;

            fn finalize_xof(mut self) -> Self::Reader {
                self.sponge.begin_squeeze_unchecked();
                $reader {
                    sponge: self.sponge,
                }
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                self.sponge = Sponge::new_unchecked($level);
            }
        }

        impl ExtendableOutputReset for $name {
            fn finalize_xof_reset(&mut self) -> Self::Reader {
                let mut sponge =
                    core::mem::replace(&mut self.sponge, Sponge::new_unchecked($level));
                sponge.begin_squeeze_unchecked();
                $reader { sponge }
            }
        }

        impl XofReader for $reader {
            fn read(&mut self, buffer: &mut [u8]) {
                self.sponge.squeeze_unchecked(buffer);
            }
        }
    };
}

impl_xof_hasher!(
    /// SHAKE128 hasher implementing [`ExtendableOutput`].
    Shake128,
    Shake128Reader,
    SHAKE128_LEVEL
);
impl_xof_hasher!(
    /// SHAKE256 hasher implementing [`ExtendableOutput`].
    Shake256,
    Shake256Reader,
    SHAKE256_LEVEL
);
