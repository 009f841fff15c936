//! The Keccak-f\[1600\] permutation.
//!
//! This is the mixing function at the bottom of every FIPS 202 hash:
//! 24 rounds of Theta, Rho, Pi, Chi and Iota over a 5×5 lattice of 64-bit
//! lanes (lane index = x + 5y). Rho and Pi are fused into a single walk
//! over the lane cycle, driven by the two tables below.

/// Number of rounds applied by [`keccak_f`].
pub const ROUNDS: usize = 24;

/// Round constants, XORed into lane 0 by the Iota step.
const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rotation offsets for the fused Rho+Pi step. All in `[1, 63]`.
const ROTATIONS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Lane visiting order for the fused Rho+Pi step.
const PI_LANES: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Apply the full 24-round Keccak-f\[1600\] permutation to `lanes` in place.
///
/// Pure and deterministic: same lanes in, same lanes out, no failure mode.
pub fn keccak_f(lanes: &mut [u64; 25]) {
    let mut parity = [0u64; 5];

    for &round_constant in ROUND_CONSTANTS.iter() {
        // Theta
        for x in 0..5 {
            parity[x] = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
            for y in (0..25).step_by(5) {
                lanes[y + x] ^= d;
            }
        }

        // Rho + Pi: rotate each lane while moving it along the Pi cycle.
        let mut carried = lanes[1];
        for (&target, &rotation) in PI_LANES.iter().zip(ROTATIONS.iter()) {
            let displaced = lanes[target];
            lanes[target] = carried.rotate_left(rotation);
            carried = displaced;
        }

        // Chi, from a snapshot of each row taken before the row is touched.
        for row in lanes.chunks_exact_mut(5) {
            let snapshot = [row[0], row[1], row[2], row[3], row[4]];
            for x in 0..5 {
                row[x] ^= !snapshot[(x + 1) % 5] & snapshot[(x + 2) % 5];
            }
        }

        // Iota
        lanes[0] ^= round_constant;
    }
}
