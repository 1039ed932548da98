use rand::{rngs::StdRng, SeedableRng};

/// Generator owned by exactly one perturbed run.
pub type SampleRng = StdRng;

/// Mix a master seed and a stream index into an independent 64-bit seed
/// (splitmix64 finalizer). Stream `i` always maps to the same seed, so samples
/// can be evaluated in any order or on any thread.
pub fn derive_seed(master: u64, stream: u64) -> u64 {
    let mut z = master
        .wrapping_add(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(stream.wrapping_mul(0xBF58_476D_1CE4_E5B9));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
pub fn sample_rng(master: u64, stream: u64) -> SampleRng {
    StdRng::seed_from_u64(derive_seed(master, stream))
}
