/// Odd 64-bit primes used as state multipliers. Selected per draw from the
/// mixed state, so the table length need not be a power of two.
pub const PRIMES: [u64; 15] = [
    18_446_744_073_709_551_557,
    14_029_467_366_897_019_727,
    11_400_714_819_323_198_549,
    9_650_029_242_287_828_579,
    9_223_372_036_854_775_783,
    2_870_177_450_012_600_261,
    2_305_843_009_213_693_951,
    1_609_587_929_392_839_161,
    1_099_511_628_211,
    4_294_967_311,
    4_294_967_291,
    2_147_483_647,
    1_000_000_007,
    998_244_353,
    16_777_619,
];
