//! G.722 Tables and Constants
//!
//! Quantizer, scale-factor and QMF tables fixed by ITU-T Recommendation G.722.
//! Every value here is part of the bit-exact definition of the codec; none of
//! them may be tuned.

/// Low-band forward quantizer decision levels (q6)
///
/// Compared against `(q6[i] * det) >> 12` while searching the 6-bit
/// quantizer interval. Entries 0, 30 and 31 are never used as thresholds.
pub const Q6: [i32; 32] = [
    0, 35, 72, 110, 150, 190, 233, 276, 323, 370, 422, 473, 530, 587, 650, 714,
    786, 858, 940, 1023, 1121, 1219, 1339, 1458, 1612, 1765, 1980, 2195, 2557, 2919, 0, 0,
];

/// Low-band codeword map for negative differences (iln)
pub const ILN: [u8; 32] = [
    0, 63, 62, 31, 30, 29, 28, 27, 26, 25, 24, 23, 22, 21, 20, 19,
    18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 0,
];

/// Low-band codeword map for non-negative differences (ilp)
pub const ILP: [u8; 32] = [
    0, 61, 60, 59, 58, 57, 56, 55, 54, 53, 52, 51, 50, 49, 48, 47,
    46, 45, 44, 43, 42, 41, 40, 39, 38, 37, 36, 35, 34, 33, 32, 0,
];

/// Low-band log scale factor increments (wl)
pub const WL: [i32; 8] = [-60, -30, 58, 172, 334, 538, 1198, 3042];

/// Maps a 4-bit low-band codeword to its `WL` index (rl42)
pub const RL42: [usize; 16] = [0, 7, 6, 5, 4, 3, 2, 1, 7, 6, 5, 4, 3, 2, 1, 0];

/// Inverse log base table shared by both bands (ilb)
pub const ILB: [i32; 32] = [
    2048, 2093, 2139, 2186, 2233, 2282, 2332, 2383, 2435, 2489, 2543, 2599, 2656, 2714, 2774, 2834,
    2896, 2960, 3025, 3091, 3158, 3228, 3298, 3371, 3444, 3520, 3597, 3676, 3756, 3838, 3922, 4008,
];

/// 4-bit inverse quantizer (qm4)
///
/// Drives the predictor feedback in every mode and the Mode 3 output.
pub const QM4: [i32; 16] = [
    0, -20456, -12896, -8968, -6288, -4240, -2584, -1200,
    20456, 12896, 8968, 6288, 4240, 2584, 1200, 0,
];

/// 5-bit inverse quantizer (qm5), Mode 2 output
pub const QM5: [i32; 32] = [
    -280, -280, -23352, -17560, -14120, -11664, -9752, -8184,
    -6864, -5712, -4696, -3784, -2960, -2208, -1520, -880,
    23352, 17560, 14120, 11664, 9752, 8184, 6864, 5712,
    4696, 3784, 2960, 2208, 1520, 880, 280, -280,
];

/// 6-bit inverse quantizer (qm6), Mode 1 output
pub const QM6: [i32; 64] = [
    -136, -136, -136, -136, -24808, -21904, -19008, -16704,
    -14984, -13512, -12280, -11192, -10232, -9360, -8576, -7856,
    -7192, -6576, -6000, -5456, -4944, -4464, -4008, -3576,
    -3168, -2776, -2400, -2032, -1688, -1360, -1040, -728,
    24808, 21904, 19008, 16704, 14984, 13512, 12280, 11192,
    10232, 9360, 8576, 7856, 7192, 6576, 6000, 5456,
    4944, 4464, 4008, 3576, 3168, 2776, 2400, 2032,
    1688, 1360, 1040, 728, 432, 136, -432, -136,
];

/// High-band 2-bit inverse quantizer (qm2)
pub const QM2: [i32; 4] = [-7408, -1616, 7408, 1616];

/// High-band log scale factor increments (wh)
pub const WH: [i32; 3] = [0, -214, 798];

/// Maps a 2-bit high-band codeword to its `WH` index (rh2)
pub const RH2: [usize; 4] = [2, 1, 2, 1];

/// High-band codeword map for negative differences (ihn)
pub const IHN: [u8; 3] = [0, 1, 0];

/// High-band codeword map for non-negative differences (ihp)
pub const IHP: [u8; 3] = [0, 3, 2];

/// High-band quantizer decision level, compared as `(QUANTH_LEVEL * det) >> 12`
pub const QUANTH_LEVEL: i32 = 564;

/// 24-tap QMF coefficients (h), shared by analysis and synthesis
///
/// The taps sum to 8192, so the analysis stage has unity DC gain after `>> 13`.
pub const QMF_COEFFS: [i32; 24] = [
    3, -11, -11, 53, 12, -156, 32, 362, -210, -805, 951, 3876,
    3876, 951, -805, -210, 362, 32, -156, 12, 53, -11, -11, 3,
];

/// Initial low-band step size
pub const DET_LOW_INIT: i32 = 32;
/// Initial high-band step size
pub const DET_HIGH_INIT: i32 = 8;

/// Upper clamp for the low-band log scale factor
pub const NB_LOW_MAX: i32 = 18432;
/// Upper clamp for the high-band log scale factor
pub const NB_HIGH_MAX: i32 = 22528;

/// `ILB` shift base for the low band
pub const SCALE_BASE_LOW: i32 = 8;
/// `ILB` shift base for the high band
pub const SCALE_BASE_HIGH: i32 = 10;

/// Pole predictor bound for `|a2|`
pub const A2_LIMIT: i32 = 12288;
/// Pole predictor bound for `|a1| + a2`
pub const A1_A2_LIMIT: i32 = 15360;

/// Sub-band sample bounds (15-bit signal range)
pub const SUBBAND_MIN: i32 = -16384;
/// Upper sub-band bound
pub const SUBBAND_MAX: i32 = 16383;
/// Lower bound of the analysis high band, one step inside `SUBBAND_MIN`
pub const HIGH_BAND_MIN: i32 = -16383;

/// Clamp to the sub-band signal range
#[inline]
pub fn limit(value: i32) -> i32 {
    value.clamp(SUBBAND_MIN, SUBBAND_MAX)
}
