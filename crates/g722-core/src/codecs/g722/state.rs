//! G.722 State Management
//!
//! Every piece of adaptive memory the codec carries between samples lives in
//! one of the structures below. Each stream direction owns its own instances;
//! nothing is shared or global, so any number of streams can coexist.

use crate::codecs::g722::tables::{DET_HIGH_INIT, DET_LOW_INIT};

/// Which sub-band a [`BandState`] belongs to
///
/// Both bands share one structure and one predictor; they differ only in the
/// initial step size and in the scale-factor constants used to adapt it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubBand {
    /// 0-4 kHz band, 6/5/4-bit codewords
    Low,
    /// 4-8 kHz band, 2-bit codewords
    High,
}

/// ADPCM state for a single sub-band (low or high)
///
/// Holds the adaptive quantizer step size, the pole/zero predictor
/// coefficients and the signal histories they are adapted from. Index 0 of
/// each history is the most recent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandState {
    pub(crate) band: SubBand,

    /// Quantizer step size, derived from `nb`
    pub(crate) det: i32,

    /// Logarithmic quantizer scale factor
    pub(crate) nb: i32,

    /// Pole predictor coefficients: a[0] unused, a[1] = a1, a[2] = a2
    pub(crate) a: [i16; 3],

    /// Zero predictor coefficients: b[0] unused, b[1]..b[6]
    pub(crate) b: [i16; 7],

    /// Quantized difference signal history
    pub(crate) d: [i16; 7],

    /// Reconstructed signal history
    pub(crate) r: [i16; 3],

    /// Partial reconstructed signal history (drives pole adaptation)
    pub(crate) p: [i16; 3],

    /// Pole section output for the next sample
    pub(crate) sp: i16,

    /// Zero section output for the next sample
    pub(crate) sz: i16,

    /// Predicted signal for the next sample
    pub(crate) s: i16,
}

impl BandState {
    /// Create a zeroed state for the given band
    pub fn new(band: SubBand) -> Self {
        let det = match band {
            SubBand::Low => DET_LOW_INIT,
            SubBand::High => DET_HIGH_INIT,
        };

        Self {
            band,
            det,
            nb: 0,
            a: [0; 3],
            b: [0; 7],
            d: [0; 7],
            r: [0; 3],
            p: [0; 3],
            sp: 0,
            sz: 0,
            s: 0,
        }
    }

    /// Create a zeroed low-band state (`det = 32`)
    pub fn new_low_band() -> Self {
        Self::new(SubBand::Low)
    }

    /// Create a zeroed high-band state (`det = 8`)
    pub fn new_high_band() -> Self {
        Self::new(SubBand::High)
    }

    /// Reset to the stream-start values for this band
    pub fn reset(&mut self) {
        *self = Self::new(self.band);
    }

    /// Band this state belongs to
    pub fn band(&self) -> SubBand {
        self.band
    }

    /// Current quantizer step size
    pub fn det(&self) -> i32 {
        self.det
    }

    /// Current logarithmic scale factor
    pub fn nb(&self) -> i32 {
        self.nb
    }

    /// First pole predictor coefficient
    pub fn a1(&self) -> i16 {
        self.a[1]
    }

    /// Second pole predictor coefficient
    pub fn a2(&self) -> i16 {
        self.a[2]
    }

    /// Zero predictor coefficients b1..b6
    pub fn zero_coefficients(&self) -> &[i16] {
        &self.b[1..]
    }

    /// Quantized difference history, most recent first
    pub fn difference_history(&self) -> &[i16; 7] {
        &self.d
    }

    /// Reconstructed signal history, most recent first
    pub fn reconstructed_history(&self) -> &[i16; 3] {
        &self.r
    }

    /// Partial reconstructed signal history, most recent first
    pub fn partial_history(&self) -> &[i16; 3] {
        &self.p
    }

    /// Pole section output for the next sample
    pub fn pole_estimate(&self) -> i16 {
        self.sp
    }

    /// Zero section output for the next sample
    pub fn zero_estimate(&self) -> i16 {
        self.sz
    }

    /// Predicted signal for the next sample
    pub fn signal_estimate(&self) -> i16 {
        self.s
    }
}

/// QMF analysis (transmit) state
///
/// 24-sample delay line of full-band input plus the decimation toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QmfAnalysisState {
    /// Input history, `x[0]` is the newest sample
    pub(crate) x: [i16; 24],

    /// True when one sample of the next pair has been buffered
    pub(crate) pending: bool,
}

impl QmfAnalysisState {
    /// Create an empty analysis filter state
    pub fn new() -> Self {
        Self {
            x: [0; 24],
            pending: false,
        }
    }

    /// Clear the delay line and the decimation toggle
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether a sample is waiting for its partner
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Delay line, newest sample first
    pub fn delay_line(&self) -> &[i16; 24] {
        &self.x
    }
}

impl Default for QmfAnalysisState {
    fn default() -> Self {
        Self::new()
    }
}

/// QMF synthesis (receive) state
///
/// Difference- and sum-path histories, twelve sub-band ticks each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QmfSynthesisState {
    /// `rl - rh` history, newest first
    pub(crate) xd: [i16; 12],

    /// `rl + rh` history, newest first
    pub(crate) xs: [i16; 12],
}

impl QmfSynthesisState {
    /// Create an empty synthesis filter state
    pub fn new() -> Self {
        Self {
            xd: [0; 12],
            xs: [0; 12],
        }
    }

    /// Clear both histories
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Difference-path history, newest first
    pub fn difference_line(&self) -> &[i16; 12] {
        &self.xd
    }

    /// Sum-path history, newest first
    pub fn sum_line(&self) -> &[i16; 12] {
        &self.xs
    }
}

impl Default for QmfSynthesisState {
    fn default() -> Self {
        Self::new()
    }
}
