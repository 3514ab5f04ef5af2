//! G.722 QMF (Quadrature Mirror Filter) Implementation
//!
//! The analysis filter splits 16 kHz PCM into low and high sub-bands at
//! 8 kHz; the synthesis filter recombines them. Both use the same 24-tap
//! coefficient set, so the pair reconstructs the input with a 22-sample
//! delay and a small ripple near the 4 kHz crossover.

use crate::codecs::g722::predictor::saturate;
use crate::codecs::g722::state::{QmfAnalysisState, QmfSynthesisState};
use crate::codecs::g722::tables::{HIGH_BAND_MIN, QMF_COEFFS, SUBBAND_MAX, limit};

/// QMF analysis filter (encoder)
///
/// Shifts one full-band sample into the delay line. Every second call
/// returns the `(low, high)` sub-band pair for the last two samples; the
/// other calls return `None`.
pub fn push_sample(pcm: i16, state: &mut QmfAnalysisState) -> Option<(i32, i32)> {
    state.x.copy_within(0..23, 1);
    state.x[0] = pcm;

    state.pending = !state.pending;
    if state.pending {
        return None;
    }

    let mut sum_even = 0i32;
    let mut sum_odd = 0i32;
    for i in 0..12 {
        sum_even += i32::from(state.x[2 * i]) * QMF_COEFFS[2 * i];
        sum_odd += i32::from(state.x[2 * i + 1]) * QMF_COEFFS[2 * i + 1];
    }

    let low = limit((sum_even + sum_odd) >> 13);
    let high = ((sum_even - sum_odd) >> 13).clamp(HIGH_BAND_MIN, SUBBAND_MAX);

    Some((low, high))
}

/// QMF synthesis filter (decoder)
///
/// Consumes one reconstructed sub-band pair and produces two full-band
/// samples, in output order.
pub fn push_pair(rl: i32, rh: i32, state: &mut QmfSynthesisState) -> (i16, i16) {
    state.xd.copy_within(0..11, 1);
    state.xs.copy_within(0..11, 1);
    state.xd[0] = saturate(limit(rl.saturating_sub(rh)));
    state.xs[0] = saturate(limit(rl.saturating_add(rh)));

    let mut sum_even = 0i32;
    let mut sum_odd = 0i32;
    for i in 0..12 {
        sum_even += i32::from(state.xd[i]) * QMF_COEFFS[2 * i];
        sum_odd += i32::from(state.xs[i]) * QMF_COEFFS[2 * i + 1];
    }

    (
        saturate(limit(sum_even >> 12)),
        saturate(limit(sum_odd >> 12)),
    )
}

/// Run a whole buffer through the analysis filter
///
/// Returns the sub-band pairs produced; a trailing odd sample stays
/// buffered in `state`.
pub fn analyze(samples: &[i16], state: &mut QmfAnalysisState) -> Vec<(i32, i32)> {
    samples
        .iter()
        .filter_map(|&pcm| push_sample(pcm, state))
        .collect()
}

/// Run sub-band pairs through the synthesis filter
pub fn synthesize(bands: &[(i32, i32)], state: &mut QmfSynthesisState) -> Vec<i16> {
    let mut output = Vec::with_capacity(bands.len() * 2);
    for &(rl, rh) in bands {
        let (even, odd) = push_pair(rl, rh, state);
        output.push(even);
        output.push(odd);
    }
    output
}
