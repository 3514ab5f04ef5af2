//! G.722 ADPCM Implementation
//!
//! Sub-band encoders and decoders. Each call consumes one sub-band sample
//! (or codeword) and advances the band's adaptive state by exactly one step.
//!
//! The encoder runs the same inverse quantizer and predictor update as the
//! decoder, driven by the codeword it just produced, so an encoder and a
//! decoder fed the same codeword stream hold identical [`BandState`]s.
//!
//! In the low band only the four most significant codeword bits drive the
//! adaptation, whatever the mode. That is what lets a Mode 1 stream be
//! truncated to Mode 2 or Mode 3 without desynchronising the predictor.

use crate::codecs::g722::predictor::{adapt, logscl, logsch, saturate, scaleh, scalel};
use crate::codecs::g722::state::BandState;
use crate::codecs::g722::tables::{IHN, IHP, ILN, ILP, Q6, QM2, QM4, QM5, QM6, QUANTH_LEVEL};
use crate::types::Mode;

/// Magnitude used by both quantizers: `e` for `e >= 0`, `-(e + 1)` otherwise
#[inline]
fn magnitude(e: i32) -> i32 {
    if e >= 0 { e } else { -(e + 1) }
}

/// Low-band 6-bit quantizer (QUANTL)
///
/// Searches the decision levels in order and maps the interval index
/// through the sign-dependent codeword table.
pub fn quantl(el: i32, det: i32) -> u8 {
    let wd = magnitude(el);

    let mil = (1..30)
        .find(|&i| wd < (Q6[i] * det) >> 12)
        .unwrap_or(30);

    if el < 0 { ILN[mil] } else { ILP[mil] }
}

/// High-band 2-bit quantizer (QUANTH)
pub fn quanth(eh: i32, det: i32) -> u8 {
    let wd = magnitude(eh);
    let mih = if wd >= (QUANTH_LEVEL * det) >> 12 { 2 } else { 1 };

    if eh < 0 { IHN[mih] } else { IHP[mih] }
}

/// Top four bits of a low-band codeword, which drive the adaptation
#[inline]
fn feedback_bits(code: u8, mode: Mode) -> u8 {
    code >> (mode.low_bits() - 4)
}

/// Low-band quantized difference fed back to the predictor (INVQAL)
#[inline]
fn invqal(ril: u8, det: i32) -> i32 {
    (det * QM4[usize::from(ril)]) >> 15
}

/// Low-band output inverse quantizer (INVQBL)
///
/// Uses the full codeword width of the mode.
#[inline]
fn invqbl(code: u8, det: i32, mode: Mode) -> i32 {
    let index = usize::from(code);
    let level = match mode {
        Mode::Mode1 => QM6[index],
        Mode::Mode2 => QM5[index],
        Mode::Mode3 => QM4[index],
    };
    (det * level) >> 15
}

/// Adapt the low band after a 4-bit feedback codeword
fn low_band_adapt(state: &mut BandState, ril: u8) {
    let d = invqal(ril, state.det);
    state.nb = logscl(ril, state.nb);
    state.det = scalel(state.nb);
    adapt(state, d);
}

/// Adapt the high band after a 2-bit codeword
fn high_band_adapt(state: &mut BandState, ih: u8) {
    let d = (state.det * QM2[usize::from(ih)]) >> 15;
    state.nb = logsch(ih, state.nb);
    state.det = scaleh(state.nb);
    adapt(state, d);
}

/// Low-band ADPCM encoder
///
/// # Arguments
/// * `x` - Low sub-band sample from the analysis filter (nominally ±16384)
/// * `state` - Low-band state
/// * `mode` - Selects the 6, 5 or 4-bit codeword width
///
/// # Returns
/// * Codeword right-aligned in `mode.low_bits()` bits
pub fn low_band_encode(x: i32, state: &mut BandState, mode: Mode) -> u8 {
    // SUBTRA
    let el = i32::from(saturate(x.saturating_sub(i32::from(state.s))));

    let il = quantl(el, state.det);
    low_band_adapt(state, il >> 2);

    il >> (6 - mode.low_bits())
}

/// Low-band ADPCM decoder
///
/// Bits above the mode's codeword width are ignored.
///
/// # Returns
/// * Reconstructed low sub-band sample
pub fn low_band_decode(codeword: u8, state: &mut BandState, mode: Mode) -> i32 {
    let code = codeword & mode.low_mask();

    let dq = invqbl(code, state.det, mode);
    let rl = saturate(i32::from(state.s) + dq);

    low_band_adapt(state, feedback_bits(code, mode));

    i32::from(rl)
}

/// High-band ADPCM encoder
///
/// # Returns
/// * 2-bit codeword
pub fn high_band_encode(x: i32, state: &mut BandState) -> u8 {
    let eh = i32::from(saturate(x.saturating_sub(i32::from(state.s))));

    let ih = quanth(eh, state.det);
    high_band_adapt(state, ih);

    ih
}

/// High-band ADPCM decoder
///
/// Only the two least significant bits of `codeword` are used.
pub fn high_band_decode(codeword: u8, state: &mut BandState) -> i32 {
    let ih = codeword & 0x03;

    let dh = (state.det * QM2[usize::from(ih)]) >> 15;
    let rh = saturate(i32::from(state.s) + dh);

    high_band_adapt(state, ih);

    i32::from(rh)
}
