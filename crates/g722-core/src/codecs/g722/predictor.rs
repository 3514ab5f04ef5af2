//! Adaptive Predictor and Scale Factor Adaptation
//!
//! The pieces of the sub-band ADPCM loop that are common to both bands:
//! the 16-bit saturation primitive, log scale factor adaptation, and the
//! pole/zero predictor update run after every quantized difference.
//!
//! All arithmetic is carried out in `i32` and saturated back to the 16-bit
//! range before it is stored, so none of these functions can overflow or
//! panic for any state reachable from [`BandState::new`].

use crate::codecs::g722::state::BandState;
use crate::codecs::g722::tables::{
    A1_A2_LIMIT, A2_LIMIT, ILB, NB_HIGH_MAX, NB_LOW_MAX, RH2, RL42, SCALE_BASE_HIGH,
    SCALE_BASE_LOW, WH, WL,
};

/// Saturate to the signed 16-bit range
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn saturate(value: i32) -> i16 {
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

/// Leak a coefficient by 1 - 2^-8
#[inline]
fn leak(coefficient: i16) -> i32 {
    (i32::from(coefficient) * 32640) >> 15
}

/// Low-band log scale factor update (LOGSCL)
///
/// `ril` is the 4-bit codeword feeding the predictor.
pub fn logscl(ril: u8, nb: i32) -> i32 {
    let wd = (nb * 127) >> 7;
    (wd + WL[RL42[usize::from(ril & 0x0F)]]).clamp(0, NB_LOW_MAX)
}

/// High-band log scale factor update (LOGSCH)
pub fn logsch(ih: u8, nb: i32) -> i32 {
    let wd = (nb * 127) >> 7;
    (wd + WH[RH2[usize::from(ih & 0x03)]]).clamp(0, NB_HIGH_MAX)
}

/// Convert a log scale factor into a linear step size
///
/// `base` is 8 for the low band and 10 for the high band. A negative shift
/// count shifts left.
pub fn scale_factor(nb: i32, base: i32) -> i32 {
    #[allow(clippy::cast_sign_loss)]
    let index = ((nb >> 6) & 31) as usize;
    let shift = base - (nb >> 11);
    let linear = if shift < 0 {
        ILB[index] << -shift
    } else {
        ILB[index] >> shift
    };
    linear << 2
}

/// Low-band step size (SCALEL)
pub fn scalel(nb: i32) -> i32 {
    scale_factor(nb, SCALE_BASE_LOW)
}

/// High-band step size (SCALEH)
pub fn scaleh(nb: i32) -> i32 {
    scale_factor(nb, SCALE_BASE_HIGH)
}

/// Second pole coefficient update (UPPOL2)
///
/// Sign agreements of the partial signal history drive `a2` towards
/// ±128 per step, with a 1 - 2^-7 leak. Result is bounded by ±12288.
pub fn uppol2(a1: i16, a2: i16, p: &[i16; 3]) -> i16 {
    let sg0 = p[0] >> 15;
    let sg1 = p[1] >> 15;
    let sg2 = p[2] >> 15;

    let wd1 = i32::from(saturate(i32::from(a1) << 2));
    let wd2 = (if sg0 == sg1 { -wd1 } else { wd1 }).min(32767);
    let wd3 = (wd2 >> 7) + if sg0 == sg2 { 128 } else { -128 };
    let wd4 = wd3 + ((i32::from(a2) * 32512) >> 15);

    saturate(wd4.clamp(-A2_LIMIT, A2_LIMIT))
}

/// First pole coefficient update (UPPOL1)
///
/// `a2` is the freshly updated second coefficient; the result satisfies
/// `|a1| <= 15360 - a2`.
pub fn uppol1(a1: i16, a2: i16, p: &[i16; 3]) -> i16 {
    let sg0 = p[0] >> 15;
    let sg1 = p[1] >> 15;

    let wd1 = if sg0 == sg1 { 192 } else { -192 };
    let apl1 = i32::from(saturate(wd1 + leak(a1)));
    let bound = i32::from(saturate(A1_A2_LIMIT - i32::from(a2)));

    saturate(apl1.clamp(-bound, bound))
}

/// Zero coefficient update (UPZERO)
///
/// Returns the next `b[1..=6]`; index 0 is unused.
pub fn upzero(d: &[i16; 7], b: &[i16; 7]) -> [i16; 7] {
    let step = if d[0] == 0 { 0 } else { 128 };
    let sg0 = d[0] >> 15;

    let mut next = [0i16; 7];
    for i in 1..7 {
        let wd = if d[i] >> 15 == sg0 { step } else { -step };
        next[i] = saturate(wd + leak(b[i]));
    }
    next
}

/// Pole section output (FILTEP)
pub fn filtep(r: &[i16; 3], a: &[i16; 3]) -> i16 {
    let wd1 = i32::from(saturate(i32::from(r[1]) * 2));
    let wd1 = (i32::from(a[1]) * wd1) >> 15;
    let wd2 = i32::from(saturate(i32::from(r[2]) * 2));
    let wd2 = (i32::from(a[2]) * wd2) >> 15;
    saturate(wd1 + wd2)
}

/// Zero section output (FILTEZ)
pub fn filtez(d: &[i16; 7], b: &[i16; 7]) -> i16 {
    let sum: i32 = (1..7)
        .rev()
        .map(|i| {
            let wd = i32::from(saturate(i32::from(d[i]) * 2));
            (i32::from(b[i]) * wd) >> 15
        })
        .sum();
    saturate(sum)
}

/// Run the predictor adaptation for one quantized difference `d`
///
/// RECONS, PARREC, UPPOL2, UPPOL1, UPZERO, DELAYA, FILTEP, FILTEZ and PREDIC
/// in that order. Afterwards `state.s` holds the prediction for the next
/// sample.
pub fn adapt(state: &mut BandState, d: i32) {
    // RECONS / PARREC
    state.d[0] = saturate(d);
    state.r[0] = saturate(i32::from(state.s) + d);
    state.p[0] = saturate(i32::from(state.sz) + d);

    let a2 = uppol2(state.a[1], state.a[2], &state.p);
    let a1 = uppol1(state.a[1], a2, &state.p);
    let b = upzero(&state.d, &state.b);

    // DELAYA
    state.d.copy_within(0..6, 1);
    state.b[1..].copy_from_slice(&b[1..]);
    state.r.copy_within(0..2, 1);
    state.p.copy_within(0..2, 1);
    state.a[1] = a1;
    state.a[2] = a2;

    // FILTEP / FILTEZ / PREDIC
    state.sp = filtep(&state.r, &state.a);
    state.sz = filtez(&state.d, &state.b);
    state.s = saturate(i32::from(state.sp) + i32::from(state.sz));
}
