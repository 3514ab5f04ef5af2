//! G.722 Test Utilities
//!
//! Signal generators and error measurements shared by the stream tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::codecs::g722::{G722Decoder, G722Encoder};
use crate::types::Mode;

/// End-to-end delay of the analysis/synthesis filter pair, in samples
pub const CODEC_DELAY: usize = 22;

/// Generate a sine tone at 16 kHz
pub fn sine(frequency: f64, amplitude: f64, len: usize) -> Vec<i16> {
    (0..len)
        .map(|n| {
            let phase = 2.0 * std::f64::consts::PI * frequency * n as f64 / 16000.0;
            (amplitude * phase.sin()).round() as i16
        })
        .collect()
}

/// Integer triangle wave, period 40 samples, peak 8000
pub fn triangle(len: usize) -> Vec<i16> {
    (0..len)
        .map(|n| {
            let p = (n % 40) as i16;
            if p < 20 {
                p * 800 - 8000
            } else {
                8000 - (p - 20) * 800
            }
        })
        .collect()
}

/// Square wave at full sub-band scale, toggling every `half_period` samples
pub fn square(len: usize, half_period: usize) -> Vec<i16> {
    (0..len)
        .map(|n| if (n / half_period) % 2 == 0 { 16384 } else { -16384 })
        .collect()
}

/// Seeded uniform noise over the full i16 range
pub fn noise(seed: u64, len: usize) -> Vec<i16> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen::<i16>()).collect()
}

/// Encode a whole buffer with a fresh encoder
pub fn encode_all(mode: Mode, samples: &[i16]) -> Vec<u8> {
    let mut encoder = G722Encoder::open(mode);
    let mut octets = Vec::new();
    encoder.encode_samples(samples, &mut octets);
    octets
}

/// Decode a whole payload with a fresh decoder
pub fn decode_all(mode: Mode, octets: &[u8]) -> Vec<i16> {
    let mut decoder = G722Decoder::open(mode);
    let mut pcm = Vec::new();
    decoder
        .decode_octets(octets, &mut pcm)
        .expect("encoder output must decode");
    pcm
}

/// Encode then decode with fresh streams
pub fn round_trip(mode: Mode, samples: &[i16]) -> Vec<i16> {
    decode_all(mode, &encode_all(mode, samples))
}

/// RMS of `output[n + delay] - input[n]` over `range`
pub fn rms_error(input: &[i16], output: &[i16], delay: usize, range: std::ops::Range<usize>) -> f64 {
    let count = range.len() as f64;
    let sum: f64 = range
        .map(|n| {
            let err = f64::from(output[n + delay]) - f64::from(input[n]);
            err * err
        })
        .sum();
    (sum / count).sqrt()
}
