//! G.722 Reference Tests
//!
//! Pinned codeword and PCM sequences for short inputs in every mode, plus
//! quality bounds for longer tones. Any change to the fixed-point pipeline
//! shows up here first.

use super::utils::*;
use crate::codecs::g722::qmf;
use crate::codecs::g722::state::{QmfAnalysisState, QmfSynthesisState};
use crate::codecs::g722::G722Encoder;
use crate::types::Mode;

const SHORT_INPUT: [i16; 8] = [0, 1000, -1000, 16383, -16384, 0, 0, 0];

const TRIANGLE_MODE1: [u8; 32] = [
    41, 132, 32, 132, 32, 132, 4, 140, 16, 151, 127, 116, 174, 42, 168, 37, 103, 237, 243, 122,
    220, 215, 83, 144, 13, 139, 143, 214, 91, 253, 249, 244,
];

const TRIANGLE_MODE2: [u8; 32] = [
    20, 66, 16, 66, 16, 66, 2, 70, 8, 75, 63, 58, 87, 21, 84, 18, 51, 118, 121, 61, 110, 107, 41,
    72, 6, 69, 71, 107, 45, 126, 124, 122,
];

const TRIANGLE_MODE3: [u8; 32] = [
    10, 33, 8, 33, 8, 33, 1, 35, 4, 37, 31, 29, 43, 10, 42, 9, 25, 59, 60, 30, 55, 53, 20, 36, 3,
    34, 35, 53, 22, 63, 62, 61,
];

const TRIANGLE_DECODED_MODE1: [i16; 64] = [
    0, -1, -1, 0, 0, -1, -1, 3, 0, -11, 1, 39, 0, -91, 9, 179, -17, -345, -40, 604, 422, -921,
    -2600, -3951, -4745, -4970, -4661, -4032, -3223, -2431, -1660, -842, -1, 765, 1535, 2317,
    3169, 4036, 4730, 5286, 6186, 7300, 7821, 7207, 6301, 5469, 4663, 3892, 3127, 2331, 1544, 732,
    -81, -866, -1665, -2462, -3231, -3993, -4800, -5614, -6444, -7247, -7591, -7062,
];

const TRIANGLE_DECODED_MODE2: [i16; 64] = [
    0, -1, -1, 0, 0, -1, -1, 3, 0, -11, 1, 37, 1, -86, 8, 169, -15, -325, -38, 570, 397, -876,
    -2447, -3700, -4469, -4731, -4438, -3819, -3116, -2492, -1791, -930, -59, 686, 1424, 2183,
    3037, 3899, 4502, 4979, 6047, 7501, 8191, 7497, 6477, 5611, 4816, 4038, 3179, 2259, 1479, 783,
    1, -888, -1812, -2639, -3267, -3840, -4675, -5731, -6711, -7479, -7803, -7292,
];

const TRIANGLE_DECODED_MODE3: [i16; 64] = [
    0, -1, -1, 0, 0, -1, -1, 2, 0, -10, 1, 32, 1, -75, 7, 147, -13, -288, -34, 508, 346, -793,
    -2138, -3184, -3935, -4339, -4081, -3417, -2942, -2702, -2002, -822, 86, 557, 1239, 2302,
    3444, 4318, 4725, 4870, 5459, 6659, 7869, 8035, 7059, 5472, 4433, 4134, 3550, 2448, 1572, 964,
    124, -998, -2103, -2934, -3423, -3747, -4266, -5192, -6533, -7926, -8513, -7793,
];

/// Codeword pairs for a short mixed input, all three modes
#[test]
fn test_short_input_codewords() {
    let cases: [(Mode, [(u8, u8); 4]); 3] = [
        (Mode::Mode1, [(58, 3), (46, 2), (18, 0), (4, 2)]),
        (Mode::Mode2, [(29, 3), (23, 2), (9, 0), (2, 2)]),
        (Mode::Mode3, [(14, 3), (11, 2), (4, 0), (1, 2)]),
    ];

    for (mode, expected) in cases {
        let mut encoder = G722Encoder::open(mode);
        let codewords: Vec<(u8, u8)> = SHORT_INPUT
            .iter()
            .filter_map(|&pcm| encoder.encode_sample(pcm))
            .map(|codeword| (codeword.low(), codeword.high()))
            .collect();
        assert_eq!(codewords, expected, "codewords for {}", mode);
    }
}

/// Packed octets and decoded PCM for the short input
#[test]
fn test_short_input_octets_and_pcm() {
    let cases: [(Mode, [u8; 4], [i16; 8]); 3] = [
        (Mode::Mode1, [250, 174, 18, 132], [0, -1, 0, -1, -1, 0, 0, -1]),
        (Mode::Mode2, [125, 87, 9, 66], [0, 0, 0, -1, -1, 0, 0, -1]),
        (Mode::Mode3, [62, 43, 4, 33], [0, -1, 0, -1, -1, 0, 0, -1]),
    ];

    for (mode, octets, pcm) in cases {
        assert_eq!(encode_all(mode, &SHORT_INPUT), octets, "octets for {}", mode);
        assert_eq!(decode_all(mode, &octets), pcm, "pcm for {}", mode);
    }
}

/// Triangle wave codewords, 64 samples per mode
#[test]
fn test_triangle_octets() {
    let input = triangle(64);
    assert_eq!(encode_all(Mode::Mode1, &input), TRIANGLE_MODE1);
    assert_eq!(encode_all(Mode::Mode2, &input), TRIANGLE_MODE2);
    assert_eq!(encode_all(Mode::Mode3, &input), TRIANGLE_MODE3);
}

/// Triangle wave decoded output, 64 samples per mode
#[test]
fn test_triangle_decoded() {
    assert_eq!(decode_all(Mode::Mode1, &TRIANGLE_MODE1), TRIANGLE_DECODED_MODE1);
    assert_eq!(decode_all(Mode::Mode2, &TRIANGLE_MODE2), TRIANGLE_DECODED_MODE2);
    assert_eq!(decode_all(Mode::Mode3, &TRIANGLE_MODE3), TRIANGLE_DECODED_MODE3);
}

/// Splitting the input at arbitrary points does not change the octets
#[test]
fn test_triangle_chunking_invariant() {
    let input = triangle(64);
    for split in [1, 7, 20, 33, 63] {
        let mut encoder = G722Encoder::open(Mode::Mode1);
        let mut octets = Vec::new();
        encoder.encode_samples(&input[..split], &mut octets);
        encoder.encode_samples(&input[split..], &mut octets);
        assert_eq!(octets, TRIANGLE_MODE1, "split at {}", split);
    }
}

/// Analysis followed by synthesis reconstructs tones after the filter delay
#[test]
fn test_qmf_reconstruction() {
    for frequency in [1000.0, 3000.0, 6000.0] {
        let input = sine(frequency, 8000.0, 1600);

        let mut analysis = QmfAnalysisState::new();
        let mut synthesis = QmfSynthesisState::new();
        let bands = qmf::analyze(&input, &mut analysis);
        let output = qmf::synthesize(&bands, &mut synthesis);
        assert_eq!(output.len(), input.len());

        let rms = rms_error(&input, &output, CODEC_DELAY, 400..1400);
        assert!(rms < 16.0, "QMF error at {} Hz: {:.1}", frequency, rms);
    }
}

/// Encode/decode quality per mode on a 1 kHz tone
#[test]
fn test_round_trip_quality() {
    let input = sine(1000.0, 8000.0, 3200);
    for (mode, bound) in [(Mode::Mode1, 40.0), (Mode::Mode2, 80.0), (Mode::Mode3, 160.0)] {
        let output = round_trip(mode, &input);
        let rms = rms_error(&input, &output, CODEC_DELAY, 800..3000);
        assert!(rms < bound, "{} error {:.1} exceeds {}", mode, rms, bound);
    }
}

/// Fewer low-band bits never improves a low-frequency tone
#[test]
fn test_quality_ordering_by_mode() {
    let input = sine(500.0, 8000.0, 3200);
    let errors: Vec<f64> = Mode::ALL
        .iter()
        .map(|&mode| rms_error(&input, &round_trip(mode, &input), CODEC_DELAY, 800..3000))
        .collect();

    assert!(errors[0] < errors[1], "mode 1 {:.1} vs mode 2 {:.1}", errors[0], errors[1]);
    assert!(errors[1] < errors[2], "mode 2 {:.1} vs mode 3 {:.1}", errors[1], errors[2]);
}

/// High-frequency content survives through the upper band
#[test]
fn test_upper_band_tone() {
    let input = sine(6000.0, 8000.0, 3200);
    let signal = rms_error(&input, &[0; 3200], 0, 800..3000);
    for mode in Mode::ALL {
        let output = round_trip(mode, &input);
        let rms = rms_error(&input, &output, CODEC_DELAY, 800..3000);
        assert!(rms < signal / 10.0, "6 kHz error {:.1} in {}", rms, mode);
    }
}
