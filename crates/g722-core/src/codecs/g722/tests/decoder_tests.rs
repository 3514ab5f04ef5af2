//! G.722 Decoder Tests
//!
//! Decoder tracking of the encoder, codeword policies and recovery when a
//! decoder joins a stream late.

use super::utils::*;
use crate::codecs::g722::{G722Decoder, G722Encoder, StreamPhase};
use crate::error::CodecError;
use crate::types::{CodewordPolicy, Mode};

fn two_tone(len: usize) -> Vec<i16> {
    sine(1000.0, 6000.0, len)
        .iter()
        .zip(sine(300.0, 3000.0, len))
        .map(|(&a, b)| a + b)
        .collect()
}

/// A decoder fed the encoder's codewords reproduces the encoder's band state
#[test]
fn test_decoder_tracks_encoder() {
    let mut input = two_tone(800);
    input.extend(noise(3, 800));

    for mode in Mode::ALL {
        let mut encoder = G722Encoder::open(mode);
        let mut decoder = G722Decoder::open(mode);

        for &pcm in &input {
            if let Some(codeword) = encoder.encode_sample(pcm) {
                decoder
                    .decode_codeword(codeword.octet())
                    .expect("encoder output must decode");
                assert_eq!(encoder.low_band(), decoder.low_band(), "low band in {}", mode);
                assert_eq!(encoder.high_band(), decoder.high_band(), "high band in {}", mode);
            }
        }
    }
}

/// Encoded silence decodes to near-silence
#[test]
fn test_silence_stays_quiet() {
    let octets = encode_all(Mode::Mode1, &vec![0i16; 20000]);
    let pcm = decode_all(Mode::Mode1, &octets);
    assert_eq!(pcm.len(), 20000);

    let peak = pcm.iter().map(|&s| i32::from(s).abs()).max().unwrap_or(0);
    assert!(peak <= 2, "silence peak {}", peak);
}

/// Under the reject policy a padded octet is refused without side effects
#[test]
fn test_reject_policy() {
    let mut decoder = G722Decoder::open(Mode::Mode2);
    decoder.decode_codeword(0x55).unwrap();
    let snapshot = decoder.clone();

    let result = decoder.decode_codeword(0x80);
    assert!(matches!(result, Err(CodecError::InvalidInput { .. })));
    assert_eq!(decoder.low_band(), snapshot.low_band());
    assert_eq!(decoder.high_band(), snapshot.high_band());
    assert_eq!(decoder.synthesis(), snapshot.synthesis());

    let mut output = vec![7i16];
    assert!(decoder.decode_octets(&[0x01, 0x02, 0xC3], &mut output).is_err());
    assert_eq!(output, vec![7], "rejected run must not append output");
    assert_eq!(decoder.low_band(), snapshot.low_band());
}

/// Under the mask policy padding bits are ignored
#[test]
fn test_mask_policy() {
    let payload: Vec<u8> = encode_all(Mode::Mode3, &two_tone(400));
    let padded: Vec<u8> = payload.iter().map(|&octet| octet | 0xC0).collect();

    let mut masking = G722Decoder::open_with_policy(Mode::Mode3, CodewordPolicy::Mask);
    let mut from_padded = Vec::new();
    masking.decode_octets(&padded, &mut from_padded).unwrap();

    assert_eq!(from_padded, decode_all(Mode::Mode3, &payload));
    assert_eq!(masking.policy(), CodewordPolicy::Mask);
}

/// Mode 1 has no padding bits, so both policies accept every octet
#[test]
fn test_mode1_accepts_all_octets() {
    let all: Vec<u8> = (0..=255).collect();
    for policy in [CodewordPolicy::Reject, CodewordPolicy::Mask] {
        let mut decoder = G722Decoder::open_with_policy(Mode::Mode1, policy);
        let mut pcm = Vec::new();
        assert_eq!(decoder.decode_octets(&all, &mut pcm).unwrap(), 512);
    }
}

/// A decoder joining mid-stream converges on the output of one that saw it all
#[test]
fn test_late_join_converges() {
    let input = two_tone(8000);
    for mode in Mode::ALL {
        let octets = encode_all(mode, &input);
        let full = decode_all(mode, &octets);

        let mut late = G722Decoder::open(mode);
        let mut tail = Vec::new();
        late.decode_octets(&octets[1000..], &mut tail).unwrap();

        let drift = (6000..8000)
            .map(|n| (i32::from(full[n]) - i32::from(tail[n - 2000])).abs())
            .max()
            .unwrap_or(0);
        assert!(drift <= 64, "late decoder still {} off in {}", drift, mode);
    }
}

/// Decoding byte-by-byte and in one run give the same PCM
#[test]
fn test_codeword_and_run_agree() {
    let octets = encode_all(Mode::Mode2, &triangle(320));

    let mut single = G722Decoder::open(Mode::Mode2);
    let mut by_codeword = Vec::new();
    for &octet in &octets {
        let (even, odd) = single.decode_codeword(octet).unwrap();
        by_codeword.push(even);
        by_codeword.push(odd);
    }

    assert_eq!(by_codeword, decode_all(Mode::Mode2, &octets));
    assert_eq!(single.phase(), StreamPhase::Streaming);
}
