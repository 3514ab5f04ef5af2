//! Input validation utilities for codec operations
//!
//! Every check here runs before any codec state is touched, so a rejected
//! call leaves the stream exactly as it was.

use crate::error::{CodecError, Result};
use crate::types::Mode;

/// Validate audio samples for codec processing
pub fn validate_samples(samples: &[i16]) -> Result<()> {
    if samples.is_empty() {
        return Err(CodecError::invalid_input("Input samples cannot be empty"));
    }

    Ok(())
}

/// Validate encoded data for codec processing
pub fn validate_encoded_data(data: &[u8]) -> Result<()> {
    if data.is_empty() {
        return Err(CodecError::invalid_input("Encoded data cannot be empty"));
    }

    Ok(())
}

/// Validate a G.722 sample buffer: non-empty and a whole number of pairs
pub fn validate_g722_samples(samples: &[i16]) -> Result<()> {
    validate_samples(samples)?;

    // G.722 requires even number of samples for QMF processing
    if samples.len() % 2 != 0 {
        return Err(CodecError::invalid_input(format!(
            "G.722 requires an even number of samples, got {}",
            samples.len()
        )));
    }

    Ok(())
}

/// Validate a G.722 frame of exactly `expected_frame_size` samples
pub fn validate_g722_frame(samples: &[i16], expected_frame_size: usize) -> Result<()> {
    validate_g722_samples(samples)?;

    if samples.len() != expected_frame_size {
        return Err(CodecError::InvalidFrameSize {
            expected: expected_frame_size,
            actual: samples.len(),
        });
    }

    Ok(())
}

/// Validate that an octet carries no bits beyond the mode's codeword width
///
/// Mode 1 uses all eight bits, so every octet is valid there.
pub fn validate_codeword(octet: u8, mode: Mode) -> Result<()> {
    let padding = u32::from(octet) >> (mode.low_bits() + 2);
    if padding != 0 {
        return Err(CodecError::invalid_input(format!(
            "Octet {:#04x} sets padding bits unused in {}",
            octet, mode
        )));
    }

    Ok(())
}

/// Validate every octet of a payload, reporting the first bad index
pub fn validate_payload(data: &[u8], mode: Mode) -> Result<()> {
    if let Some((index, &octet)) = data
        .iter()
        .enumerate()
        .find(|&(_, &octet)| validate_codeword(octet, mode).is_err())
    {
        return Err(CodecError::invalid_input(format!(
            "Octet {:#04x} at index {} sets padding bits unused in {}",
            octet, index, mode
        )));
    }

    Ok(())
}

/// Validate that an output buffer can hold `needed` elements
pub fn validate_buffer_size(needed: usize, actual: usize) -> Result<()> {
    if actual < needed {
        return Err(CodecError::buffer_too_small(needed, actual));
    }

    Ok(())
}

/// Validate that an interleaved buffer holds whole sample pairs for every channel
pub fn validate_channel_alignment(samples: &[i16], channels: usize) -> Result<()> {
    if channels == 0 {
        return Err(CodecError::invalid_config("Channel count cannot be zero"));
    }

    if samples.len() % (channels * 2) != 0 {
        return Err(CodecError::invalid_input(format!(
            "Sample count {} is not a whole number of sample pairs for {} channels",
            samples.len(),
            channels
        )));
    }

    Ok(())
}
