//! Core types and traits for the codec library
//!
//! This module defines the operating modes, the configuration surface and
//! the codec traits that the G.722 implementation is exposed through.

use crate::error::{CodecError, Result};
use std::fmt;

/// G.722 sample rate in Hz (input and output PCM)
pub const G722_SAMPLE_RATE: u32 = 16000;

/// Static RTP payload type assigned to G.722
pub const G722_PAYLOAD_TYPE: u8 = 9;

/// Default frame size: 20 ms at 16 kHz
pub const DEFAULT_FRAME_SIZE: usize = 320;

/// Primary trait for audio codecs
///
/// This trait defines the core operations that all audio codecs must implement:
/// encoding, decoding, and configuration management.
pub trait AudioCodec: Send + Sync {
    /// Encode audio samples to compressed data
    ///
    /// # Arguments
    ///
    /// * `samples` - Input audio samples as 16-bit PCM
    ///
    /// # Returns
    ///
    /// Compressed audio data as bytes
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or input is invalid
    fn encode(&mut self, samples: &[i16]) -> Result<Vec<u8>>;

    /// Decode compressed data to audio samples
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails or data is invalid
    fn decode(&mut self, data: &[u8]) -> Result<Vec<i16>>;

    /// Get codec information
    fn info(&self) -> CodecInfo;

    /// Reset codec state
    ///
    /// This clears all internal state and prepares the codec for fresh input.
    /// Useful for handling stream discontinuities.
    fn reset(&mut self) -> Result<()>;

    /// Get the expected frame size in samples
    fn frame_size(&self) -> usize;

    /// Check if the codec supports variable frame sizes
    fn supports_variable_frame_size(&self) -> bool {
        false
    }
}

/// Extended trait for codecs with advanced features
pub trait AudioCodecExt: AudioCodec {
    /// Encode with pre-allocated output buffer (zero-copy)
    ///
    /// # Returns
    ///
    /// Number of bytes written to output buffer
    fn encode_to_buffer(&mut self, samples: &[i16], output: &mut [u8]) -> Result<usize>;

    /// Decode with pre-allocated output buffer (zero-copy)
    ///
    /// # Returns
    ///
    /// Number of samples written to output buffer
    fn decode_to_buffer(&mut self, data: &[u8], output: &mut [i16]) -> Result<usize>;

    /// Get maximum encoded size for a given input size
    fn max_encoded_size(&self, input_samples: usize) -> usize;

    /// Get maximum decoded size for a given input size
    fn max_decoded_size(&self, input_bytes: usize) -> usize;
}

/// Audio codec information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecInfo {
    /// Codec name
    pub name: &'static str,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u8,
    /// Bitrate in bits per second
    pub bitrate: u32,
    /// Frame size in samples
    pub frame_size: usize,
    /// RTP payload type (if standard)
    pub payload_type: Option<u8>,
}

/// G.722 operating mode
///
/// Selects the low-band codeword width. The high band always uses 2 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// 6-bit low band, 64 kbit/s
    #[default]
    Mode1,
    /// 5-bit low band, 56 kbit/s
    Mode2,
    /// 4-bit low band, 48 kbit/s
    Mode3,
}

impl Mode {
    /// All modes, in numeric order
    pub const ALL: [Self; 3] = [Self::Mode1, Self::Mode2, Self::Mode3];

    /// Low-band codeword width in bits
    pub const fn low_bits(self) -> u32 {
        match self {
            Self::Mode1 => 6,
            Self::Mode2 => 5,
            Self::Mode3 => 4,
        }
    }

    /// Mask selecting the low-band codeword bits of an octet
    pub const fn low_mask(self) -> u8 {
        match self {
            Self::Mode1 => 0x3F,
            Self::Mode2 => 0x1F,
            Self::Mode3 => 0x0F,
        }
    }

    /// Total bitrate in bits per second
    pub const fn bitrate(self) -> u32 {
        match self {
            Self::Mode1 => 64000,
            Self::Mode2 => 56000,
            Self::Mode3 => 48000,
        }
    }

    /// Mode number as used in the G.722 recommendation (1, 2 or 3)
    pub const fn number(self) -> u8 {
        match self {
            Self::Mode1 => 1,
            Self::Mode2 => 2,
            Self::Mode3 => 3,
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Mode1),
            2 => Ok(Self::Mode2),
            3 => Ok(Self::Mode3),
            other => Err(CodecError::invalid_config(format!(
                "Invalid G.722 mode {}. Must be 1, 2, or 3.",
                other
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mode {} ({} kbit/s)", self.number(), self.bitrate() / 1000)
    }
}

/// What the decoder does with an octet whose padding bits are set
///
/// In Mode 2 and Mode 3 the top one or two bits of every octet are unused.
/// The encoder always writes them as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodewordPolicy {
    /// Fail with [`CodecError::InvalidInput`] without touching decoder state
    #[default]
    Reject,
    /// Drop the padding bits and decode the rest
    Mask,
}

/// G.722 codec configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct G722Config {
    /// Operating mode
    pub mode: Mode,
    /// Samples per frame at 16 kHz
    pub frame_size: usize,
    /// Handling of non-zero padding bits on decode
    pub codeword_policy: CodewordPolicy,
}

impl G722Config {
    /// Create a configuration for the given mode with default frame size and policy
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            frame_size: DEFAULT_FRAME_SIZE,
            codeword_policy: CodewordPolicy::default(),
        }
    }

    /// Set frame size in samples
    pub fn with_frame_size(mut self, frame_size: usize) -> Self {
        self.frame_size = frame_size;
        self
    }

    /// Set frame size in milliseconds
    pub fn with_frame_size_ms(mut self, frame_size_ms: u32) -> Self {
        self.frame_size = (G722_SAMPLE_RATE / 1000 * frame_size_ms) as usize;
        self
    }

    /// Set the codeword policy
    pub fn with_codeword_policy(mut self, policy: CodewordPolicy) -> Self {
        self.codeword_policy = policy;
        self
    }

    /// Frame duration in milliseconds
    pub fn frame_duration_ms(&self) -> f64 {
        self.frame_size as f64 * 1000.0 / f64::from(G722_SAMPLE_RATE)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.frame_size == 0 {
            return Err(CodecError::invalid_config("Frame size cannot be zero"));
        }

        // QMF consumes full-band samples in pairs
        if self.frame_size % 2 != 0 {
            return Err(CodecError::invalid_config(format!(
                "Frame size {} must be even",
                self.frame_size
            )));
        }

        Ok(())
    }
}

impl Default for G722Config {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
