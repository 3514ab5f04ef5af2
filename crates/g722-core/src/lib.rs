//! # G722-Core: ITU-T G.722 Wideband Audio Codec
//!
//! This library implements the G.722 sub-band ADPCM codec: 16 kHz PCM is
//! split into two sub-bands by a quadrature mirror filter, each band is
//! coded by its own adaptive differential quantizer, and the codewords are
//! packed one octet per 8 kHz tick.
//!
//! ## Features
//!
//! - **Three modes**: 64, 56 and 48 kbit/s (6, 5 or 4-bit low-band codewords)
//! - **Bit-exact fixed point**: saturating 16-bit arithmetic throughout
//! - **Caller-owned state**: any number of independent streams per process
//! - **Parallel multi-channel**: one stream per channel, coded concurrently
//!
//! ## Usage
//!
//! ```rust
//! use g722_core::{AudioCodec, G722Codec, G722Config, Mode};
//!
//! let mut codec = G722Codec::new(G722Config::new(Mode::Mode1))?;
//!
//! // Encode 20 ms of audio
//! let samples = vec![0i16; 320];
//! let encoded = codec.encode(&samples)?;
//! assert_eq!(encoded.len(), 160);
//!
//! // Decode back to samples
//! let decoded = codec.decode(&encoded)?;
//! assert_eq!(decoded.len(), 320);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! For sample-by-sample control use [`G722Encoder`] and [`G722Decoder`]
//! directly.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod codecs;
pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use codecs::g722::{
    Codeword, G722Codec, G722Decoder, G722Encoder, MultiStreamDecoder, MultiStreamEncoder,
    StreamPhase,
};
pub use error::{CodecError, Result};
pub use types::{AudioCodec, AudioCodecExt, CodecInfo, CodewordPolicy, G722Config, Mode};

/// Version information for the codec library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the codec library
///
/// Installs a `tracing` fmt subscriber if none is set yet. Safe to call
/// multiple times.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for future setup steps.
pub fn init() -> Result<()> {
    // Initialize logging if not already done
    let _ = tracing_subscriber::fmt::try_init();

    tracing::info!("G722-Core v{} initialized", VERSION);
    tracing::info!("Supported modes: {:?}", Mode::ALL);

    Ok(())
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        supported_modes: Mode::ALL.to_vec(),
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// Supported G.722 modes
    pub supported_modes: Vec<Mode>,
}
