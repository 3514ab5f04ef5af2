//! G.722 Wideband Audio Codec Implementation
//!
//! This module implements the G.722 sub-band ADPCM codec according to ITU-T
//! Recommendation G.722: 16 kHz PCM in, 64/56/48 kbit/s out.
//!
//! # Architecture
//!
//! The implementation is split into several modules:
//! - `codec`: Stream encoder/decoder and the frame-level codec
//! - `multistream`: Independent per-channel streams processed in parallel
//! - `qmf`: QMF analysis and synthesis filters
//! - `adpcm`: Sub-band quantizers, encoders and decoders
//! - `predictor`: Shared pole/zero predictor and scale factor adaptation
//! - `tables`: Quantization tables and constants
//! - `state`: State management structures
//!
//! All adaptive state is owned by the caller's encoder or decoder value.
//! A lost or corrupted codeword is not detected: the decoder's predictor
//! drifts from the encoder's and re-converges over the following samples.

pub mod adpcm;
pub mod codec;
pub mod multistream;
pub mod predictor;
pub mod qmf;
pub mod state;
pub mod tables;

#[cfg(test)]
mod tests;

// Re-export the main codec types
pub use codec::{Codeword, G722Codec, G722Decoder, G722Encoder, StreamPhase};
pub use multistream::{MultiStreamDecoder, MultiStreamEncoder};

// Re-export key state types
pub use state::{BandState, QmfAnalysisState, QmfSynthesisState, SubBand};
