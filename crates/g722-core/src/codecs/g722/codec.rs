//! G.722 Codec Implementation
//!
//! Stream-level encoder and decoder, plus the frame-oriented [`G722Codec`]
//! that pairs one of each behind the [`AudioCodec`] trait.
//!
//! # Octet layout
//!
//! Each 8 kHz sub-band tick produces one octet. The low-band codeword sits
//! in the least significant `mode.low_bits()` bits and the 2-bit high-band
//! codeword directly above it:
//!
//! ```text
//! Mode 1:  H H L L L L L L
//! Mode 2:  0 H H L L L L L
//! Mode 3:  0 0 H H L L L L
//! ```
//!
//! Padding bits are always written as zero. The decoder either rejects or
//! masks octets that set them, per [`CodewordPolicy`].

use tracing::{debug, trace, warn};

use crate::codecs::g722::state::{BandState, QmfAnalysisState, QmfSynthesisState};
use crate::codecs::g722::{adpcm, qmf};
use crate::error::{CodecError, Result};
use crate::types::{
    AudioCodec, AudioCodecExt, CodecInfo, CodewordPolicy, G722Config, Mode, G722_PAYLOAD_TYPE,
    G722_SAMPLE_RATE,
};
use crate::utils::validation::{
    validate_buffer_size, validate_codeword, validate_encoded_data, validate_g722_frame,
    validate_g722_samples, validate_payload,
};

/// Lifecycle phase of an open encoder or decoder
///
/// A stream is closed by consuming it, so there is no `Closed` phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamPhase {
    /// Opened, nothing processed yet
    Idle,
    /// At least one sample or codeword processed
    Streaming,
}

/// One sub-band tick worth of codewords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codeword {
    low: u8,
    high: u8,
    mode: Mode,
}

impl Codeword {
    /// Build a codeword from its two halves
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either half is wider than the mode allows.
    pub fn new(low: u8, high: u8, mode: Mode) -> Result<Self> {
        if low & !mode.low_mask() != 0 || high > 3 {
            return Err(CodecError::invalid_input(format!(
                "Codeword ({}, {}) out of range for {}",
                low, high, mode
            )));
        }
        Ok(Self { low, high, mode })
    }

    /// Unpack an octet, rejecting non-zero padding bits
    pub fn from_octet(octet: u8, mode: Mode) -> Result<Self> {
        validate_codeword(octet, mode)?;
        Ok(Self::from_octet_masked(octet, mode))
    }

    /// Unpack an octet, ignoring any padding bits
    pub fn from_octet_masked(octet: u8, mode: Mode) -> Self {
        Self {
            low: octet & mode.low_mask(),
            high: (octet >> mode.low_bits()) & 0x03,
            mode,
        }
    }

    /// Low-band codeword
    pub fn low(&self) -> u8 {
        self.low
    }

    /// High-band codeword
    pub fn high(&self) -> u8 {
        self.high
    }

    /// Mode this codeword was produced for
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Packed octet
    pub fn octet(&self) -> u8 {
        (self.high << self.mode.low_bits()) | self.low
    }
}

/// G.722 stream encoder
///
/// Takes 16 kHz PCM one sample at a time and emits a [`Codeword`] for every
/// second sample.
#[derive(Debug, Clone)]
pub struct G722Encoder {
    mode: Mode,
    phase: StreamPhase,
    analysis: QmfAnalysisState,
    low_band: BandState,
    high_band: BandState,
}

impl G722Encoder {
    /// Open a fresh encoder stream
    pub fn open(mode: Mode) -> Self {
        debug!("Opening G.722 encoder in {}", mode);

        Self {
            mode,
            phase: StreamPhase::Idle,
            analysis: QmfAnalysisState::new(),
            low_band: BandState::new_low_band(),
            high_band: BandState::new_high_band(),
        }
    }

    /// Feed one PCM sample
    ///
    /// Returns `None` for the first sample of each pair.
    pub fn encode_sample(&mut self, pcm: i16) -> Option<Codeword> {
        self.phase = StreamPhase::Streaming;

        let (xl, xh) = qmf::push_sample(pcm, &mut self.analysis)?;
        let low = adpcm::low_band_encode(xl, &mut self.low_band, self.mode);
        let high = adpcm::high_band_encode(xh, &mut self.high_band);

        Some(Codeword {
            low,
            high,
            mode: self.mode,
        })
    }

    /// Encode a run of samples, appending packed octets to `output`
    ///
    /// Returns the number of octets written. An odd trailing sample stays
    /// buffered until the next call.
    pub fn encode_samples(&mut self, samples: &[i16], output: &mut Vec<u8>) -> usize {
        let start = output.len();
        output.reserve(samples.len() / 2 + 1);
        for &pcm in samples {
            if let Some(codeword) = self.encode_sample(pcm) {
                output.push(codeword.octet());
            }
        }
        output.len() - start
    }

    /// Operating mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Lifecycle phase
    pub fn phase(&self) -> StreamPhase {
        self.phase
    }

    /// Whether half of a sample pair is buffered
    pub fn has_pending_sample(&self) -> bool {
        self.analysis.is_pending()
    }

    /// Low-band adaptive state
    pub fn low_band(&self) -> &BandState {
        &self.low_band
    }

    /// High-band adaptive state
    pub fn high_band(&self) -> &BandState {
        &self.high_band
    }

    /// Analysis filter state
    pub fn analysis(&self) -> &QmfAnalysisState {
        &self.analysis
    }

    /// Close the stream and discard its state
    pub fn close(self) {
        debug!(
            "Closing G.722 encoder ({}, pending sample: {})",
            self.mode,
            self.has_pending_sample()
        );
    }
}

/// G.722 stream decoder
///
/// Takes one packed octet per call and emits two 16 kHz PCM samples.
#[derive(Debug, Clone)]
pub struct G722Decoder {
    mode: Mode,
    policy: CodewordPolicy,
    phase: StreamPhase,
    synthesis: QmfSynthesisState,
    low_band: BandState,
    high_band: BandState,
}

impl G722Decoder {
    /// Open a fresh decoder stream that rejects padded octets
    pub fn open(mode: Mode) -> Self {
        Self::open_with_policy(mode, CodewordPolicy::Reject)
    }

    /// Open a fresh decoder stream with an explicit codeword policy
    pub fn open_with_policy(mode: Mode, policy: CodewordPolicy) -> Self {
        debug!("Opening G.722 decoder in {} ({:?} policy)", mode, policy);

        Self {
            mode,
            policy,
            phase: StreamPhase::Idle,
            synthesis: QmfSynthesisState::new(),
            low_band: BandState::new_low_band(),
            high_band: BandState::new_high_band(),
        }
    }

    /// Decode one octet into two PCM samples
    ///
    /// # Errors
    ///
    /// Under [`CodewordPolicy::Reject`], an octet with padding bits set
    /// fails with `InvalidInput` and the decoder state is left unchanged.
    pub fn decode_codeword(&mut self, octet: u8) -> Result<(i16, i16)> {
        let codeword = match self.policy {
            CodewordPolicy::Reject => Codeword::from_octet(octet, self.mode)?,
            CodewordPolicy::Mask => {
                let codeword = Codeword::from_octet_masked(octet, self.mode);
                if codeword.octet() != octet {
                    warn!(
                        "Masking G.722 octet {:#04x} to {:#04x} in {}",
                        octet,
                        codeword.octet(),
                        self.mode
                    );
                }
                codeword
            }
        };

        Ok(self.decode_unpacked(codeword))
    }

    /// Decode a run of octets, appending PCM to `output`
    ///
    /// The whole run is checked before decoding starts, so a rejected run
    /// leaves both the decoder and `output` untouched. Returns the number of
    /// samples written.
    pub fn decode_octets(&mut self, data: &[u8], output: &mut Vec<i16>) -> Result<usize> {
        match self.policy {
            CodewordPolicy::Reject => validate_payload(data, self.mode)?,
            CodewordPolicy::Mask => {
                let masked = data
                    .iter()
                    .filter(|&&octet| validate_codeword(octet, self.mode).is_err())
                    .count();
                if masked > 0 {
                    warn!(
                        "Masking padding bits in {} of {} G.722 octets ({})",
                        masked,
                        data.len(),
                        self.mode
                    );
                }
            }
        }

        output.reserve(data.len() * 2);
        for &octet in data {
            let (even, odd) = self.decode_unpacked(Codeword::from_octet_masked(octet, self.mode));
            output.push(even);
            output.push(odd);
        }

        Ok(data.len() * 2)
    }

    fn decode_unpacked(&mut self, codeword: Codeword) -> (i16, i16) {
        self.phase = StreamPhase::Streaming;

        let rl = adpcm::low_band_decode(codeword.low, &mut self.low_band, self.mode);
        let rh = adpcm::high_band_decode(codeword.high, &mut self.high_band);
        qmf::push_pair(rl, rh, &mut self.synthesis)
    }

    /// Operating mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Codeword policy
    pub fn policy(&self) -> CodewordPolicy {
        self.policy
    }

    /// Lifecycle phase
    pub fn phase(&self) -> StreamPhase {
        self.phase
    }

    /// Low-band adaptive state
    pub fn low_band(&self) -> &BandState {
        &self.low_band
    }

    /// High-band adaptive state
    pub fn high_band(&self) -> &BandState {
        &self.high_band
    }

    /// Synthesis filter state
    pub fn synthesis(&self) -> &QmfSynthesisState {
        &self.synthesis
    }

    /// Close the stream and discard its state
    pub fn close(self) {
        debug!("Closing G.722 decoder ({})", self.mode);
    }
}

/// G.722 codec: one encoder stream and one decoder stream
///
/// # Example
/// ```
/// use g722_core::codecs::g722::G722Codec;
///
/// let mut codec = G722Codec::new_with_mode(1).unwrap(); // Mode 1 (64 kbit/s)
///
/// // Encode a 20 ms frame
/// let input_frame = vec![0i16; 320];
/// let encoded = codec.encode_frame(&input_frame).unwrap();
/// assert_eq!(encoded.len(), 160);
///
/// // Decode back to samples
/// let decoded = codec.decode_frame(&encoded).unwrap();
/// assert_eq!(decoded.len(), 320);
/// ```
#[derive(Debug, Clone)]
pub struct G722Codec {
    config: G722Config,
    encoder: G722Encoder,
    decoder: G722Decoder,
}

impl G722Codec {
    /// Create a new G.722 codec from configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn new(config: G722Config) -> Result<Self> {
        config.validate()?;
        debug!(
            "Creating G.722 codec: {}, {} samples per frame",
            config.mode, config.frame_size
        );

        Ok(Self {
            encoder: G722Encoder::open(config.mode),
            decoder: G722Decoder::open_with_policy(config.mode, config.codeword_policy),
            config,
        })
    }

    /// Create a new G.722 codec with specific mode
    ///
    /// # Arguments
    /// * `mode` - G.722 mode (1=64kbit/s, 2=56kbit/s, 3=48kbit/s)
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for any other mode number.
    pub fn new_with_mode(mode: u8) -> Result<Self> {
        Self::new(G722Config::new(Mode::try_from(mode)?))
    }

    /// Encode exactly one configured frame
    ///
    /// # Errors
    ///
    /// Returns `InvalidFrameSize` unless `samples` holds exactly
    /// `frame_size` samples.
    pub fn encode_frame(&mut self, samples: &[i16]) -> Result<Vec<u8>> {
        validate_g722_frame(samples, self.config.frame_size)?;
        self.encode(samples)
    }

    /// Decode exactly one configured frame (`frame_size / 2` octets)
    ///
    /// # Errors
    ///
    /// Returns `InvalidFrameSize` for any other payload length, or
    /// `InvalidInput` if an octet is rejected by the codeword policy.
    pub fn decode_frame(&mut self, data: &[u8]) -> Result<Vec<i16>> {
        let expected = self.config.frame_size / 2;
        if data.len() != expected {
            return Err(CodecError::InvalidFrameSize {
                expected,
                actual: data.len(),
            });
        }
        self.decode(data)
    }

    /// Get G.722 mode
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Active configuration
    pub fn config(&self) -> &G722Config {
        &self.config
    }

    /// Encoder stream
    pub fn encoder(&self) -> &G722Encoder {
        &self.encoder
    }

    /// Decoder stream
    pub fn decoder(&self) -> &G722Decoder {
        &self.decoder
    }
}

impl AudioCodec for G722Codec {
    fn encode(&mut self, samples: &[i16]) -> Result<Vec<u8>> {
        validate_g722_samples(samples)?;

        let mut encoded = Vec::with_capacity(samples.len() / 2);
        self.encoder.encode_samples(samples, &mut encoded);

        trace!("G.722 encoded {} samples to {} bytes", samples.len(), encoded.len());
        Ok(encoded)
    }

    fn decode(&mut self, data: &[u8]) -> Result<Vec<i16>> {
        validate_encoded_data(data)?;

        let mut decoded = Vec::with_capacity(data.len() * 2);
        self.decoder.decode_octets(data, &mut decoded)?;

        trace!("G.722 decoded {} bytes to {} samples", data.len(), decoded.len());
        Ok(decoded)
    }

    fn info(&self) -> CodecInfo {
        CodecInfo {
            name: "G722",
            sample_rate: G722_SAMPLE_RATE,
            channels: 1,
            bitrate: self.config.mode.bitrate(),
            frame_size: self.config.frame_size,
            payload_type: Some(G722_PAYLOAD_TYPE),
        }
    }

    fn reset(&mut self) -> Result<()> {
        debug!("Resetting G.722 codec ({})", self.config.mode);
        self.encoder = G722Encoder::open(self.config.mode);
        self.decoder = G722Decoder::open_with_policy(self.config.mode, self.config.codeword_policy);
        Ok(())
    }

    fn frame_size(&self) -> usize {
        self.config.frame_size
    }

    fn supports_variable_frame_size(&self) -> bool {
        true
    }
}

impl AudioCodecExt for G722Codec {
    fn encode_to_buffer(&mut self, samples: &[i16], output: &mut [u8]) -> Result<usize> {
        validate_g722_samples(samples)?;
        let needed = samples.len() / 2;
        validate_buffer_size(needed, output.len())?;

        let mut written = 0;
        for &pcm in samples {
            if let Some(codeword) = self.encoder.encode_sample(pcm) {
                output[written] = codeword.octet();
                written += 1;
            }
        }

        trace!("G.722 encoded {} samples to {} bytes", samples.len(), written);
        Ok(written)
    }

    fn decode_to_buffer(&mut self, data: &[u8], output: &mut [i16]) -> Result<usize> {
        validate_encoded_data(data)?;
        let needed = data.len() * 2;
        validate_buffer_size(needed, output.len())?;

        let mut decoded = Vec::with_capacity(needed);
        self.decoder.decode_octets(data, &mut decoded)?;
        output[..needed].copy_from_slice(&decoded);

        trace!("G.722 decoded {} bytes to {} samples", data.len(), needed);
        Ok(needed)
    }

    fn max_encoded_size(&self, input_samples: usize) -> usize {
        input_samples.div_ceil(2)
    }

    fn max_decoded_size(&self, input_bytes: usize) -> usize {
        input_bytes * 2
    }
}
