//! Independent multi-stream processing
//!
//! Stereo or multi-party audio is coded as one G.722 stream per channel.
//! Streams share nothing, so channels are processed in parallel with rayon
//! while each channel's samples are still handled strictly in order.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::codecs::g722::codec::{G722Decoder, G722Encoder};
use crate::error::{CodecError, Result};
use crate::types::{CodewordPolicy, Mode};
use crate::utils::validation::{validate_channel_alignment, validate_payload};

fn check_channel_count(channels: usize) -> Result<()> {
    if channels == 0 {
        return Err(CodecError::invalid_config("Channel count cannot be zero"));
    }
    Ok(())
}

/// Encoder for interleaved multi-channel PCM
#[derive(Debug, Clone)]
pub struct MultiStreamEncoder {
    mode: Mode,
    encoders: Vec<G722Encoder>,
}

impl MultiStreamEncoder {
    /// Open one encoder stream per channel
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `channels` is zero.
    pub fn open(mode: Mode, channels: usize) -> Result<Self> {
        check_channel_count(channels)?;
        debug!("Opening {} G.722 encoder streams in {}", channels, mode);

        Ok(Self {
            mode,
            encoders: (0..channels).map(|_| G722Encoder::open(mode)).collect(),
        })
    }

    /// Number of channels
    pub fn channels(&self) -> usize {
        self.encoders.len()
    }

    /// Operating mode shared by all channels
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Encoder stream for one channel
    pub fn channel(&self, index: usize) -> Option<&G722Encoder> {
        self.encoders.get(index)
    }

    /// Encode interleaved PCM, returning one octet vector per channel
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless `samples` holds a whole number of
    /// sample pairs for every channel.
    pub fn encode_interleaved(&mut self, samples: &[i16]) -> Result<Vec<Vec<u8>>> {
        let channels = self.encoders.len();
        validate_channel_alignment(samples, channels)?;

        let payloads: Vec<Vec<u8>> = self
            .encoders
            .par_iter_mut()
            .enumerate()
            .map(|(channel, encoder)| {
                let mut octets = Vec::with_capacity(samples.len() / channels / 2);
                for &pcm in samples.iter().skip(channel).step_by(channels) {
                    if let Some(codeword) = encoder.encode_sample(pcm) {
                        octets.push(codeword.octet());
                    }
                }
                octets
            })
            .collect();

        trace!(
            "G.722 encoded {} interleaved samples across {} channels",
            samples.len(),
            channels
        );
        Ok(payloads)
    }

    /// Close every channel stream
    pub fn close(self) {
        debug!("Closing {} G.722 encoder streams", self.encoders.len());
        self.encoders.into_iter().for_each(G722Encoder::close);
    }
}

/// Decoder producing interleaved multi-channel PCM
#[derive(Debug, Clone)]
pub struct MultiStreamDecoder {
    mode: Mode,
    policy: CodewordPolicy,
    decoders: Vec<G722Decoder>,
}

impl MultiStreamDecoder {
    /// Open one decoder stream per channel, rejecting padded octets
    pub fn open(mode: Mode, channels: usize) -> Result<Self> {
        Self::open_with_policy(mode, channels, CodewordPolicy::Reject)
    }

    /// Open one decoder stream per channel with an explicit codeword policy
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `channels` is zero.
    pub fn open_with_policy(mode: Mode, channels: usize, policy: CodewordPolicy) -> Result<Self> {
        check_channel_count(channels)?;
        debug!("Opening {} G.722 decoder streams in {}", channels, mode);

        Ok(Self {
            mode,
            policy,
            decoders: (0..channels)
                .map(|_| G722Decoder::open_with_policy(mode, policy))
                .collect(),
        })
    }

    /// Number of channels
    pub fn channels(&self) -> usize {
        self.decoders.len()
    }

    /// Operating mode shared by all channels
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Decoder stream for one channel
    pub fn channel(&self, index: usize) -> Option<&G722Decoder> {
        self.decoders.get(index)
    }

    /// Decode one payload per channel and interleave the result
    ///
    /// All payloads are checked before any channel is decoded, so a rejected
    /// call leaves every channel's state unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the payload count differs from the channel
    /// count, the payload lengths differ, or (under `Reject`) an octet sets
    /// padding bits.
    pub fn decode_channels<P>(&mut self, payloads: &[P]) -> Result<Vec<i16>>
    where
        P: AsRef<[u8]> + Sync,
    {
        let channels = self.decoders.len();
        if payloads.len() != channels {
            return Err(CodecError::invalid_input(format!(
                "Expected {} channel payloads, got {}",
                channels,
                payloads.len()
            )));
        }

        let length = payloads[0].as_ref().len();
        if let Some((channel, payload)) = payloads
            .iter()
            .enumerate()
            .find(|(_, payload)| payload.as_ref().len() != length)
        {
            return Err(CodecError::invalid_input(format!(
                "Channel {} payload has {} octets, channel 0 has {}",
                channel,
                payload.as_ref().len(),
                length
            )));
        }

        if self.policy == CodewordPolicy::Reject {
            for payload in payloads {
                validate_payload(payload.as_ref(), self.mode)?;
            }
        }

        let decoded = self
            .decoders
            .par_iter_mut()
            .zip(payloads.par_iter())
            .map(|(decoder, payload)| {
                let mut pcm = Vec::with_capacity(length * 2);
                decoder.decode_octets(payload.as_ref(), &mut pcm).map(|_| pcm)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut interleaved = Vec::with_capacity(length * 2 * channels);
        for i in 0..length * 2 {
            interleaved.extend(decoded.iter().map(|pcm| pcm[i]));
        }

        trace!(
            "G.722 decoded {} octets per channel across {} channels",
            length,
            channels
        );
        Ok(interleaved)
    }

    /// Close every channel stream
    pub fn close(self) {
        debug!("Closing {} G.722 decoder streams", self.decoders.len());
        self.decoders.into_iter().for_each(G722Decoder::close);
    }
}
