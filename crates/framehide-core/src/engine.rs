use image::RgbaImage;
use log::debug;

use crate::codec::{CharacterCodec, LengthCodec};
use crate::codec_options::CodecOptions;
use crate::error::FramehideError;
use crate::result::Result;
use crate::samples::embeddable_samples;

/// orchestrates the length and character codecs across a frame sequence
///
/// The engine keeps no state between calls: `embed` and `extract` are pure
/// functions of their input frames (and the message). Frame order is strict,
/// the header must be decoded before any character frame is interpreted.
pub struct StegoEngine {
    options: CodecOptions,
    characters: CharacterCodec,
    lengths: LengthCodec,
}

impl Default for StegoEngine {
    fn default() -> Self {
        Self::with_options(CodecOptions::default())
    }
}

impl StegoEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self {
            characters: CharacterCodec::new(&options),
            lengths: LengthCodec::new(&options),
            options,
        }
    }

    /// maximum number of characters a sequence of `frame_count` frames can
    /// carry, the header frames are reserved
    pub fn max_payload_chars(&self, frame_count: usize) -> usize {
        frame_count.saturating_sub(self.options.header_frames)
    }

    /// hides `message` in the sequence: the length header goes into the
    /// reserved first frame(s), character k into the frame after that.
    /// Frames beyond the message are left untouched.
    pub fn embed(&self, frames: &mut [RgbaImage], message: &str) -> Result<()> {
        let payload = message_to_bytes(message)?;
        self.embed_bytes(frames, &payload)
    }

    pub fn embed_bytes(&self, frames: &mut [RgbaImage], payload: &[u8]) -> Result<()> {
        let header = self.options.header_frames;
        if frames.is_empty() || frames.len() < header {
            return Err(FramehideError::EmptyInput);
        }

        let max = self.max_payload_chars(frames.len());
        if payload.len() > max {
            return Err(FramehideError::MessageTooLong {
                length: payload.len(),
                max,
            });
        }

        // all or nothing: no frame is touched unless every frame that will
        // be written can hold a full symbol
        let needed = usize::from(self.options.bit_depth);
        for frame in frames.iter().take(header + payload.len()) {
            let available = embeddable_samples(frame, &self.options);
            if available < needed {
                return Err(FramehideError::InsufficientCapacity { needed, available });
            }
        }

        self.lengths.encode(&mut frames[..header], payload.len())?;
        for (k, &code) in payload.iter().enumerate() {
            self.characters.encode(&mut frames[header + k], code)?;
        }

        debug!(
            "embedded {} byte(s) into {} of {} frame(s)",
            payload.len(),
            header + payload.len(),
            frames.len()
        );
        Ok(())
    }

    /// recovers the hidden message, mapping each payload byte back to a char
    pub fn extract(&self, frames: &[RgbaImage]) -> Result<String> {
        Ok(self
            .extract_bytes(frames)?
            .into_iter()
            .map(char::from)
            .collect())
    }

    pub fn extract_bytes(&self, frames: &[RgbaImage]) -> Result<Vec<u8>> {
        let header = self.options.header_frames;
        if frames.is_empty() || frames.len() < header {
            return Err(FramehideError::EmptyInput);
        }

        let length = self.lengths.decode(&frames[..header])?;
        let max = self.max_payload_chars(frames.len());
        if length > max {
            return Err(FramehideError::CorruptHeader {
                decoded: length,
                max,
            });
        }

        let mut payload = Vec::with_capacity(length);
        for k in 0..length {
            payload.push(self.characters.decode(&frames[header + k])?);
        }

        Ok(payload)
    }
}

fn message_to_bytes(message: &str) -> Result<Vec<u8>> {
    message
        .chars()
        .map(|c| u8::try_from(u32::from(c)).map_err(|_| FramehideError::UnsupportedCharacter(c)))
        .collect()
}
