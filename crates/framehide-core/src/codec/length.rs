use image::RgbaImage;

use crate::codec::CharacterCodec;
use crate::codec_options::CodecOptions;
use crate::error::FramehideError;
use crate::result::Result;

/// embeds the payload length across the reserved header frames, one
/// `bit_depth` wide chunk per frame, most significant chunk first.
///
/// The length must be known before extraction can tell where the character
/// sequence ends; a fixed-size header avoids scanning for a terminator that
/// could collide with real payload bytes.
pub struct LengthCodec {
    chunks: CharacterCodec,
    options: CodecOptions,
}

impl LengthCodec {
    pub fn new(options: &CodecOptions) -> Self {
        Self {
            chunks: CharacterCodec::new(options),
            options: options.clone(),
        }
    }

    /// largest length the header frames can represent
    pub fn max_length(&self) -> u64 {
        self.options.max_message_length()
    }

    /// writes `length` into the first `header_frames` frames of the slice
    pub fn encode(&self, frames: &mut [RgbaImage], length: usize) -> Result<()> {
        if length as u64 > self.max_length() {
            return Err(FramehideError::LengthOverflow {
                length,
                max: self.max_length(),
            });
        }
        let header = self.options.header_frames;
        if frames.len() < header {
            return Err(FramehideError::EmptyInput);
        }
        if !(1..=8).contains(&self.options.bit_depth) {
            return Err(FramehideError::InvalidBitDepth(self.options.bit_depth));
        }

        let depth = u64::from(self.options.bit_depth);
        let mask = (1u64 << depth) - 1;
        for (i, frame) in frames.iter_mut().take(header).enumerate() {
            let shift = depth * (header - 1 - i) as u64;
            let chunk = if shift >= u64::from(u64::BITS) {
                0
            } else {
                ((length as u64 >> shift) & mask) as u8
            };
            self.chunks.encode(frame, chunk)?;
        }

        Ok(())
    }

    /// reads the length back from the header frames
    pub fn decode(&self, frames: &[RgbaImage]) -> Result<usize> {
        let header = self.options.header_frames;
        if frames.len() < header {
            return Err(FramehideError::EmptyInput);
        }

        let mut length: u64 = 0;
        for frame in frames.iter().take(header) {
            let chunk = self.chunks.decode(frame)?;
            length = (length << self.options.bit_depth) | u64::from(chunk);
        }

        Ok(length as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_blank_frames;

    #[test]
    fn should_round_trip_a_length_within_one_frame() {
        let codec = LengthCodec::new(&CodecOptions::default());
        let mut frames = prepare_blank_frames(1, 5, 5);

        codec.encode(&mut frames, 42).expect("encoding failed");
        assert_eq!(codec.decode(&frames).expect("decoding failed"), 42);
    }

    #[test]
    fn should_overflow_beyond_a_single_frame_header() {
        let codec = LengthCodec::new(&CodecOptions::default());
        let mut frames = prepare_blank_frames(1, 5, 5);

        match codec.encode(&mut frames, 256).err() {
            Some(FramehideError::LengthOverflow { length: 256, max: 255 }) => (),
            other => panic!("expected LengthOverflow, got {other:?}"),
        }
    }

    #[test]
    fn should_spread_a_wide_length_big_endian_over_the_header_frames() {
        let options = CodecOptions {
            header_frames: 2,
            ..CodecOptions::default()
        };
        let codec = LengthCodec::new(&options);
        let mut frames = prepare_blank_frames(2, 5, 5);

        codec.encode(&mut frames, 300).expect("encoding failed");

        // 300 = 0x012C, most significant chunk lands in frame 0
        let chunks = CharacterCodec::new(&options);
        assert_eq!(chunks.decode(&frames[0]).unwrap(), 0x01);
        assert_eq!(chunks.decode(&frames[1]).unwrap(), 0x2C);

        assert_eq!(codec.decode(&frames).expect("decoding failed"), 300);
    }

    #[test]
    fn should_fail_without_enough_header_frames() {
        let codec = LengthCodec::new(&CodecOptions::default());
        let frames = prepare_blank_frames(0, 5, 5);

        assert!(matches!(
            codec.decode(&frames).err(),
            Some(FramehideError::EmptyInput)
        ));
    }
}
