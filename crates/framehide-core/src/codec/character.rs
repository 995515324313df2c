use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use image::RgbaImage;

use crate::codec_options::CodecOptions;
use crate::error::FramehideError;
use crate::result::Result;
use crate::samples::{embeddable_samples, SampleIter, SampleIterMut};

/// encodes one symbol per frame into the least significant bit of its first
/// `bit_depth` embeddable samples, most significant bit of the symbol first
pub struct CharacterCodec {
    options: CodecOptions,
}

impl CharacterCodec {
    pub fn new(options: &CodecOptions) -> Self {
        Self {
            options: options.clone(),
        }
    }

    fn bit_depth(&self) -> Result<u32> {
        match self.options.bit_depth {
            depth @ 1..=8 => Ok(u32::from(depth)),
            depth => Err(FramehideError::InvalidBitDepth(depth)),
        }
    }

    fn ensure_capacity(&self, frame: &RgbaImage, needed: u32) -> Result<()> {
        let available = embeddable_samples(frame, &self.options);
        if available < needed as usize {
            return Err(FramehideError::InsufficientCapacity {
                needed: needed as usize,
                available,
            });
        }
        Ok(())
    }

    /// writes the lowest `bit_depth` bits of `code` into the frame, in place.
    /// No sample changes by more than 1.
    pub fn encode(&self, frame: &mut RgbaImage, code: u8) -> Result<()> {
        let depth = self.bit_depth()?;
        self.ensure_capacity(frame, depth)?;

        let mut bits = BitReader::endian(Cursor::new([code]), BigEndian);
        bits.skip(8 - depth)?;

        for sample in SampleIterMut::new(frame, &self.options).take(depth as usize) {
            let bit = bits.read_bit()?;
            *sample = (*sample & (u8::MAX - 1)) | u8::from(bit);
        }

        Ok(())
    }

    /// reassembles a symbol from the LSBs of the frame's first `bit_depth` samples
    pub fn decode(&self, frame: &RgbaImage) -> Result<u8> {
        let depth = self.bit_depth()?;
        self.ensure_capacity(frame, depth)?;

        let mut buf = [0u8; 1];
        {
            let mut bits = BitWriter::endian(Cursor::new(&mut buf[..]), BigEndian);
            for sample in SampleIter::new(frame, &self.options).take(depth as usize) {
                bits.write_bit(sample & 1 == 1)?;
            }
            if !bits.byte_aligned() {
                bits.byte_align()?;
            }
        }

        // BigEndian aligning pads the low end, undo that for depths below 8
        Ok(buf[0] >> (8 - depth))
    }
}
