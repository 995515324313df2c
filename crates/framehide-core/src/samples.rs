use std::iter::Enumerate;
use std::slice::{Iter, IterMut};

use image::RgbaImage;

use crate::codec_options::{ChannelSelect, CodecOptions};

const RGBA_CHANNELS: usize = 4;

/// decides whether the sample at a flattened buffer index carries hidden bits
#[derive(Debug, Clone, Copy)]
struct ChannelFilter {
    select: ChannelSelect,
    skip_alpha: bool,
}

impl ChannelFilter {
    fn new(options: &CodecOptions) -> Self {
        Self {
            select: options.channel,
            skip_alpha: options.skip_alpha_channel,
        }
    }

    fn carries(&self, index: usize) -> bool {
        let channel = index % RGBA_CHANNELS;
        match self.select {
            ChannelSelect::All => !(self.skip_alpha && channel == RGBA_CHANNELS - 1),
            ChannelSelect::Single(c) => channel == c,
        }
    }
}

/// iterates the embeddable samples of one frame in flattened row-major order
pub struct SampleIter<'i> {
    samples: Enumerate<Iter<'i, u8>>,
    filter: ChannelFilter,
}

impl<'i> SampleIter<'i> {
    pub fn new(frame: &'i RgbaImage, options: &CodecOptions) -> Self {
        Self {
            samples: frame.iter().enumerate(),
            filter: ChannelFilter::new(options),
        }
    }
}

impl<'i> Iterator for SampleIter<'i> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, sample) in self.samples.by_ref() {
            if self.filter.carries(index) {
                return Some(*sample);
            }
        }
        None
    }
}

/// mutable counterpart of [`SampleIter`], same order
pub struct SampleIterMut<'a> {
    samples: Enumerate<IterMut<'a, u8>>,
    filter: ChannelFilter,
}

impl<'a> SampleIterMut<'a> {
    pub fn new(frame: &'a mut RgbaImage, options: &CodecOptions) -> Self {
        let filter = ChannelFilter::new(options);
        Self {
            samples: frame.iter_mut().enumerate(),
            filter,
        }
    }
}

impl<'a> Iterator for SampleIterMut<'a> {
    type Item = &'a mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, sample) in self.samples.by_ref() {
            if self.filter.carries(index) {
                return Some(sample);
            }
        }
        None
    }
}

/// number of samples of a frame available for embedding under the given options
pub fn embeddable_samples(frame: &RgbaImage, options: &CodecOptions) -> usize {
    let pixels = (frame.width() * frame.height()) as usize;
    match options.channel {
        ChannelSelect::Single(c) if c < RGBA_CHANNELS => pixels,
        ChannelSelect::Single(_) => 0,
        ChannelSelect::All if options.skip_alpha_channel => pixels * (RGBA_CHANNELS - 1),
        ChannelSelect::All => pixels * RGBA_CHANNELS,
    }
}
