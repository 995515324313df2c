/// decides which color channels of a pixel carry hidden bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelSelect {
    /// flatten over all color channels; whether alpha participates is
    /// controlled by `skip_alpha_channel`
    All,
    /// one fixed channel only, e.g. `Single(2)` for blue in RGBA order.
    /// Reduces the per-frame capacity to one sample per pixel.
    Single(usize),
}

#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// number of bits per embedded symbol and per length-header chunk,
    /// must be within `1..=8`.
    ///
    /// Note this number influences the per-frame sample demand directly.
    pub bit_depth: u8,

    /// frames reserved at the start of the sequence for the length header.
    /// The largest representable message length is
    /// `2^(bit_depth * header_frames) - 1`.
    pub header_frames: usize,

    /// the channels that carry the hidden bits
    pub channel: ChannelSelect,

    /// if true the alpha channel is never used for encoding,
    /// this reduces the capacity by one sample per pixel
    pub skip_alpha_channel: bool,
}

impl Default for CodecOptions {
    /// one byte per frame, a single header frame, all color channels
    fn default() -> Self {
        Self {
            bit_depth: 8,
            header_frames: 1,
            channel: ChannelSelect::All,
            skip_alpha_channel: true,
        }
    }
}

impl CodecOptions {
    /// largest message length the header frames can represent
    pub fn max_message_length(&self) -> u64 {
        let bits = u64::from(self.bit_depth).saturating_mul(self.header_frames as u64);
        if bits >= u64::from(u64::BITS) {
            u64::MAX
        } else {
            (1u64 << bits) - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_header_caps_length_at_255() {
        assert_eq!(CodecOptions::default().max_message_length(), 255);
    }

    #[test]
    fn two_header_frames_extend_the_length_range() {
        let options = CodecOptions {
            header_frames: 2,
            ..CodecOptions::default()
        };
        assert_eq!(options.max_message_length(), 65535);
    }

    #[test]
    fn narrow_bit_depth_shrinks_the_length_range() {
        let options = CodecOptions {
            bit_depth: 4,
            ..CodecOptions::default()
        };
        assert_eq!(options.max_message_length(), 15);
    }
}
