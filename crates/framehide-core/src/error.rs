use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FramehideError {
    /// Represents a frame that exposes fewer embeddable samples than one symbol needs
    #[error("Frame offers {available} embeddable sample(s) but {needed} are required")]
    InsufficientCapacity { needed: usize, available: usize },

    /// Represents a message length that does not fit into the reserved header frames
    #[error("Message length {length} exceeds the header maximum of {max}")]
    LengthOverflow { length: usize, max: u64 },

    /// Represents a message longer than the frame sequence can carry
    #[error("Message of {length} character(s) does not fit, the sequence carries at most {max}")]
    MessageTooLong { length: usize, max: usize },

    /// Represents a character outside the single-byte range
    #[error("Unsupported character {0:?}, only single-byte code points can be hidden")]
    UnsupportedCharacter(char),

    /// Represents an embed or extract attempt without enough frames for the length header
    #[error("No frames supplied")]
    EmptyInput,

    /// Represents a decoded length that is inconsistent with the frame count.
    /// Either no message is present or the sequence was altered after embedding.
    #[error("Header decodes to {decoded} character(s) but the sequence carries at most {max}")]
    CorruptHeader { decoded: usize, max: usize },

    /// Represents a bit depth the codecs cannot handle
    #[error("Bit depth {0} is not supported, it must be within 1..=8")]
    InvalidBitDepth(u8),

    /// Represents an invalid carrier frame, for example a broken PNG file
    #[error("Frame image is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding a frame image file
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a frame whose dimensions differ from the rest of the sequence
    #[error(
        "Frame {index} is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}"
    )]
    FrameSizeMismatch {
        index: usize,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// Represents a folder that contains no frames at all
    #[error("No PNG frames found in {0:?}")]
    EmptyFrameSequence(PathBuf),

    /// Represents a frame index outside the stored sequence
    #[error("Frame index {index} is out of range for a sequence of {frame_count} frame(s)")]
    FrameIndexOutOfRange { index: usize, frame_count: usize },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write a target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents an invalid frame discovery pattern
    #[error(transparent)]
    PatternError(#[from] glob::PatternError),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
