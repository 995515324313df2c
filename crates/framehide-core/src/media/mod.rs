//! frame providers and sinks backing the codecs

use image::RgbaImage;

use crate::result::Result;

pub mod png_folder;

pub use png_folder::PngFolderStore;

/// an ordered sequence of equally sized frames that the codecs read and write
///
/// Implementations must guarantee lossless fidelity from `write_frame` to a
/// subsequent `read_frame`, otherwise embedded bits will not survive.
pub trait FrameStore {
    fn frame_count(&self) -> usize;
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn frame_rate(&self) -> f64;
    fn read_frame(&self, index: usize) -> Result<RgbaImage>;
    fn write_frame(&mut self, index: usize, frame: &RgbaImage) -> Result<()>;
}
