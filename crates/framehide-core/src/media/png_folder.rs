use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use image::RgbaImage;
use log::{debug, error};

use crate::error::FramehideError;
use crate::media::FrameStore;
use crate::result::Result;

pub const DEFAULT_FRAME_RATE: f64 = 25.0;

/// a frame store over a folder of numbered PNG files
///
/// PNG is lossless, so LSB data written through this store survives the
/// round trip to disk, unlike frames re-encoded by a lossy video codec.
pub struct PngFolderStore {
    dir: PathBuf,
    frames: Vec<PathBuf>,
    width: u32,
    height: u32,
    frame_rate: f64,
}

impl PngFolderStore {
    /// opens an existing folder of frames, ordered by file name
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let pattern = dir.join("*.png");
        let mut frames = Vec::new();
        for entry in glob(&pattern.to_string_lossy())? {
            frames.push(entry.map_err(|e| FramehideError::ReadError {
                source: e.into_error(),
            })?);
        }
        frames.sort();

        if frames.is_empty() {
            return Err(FramehideError::EmptyFrameSequence(dir));
        }

        let first = load_frame(&frames[0])?;
        let (width, height) = first.dimensions();
        debug!(
            "opened {} frame(s) of {width}x{height} from {}",
            frames.len(),
            dir.display()
        );

        Ok(Self {
            dir,
            frames,
            width,
            height,
            frame_rate: DEFAULT_FRAME_RATE,
        })
    }

    /// creates an empty store accepting frames of the given geometry
    pub fn create(
        dir: impl AsRef<Path>,
        width: u32,
        height: u32,
        frame_rate: f64,
    ) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| FramehideError::WriteError { source })?;

        Ok(Self {
            dir,
            frames: Vec::new(),
            width,
            height,
            frame_rate,
        })
    }

    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// reads the whole sequence into memory, front to back
    pub fn read_all(&self) -> Result<Vec<RgbaImage>> {
        (0..self.frame_count()).map(|i| self.read_frame(i)).collect()
    }

    fn ensure_dimensions(&self, index: usize, frame: &RgbaImage) -> Result<()> {
        let (actual_width, actual_height) = frame.dimensions();
        if (actual_width, actual_height) != (self.width, self.height) {
            return Err(FramehideError::FrameSizeMismatch {
                index,
                expected_width: self.width,
                expected_height: self.height,
                actual_width,
                actual_height,
            });
        }
        Ok(())
    }
}

fn load_frame(path: &Path) -> Result<RgbaImage> {
    Ok(image::open(path)
        .map_err(|e| {
            error!("cannot decode frame {}: {e}", path.display());
            FramehideError::InvalidImageMedia
        })?
        .to_rgba8())
}

impl FrameStore for PngFolderStore {
    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    fn read_frame(&self, index: usize) -> Result<RgbaImage> {
        let path = self
            .frames
            .get(index)
            .ok_or(FramehideError::FrameIndexOutOfRange {
                index,
                frame_count: self.frames.len(),
            })?;
        let frame = load_frame(path)?;
        self.ensure_dimensions(index, &frame)?;

        Ok(frame)
    }

    fn write_frame(&mut self, index: usize, frame: &RgbaImage) -> Result<()> {
        self.ensure_dimensions(index, frame)?;

        // frames are written in index order, overwriting is allowed
        if index > self.frames.len() {
            return Err(FramehideError::FrameIndexOutOfRange {
                index,
                frame_count: self.frames.len(),
            });
        }

        let path = self.dir.join(format!("frame_{index:06}.png"));
        frame
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| {
                error!("cannot save frame {}: {e}", path.display());
                FramehideError::ImageEncodingError
            })?;

        match index.cmp(&self.frames.len()) {
            Ordering::Less => self.frames[index] = path,
            _ => self.frames.push(path),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_gradient_frames;
    use tempfile::TempDir;

    #[test]
    fn should_write_and_reopen_a_sequence_losslessly() {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let frames = prepare_gradient_frames(3);

        let mut store = PngFolderStore::create(dir.path(), 5, 5, 30.0).unwrap();
        for (index, frame) in frames.iter().enumerate() {
            store.write_frame(index, frame).expect("write failed");
        }

        let reopened = PngFolderStore::open(dir.path()).expect("open failed");
        assert_eq!(reopened.frame_count(), 3);
        assert_eq!(reopened.width(), 5);
        assert_eq!(reopened.height(), 5);
        for (index, frame) in frames.iter().enumerate() {
            assert_eq!(
                &reopened.read_frame(index).expect("read failed"),
                frame,
                "frame {index} did not survive the round trip"
            );
        }
    }

    #[test]
    fn should_fail_on_an_empty_folder() {
        let dir = TempDir::new().expect("Failed to create temporary directory");

        assert!(matches!(
            PngFolderStore::open(dir.path()).err(),
            Some(FramehideError::EmptyFrameSequence(_))
        ));
    }

    #[test]
    fn should_reject_a_frame_of_foreign_dimensions() {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let mut store = PngFolderStore::create(dir.path(), 5, 5, 30.0).unwrap();

        let result = store.write_frame(0, &RgbaImage::new(4, 4));
        match result.err() {
            Some(FramehideError::FrameSizeMismatch {
                index: 0,
                expected_width: 5,
                expected_height: 5,
                actual_width: 4,
                actual_height: 4,
            }) => (),
            other => panic!("expected FrameSizeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_an_out_of_order_write() {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let mut store = PngFolderStore::create(dir.path(), 5, 5, 30.0).unwrap();

        let result = store.write_frame(2, &prepare_gradient_frames(1)[0]);
        assert!(matches!(
            result.err(),
            Some(FramehideError::FrameIndexOutOfRange {
                index: 2,
                frame_count: 0
            })
        ));
    }

    #[test]
    fn should_reject_an_index_beyond_the_sequence() {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let mut store = PngFolderStore::create(dir.path(), 5, 5, 30.0).unwrap();
        store
            .write_frame(0, &prepare_gradient_frames(1)[0])
            .unwrap();
        let store = PngFolderStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.read_frame(1).err(),
            Some(FramehideError::FrameIndexOutOfRange {
                index: 1,
                frame_count: 1
            })
        ));
    }
}
