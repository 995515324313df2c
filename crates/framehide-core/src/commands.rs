use std::path::Path;

use log::info;

use crate::codec_options::CodecOptions;
use crate::engine::StegoEngine;
use crate::media::{FrameStore, PngFolderStore};
use crate::result::Result;

/// hides `message` inside the frame sequence found in `input_dir` and writes
/// the full, same-length sequence to `output_dir`.
///
/// Nothing is written unless the whole message was embedded, a partially
/// processed sequence is never left behind as a usable result.
pub fn hide(
    input_dir: &Path,
    output_dir: &Path,
    message: &str,
    options: CodecOptions,
) -> Result<()> {
    let store = PngFolderStore::open(input_dir)?;
    let mut frames = store.read_all()?;

    StegoEngine::with_options(options).embed(&mut frames, message)?;

    let mut target =
        PngFolderStore::create(output_dir, store.width(), store.height(), store.frame_rate())?;
    for (index, frame) in frames.iter().enumerate() {
        target.write_frame(index, frame)?;
    }

    info!(
        "hid {} character(s) in {} frame(s) at {}",
        message.chars().count(),
        frames.len(),
        output_dir.display()
    );
    Ok(())
}

/// recovers the hidden message from the frame sequence in `input_dir`
pub fn unveil(input_dir: &Path, options: CodecOptions) -> Result<String> {
    let store = PngFolderStore::open(input_dir)?;
    let frames = store.read_all()?;

    StegoEngine::with_options(options).extract(&frames)
}

/// reports how many characters the sequence in `input_dir` can carry
pub fn capacity(input_dir: &Path, options: CodecOptions) -> Result<usize> {
    let store = PngFolderStore::open(input_dir)?;

    Ok(StegoEngine::with_options(options).max_payload_chars(store.frame_count()))
}
