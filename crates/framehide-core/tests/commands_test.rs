use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use tempfile::TempDir;

use framehide_core::commands::{capacity, hide, unveil};
use framehide_core::{CodecOptions, FramehideError};

fn write_carrier_frames(dir: &Path, count: usize, fill: impl Fn(u32, u32, usize) -> Rgba<u8>) {
    for index in 0..count {
        let frame: RgbaImage = ImageBuffer::from_fn(16, 16, |x, y| fill(x, y, index));
        frame
            .save_with_format(
                dir.join(format!("carrier_{index:03}.png")),
                image::ImageFormat::Png,
            )
            .expect("Failed to write carrier frame");
    }
}

fn noisy_fill(x: u32, y: u32, index: usize) -> Rgba<u8> {
    let v = (x * 7 + y * 13 + index as u32 * 31) as u8;
    Rgba([v, v.wrapping_add(40), v.wrapping_add(80), 255])
}

#[test]
fn should_hide_and_unveil_a_message_through_the_folder_store() {
    let carrier_dir = TempDir::new().expect("Failed to create temporary directory");
    let secret_dir = TempDir::new().expect("Failed to create temporary directory");
    write_carrier_frames(carrier_dir.path(), 16, noisy_fill);

    hide(
        carrier_dir.path(),
        secret_dir.path(),
        "Hello, World!",
        CodecOptions::default(),
    )
    .expect("Failed to hide message");

    let message =
        unveil(secret_dir.path(), CodecOptions::default()).expect("Failed to unveil message");
    assert_eq!(message, "Hello, World!");
}

#[test]
fn should_report_the_capacity_of_a_folder() {
    let carrier_dir = TempDir::new().expect("Failed to create temporary directory");
    write_carrier_frames(carrier_dir.path(), 8, noisy_fill);

    let chars =
        capacity(carrier_dir.path(), CodecOptions::default()).expect("Failed to query capacity");
    assert_eq!(chars, 7);
}

#[test]
fn should_write_the_full_sequence_even_for_a_short_message() {
    let carrier_dir = TempDir::new().expect("Failed to create temporary directory");
    let secret_dir = TempDir::new().expect("Failed to create temporary directory");
    write_carrier_frames(carrier_dir.path(), 10, noisy_fill);

    hide(
        carrier_dir.path(),
        secret_dir.path(),
        "OK",
        CodecOptions::default(),
    )
    .expect("Failed to hide message");

    let written = std::fs::read_dir(secret_dir.path())
        .expect("Output folder was not written")
        .count();
    assert_eq!(written, 10, "every input frame must appear in the output");
}

#[test]
fn should_refuse_a_message_longer_than_the_sequence() {
    let carrier_dir = TempDir::new().expect("Failed to create temporary directory");
    let secret_dir = TempDir::new().expect("Failed to create temporary directory");
    write_carrier_frames(carrier_dir.path(), 3, noisy_fill);

    let result = hide(
        carrier_dir.path(),
        secret_dir.path(),
        "way too long",
        CodecOptions::default(),
    );
    assert!(matches!(
        result.err(),
        Some(FramehideError::MessageTooLong { length: 12, max: 2 })
    ));

    let written = std::fs::read_dir(secret_dir.path()).map(Iterator::count).unwrap_or(0);
    assert_eq!(written, 0, "a failed hide must not leave frames behind");
}

#[test]
fn should_detect_frames_without_a_message() {
    let carrier_dir = TempDir::new().expect("Failed to create temporary directory");
    // all-white frames decode to a length of 255, far beyond the frame count
    write_carrier_frames(carrier_dir.path(), 4, |_, _, _| Rgba([255, 255, 255, 255]));

    let result = unveil(carrier_dir.path(), CodecOptions::default());
    assert!(matches!(
        result.err(),
        Some(FramehideError::CorruptHeader { decoded: 255, max: 3 })
    ));
}

#[test]
fn should_fail_on_a_folder_without_frames() {
    let empty_dir = TempDir::new().expect("Failed to create temporary directory");

    let result = unveil(empty_dir.path(), CodecOptions::default());
    assert!(matches!(
        result.err(),
        Some(FramehideError::EmptyFrameSequence(_))
    ));
}
