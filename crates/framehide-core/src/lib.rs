//! # Framehide Core API
//!
//! Hides a text message inside the pixels of a lossless video frame
//! sequence, one character per frame, and recovers it exactly later on.
//! Only the least significant bit of a pixel sample is ever touched, so a
//! carrier frame changes by at most one intensity step per sample.
//!
//! The first frame(s) of the sequence carry a fixed-width length header,
//! the following frames carry one character each. Everything past the
//! message is passed through untouched.
//!
//! # Usage Examples
//!
//! ## Hide and recover a message on in-memory frames
//!
//! ```rust
//! use framehide_core::StegoEngine;
//! use image::RgbaImage;
//!
//! let mut frames: Vec<RgbaImage> = (0..4).map(|_| RgbaImage::new(8, 8)).collect();
//!
//! let engine = StegoEngine::new();
//! engine.embed(&mut frames, "OK").expect("Failed to hide message in frames");
//!
//! let message = engine.extract(&frames).expect("Failed to unveil message from frames");
//! assert_eq!(message, "OK");
//! ```
//!
//! ## Work against a folder of PNG frames
//!
//! ```rust,no_run
//! use std::path::Path;
//! use framehide_core::CodecOptions;
//!
//! framehide_core::commands::hide(
//!     Path::new("carrier-frames/"),
//!     Path::new("frames-with-secret/"),
//!     "Hello, World!",
//!     CodecOptions::default(),
//! )
//! .expect("Failed to hide message in frame folder");
//! ```

pub mod codec;
pub mod codec_options;
pub mod commands;
pub mod engine;
pub mod error;
pub mod media;
pub mod result;
pub mod samples;

pub use crate::codec::{CharacterCodec, LengthCodec};
pub use crate::codec_options::{ChannelSelect, CodecOptions};
pub use crate::engine::StegoEngine;
pub use crate::error::FramehideError;
pub use crate::media::{FrameStore, PngFolderStore};
pub use crate::result::Result;
