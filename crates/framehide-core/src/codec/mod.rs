//! bit-level codecs: one symbol per frame, stored in sample LSBs

pub mod character;
pub mod length;

pub use character::CharacterCodec;
pub use length::LengthCodec;
