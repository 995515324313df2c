use crate::error::FramehideError;

pub type Result<T> = std::result::Result<T, FramehideError>;
