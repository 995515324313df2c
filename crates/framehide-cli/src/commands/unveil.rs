use std::fs;
use std::path::PathBuf;

use clap::Args;
use framehide_core::{CodecOptions, FramehideError};

use crate::CliResult;

/// Unveils a message hidden in a folder of PNG frames
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Folder containing the frames with the hidden message
    #[arg(short = 'i', long = "in", value_name = "frames folder", required = true)]
    pub frames: PathBuf,

    /// Write the message to this file instead of printing it
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let message = framehide_core::commands::unveil(&self.frames, options)?;

        match self.output_file {
            Some(path) => {
                fs::write(&path, message).map_err(|source| FramehideError::WriteError { source })?
            }
            None => println!("{message}"),
        }

        Ok(())
    }
}
