use std::path::PathBuf;

use clap::Args;
use framehide_core::CodecOptions;

use crate::CliResult;

/// Hides a text message in a folder of lossless PNG frames
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Folder containing the carrier frames, used readonly
    #[arg(short = 'i', long = "in", value_name = "frames folder", required = true)]
    pub frames: PathBuf,

    /// The frames with the hidden message are written to this folder
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output folder",
        required = true
    )]
    pub write_to_folder: PathBuf,

    /// The text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        framehide_core::commands::hide(&self.frames, &self.write_to_folder, &self.message, options)
    }
}
