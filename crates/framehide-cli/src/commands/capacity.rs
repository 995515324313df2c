use std::path::PathBuf;

use clap::Args;
use framehide_core::CodecOptions;

use crate::CliResult;

/// Reports how many characters a folder of frames can carry
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Folder containing the carrier frames
    #[arg(short = 'i', long = "in", value_name = "frames folder", required = true)]
    pub frames: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let chars = framehide_core::commands::capacity(&self.frames, options)?;
        println!("{chars}");

        Ok(())
    }
}
