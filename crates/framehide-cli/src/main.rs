use clap::Parser;
use framehide_core::FramehideError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub(crate) type CliResult<T> = Result<T, FramehideError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options();

    match args.command {
        Commands::Hide(cmd) => cmd.run(options),
        Commands::Unveil(cmd) => cmd.run(options),
        Commands::Capacity(cmd) => cmd.run(options),
    }
}
