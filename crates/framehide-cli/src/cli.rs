use clap::{Parser, Subcommand, ValueEnum};
use framehide_core::{ChannelSelect, CodecOptions};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Color channel(s) carrying the hidden bits
    #[arg(long, value_enum, default_value = "all")]
    pub channel: ChannelArg,

    /// Experimental: number of frames reserved for the length header
    #[arg(long = "x-header-frames", default_value_t = 1)]
    pub header_frames: usize,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            channel: self.channel.into(),
            header_frames: self.header_frames,
            ..CodecOptions::default()
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ChannelArg {
    All,
    Red,
    Green,
    Blue,
}

impl From<ChannelArg> for ChannelSelect {
    fn from(value: ChannelArg) -> Self {
        match value {
            ChannelArg::All => ChannelSelect::All,
            ChannelArg::Red => ChannelSelect::Single(0),
            ChannelArg::Green => ChannelSelect::Single(1),
            ChannelArg::Blue => ChannelSelect::Single(2),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}
