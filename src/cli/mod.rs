//! Defines namecodec's CLI through clap types.

mod completions;
mod encode;
mod standard;
mod transform;

use std::str::FromStr;

use clap::Parser;
use fsencoding::{identity, EncodeFlags, Encoder, MultiEncoder};
use thiserror::Error;

pub use self::completions::CompletionsCommand;
pub use self::encode::{DecodeCommand, EncodeCommand};
pub use self::standard::{FromStandardCommand, ToStandardCommand};
pub use self::transform::Operation;

/// Command line options that namecodec accepts, defined using the clap crate.
#[derive(Debug, Parser)]
#[clap(name = "namecodec", version, about)]
pub struct Options {
    #[clap(flatten)]
    pub global: GlobalOptions,

    /// Subcommand to run in this invocation.
    #[clap(subcommand)]
    pub subcommand: Subcommand,
}

impl Options {
    pub fn run(self) -> anyhow::Result<()> {
        match self.subcommand {
            Subcommand::Encode(subcommand) => subcommand.run(),
            Subcommand::Decode(subcommand) => subcommand.run(),
            Subcommand::ToStandard(subcommand) => subcommand.run(),
            Subcommand::FromStandard(subcommand) => subcommand.run(),
            Subcommand::Completions(subcommand) => subcommand.run(),
        }
    }
}

#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Sets verbosity level. Can be specified multiple times.
    #[clap(long("verbose"), short, global(true), action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Set color behavior. Valid values are auto, always, and never.
    #[clap(long("color"), global(true), default_value("auto"))]
    pub color: ColorChoice,
}

#[derive(Debug, Clone, Copy)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl FromStr for ColorChoice {
    type Err = ColorChoiceParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        match source {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(ColorChoiceParseError {
                attempted: source.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid color choice '{attempted}'. Valid values are: auto, always, never")]
pub struct ColorChoiceParseError {
    attempted: String,
}

/// Selects the encoding a command works with.
#[derive(Debug, Parser)]
pub struct EncodingOptions {
    /// Character classes to encode, as a comma separated list such as
    /// `Slash,Win,Ctl`. Defaults to the Standard encoding.
    #[clap(long, short, default_value = "Standard")]
    pub encoding: EncodeFlags,

    /// Use the identity encoding, which leaves names unchanged.
    #[clap(long, conflicts_with = "encoding")]
    pub identity: bool,
}

impl EncodingOptions {
    pub fn encoder(&self) -> Box<dyn Encoder> {
        if self.identity {
            log::debug!("Using the identity encoding");
            Box::new(identity())
        } else {
            log::debug!("Using encoding {}", self.encoding);
            Box::new(MultiEncoder::new(self.encoding))
        }
    }
}

#[derive(Debug, Parser)]
pub enum Subcommand {
    Encode(EncodeCommand),
    Decode(DecodeCommand),
    ToStandard(ToStandardCommand),
    FromStandard(FromStandardCommand),
    Completions(CompletionsCommand),
}

impl Subcommand {
    pub fn command_name(&self) -> &'static str {
        match self {
            Subcommand::Encode(_) => "encode",
            Subcommand::Decode(_) => "decode",
            Subcommand::ToStandard(_) => "to-standard",
            Subcommand::FromStandard(_) => "from-standard",
            Subcommand::Completions(_) => "completions",
        }
    }
}
