use std::ffi::OsString;

use clap::Parser;

use super::{EncodingOptions, Operation};

/// Encode raw names, replacing characters the encoding reserves.
///
/// Names are read from the command line, or one per line from stdin when none
/// are given.
#[derive(Debug, Parser)]
pub struct EncodeCommand {
    #[clap(flatten)]
    pub encoding: EncodingOptions,

    /// Names to encode.
    pub names: Vec<OsString>,
}

impl EncodeCommand {
    pub fn run(self) -> anyhow::Result<()> {
        Operation::Encode.run(self.encoding.encoder().as_ref(), &self.names)
    }
}

/// Decode encoded names back to their raw form.
///
/// Names are read from the command line, or one per line from stdin when none
/// are given. Raw names may contain bytes that are not UTF-8; they are written
/// out as is.
#[derive(Debug, Parser)]
pub struct DecodeCommand {
    #[clap(flatten)]
    pub encoding: EncodingOptions,

    /// Names to decode.
    pub names: Vec<OsString>,
}

impl DecodeCommand {
    pub fn run(self) -> anyhow::Result<()> {
        Operation::Decode.run(self.encoding.encoder().as_ref(), &self.names)
    }
}
