use std::ffi::OsString;

use clap::Parser;

use super::{EncodingOptions, Operation};

/// Convert paths from the selected encoding to the Standard encoding.
///
/// Paths are read from the command line, or one per line from stdin when none
/// are given.
#[derive(Debug, Parser)]
pub struct ToStandardCommand {
    #[clap(flatten)]
    pub encoding: EncodingOptions,

    /// Treat each input as a single name, so `/` is converted instead of
    /// separating components.
    #[clap(long)]
    pub name: bool,

    /// Paths to convert.
    pub paths: Vec<OsString>,
}

impl ToStandardCommand {
    pub fn run(self) -> anyhow::Result<()> {
        let operation = if self.name {
            Operation::ToStandardName
        } else {
            Operation::ToStandardPath
        };

        operation.run(self.encoding.encoder().as_ref(), &self.paths)
    }
}

/// Convert paths from the Standard encoding to the selected encoding.
///
/// Paths are read from the command line, or one per line from stdin when none
/// are given.
#[derive(Debug, Parser)]
pub struct FromStandardCommand {
    #[clap(flatten)]
    pub encoding: EncodingOptions,

    /// Treat each input as a single name, so `/` is converted instead of
    /// separating components.
    #[clap(long)]
    pub name: bool,

    /// Paths to convert.
    pub paths: Vec<OsString>,
}

impl FromStandardCommand {
    pub fn run(self) -> anyhow::Result<()> {
        let operation = if self.name {
            Operation::FromStandardName
        } else {
            Operation::FromStandardPath
        };

        operation.run(self.encoding.encoder().as_ref(), &self.paths)
    }
}
