//! Shared plumbing for the subcommands that rewrite names: reading input,
//! applying an encoder and writing the results.

use std::{
    borrow::Cow,
    ffi::OsString,
    io::{self, BufRead, BufWriter, Write},
};

use anyhow::Context;
use fsencoding::Encoder;

/// A transformation applied to every input of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encode,
    Decode,
    ToStandardName,
    ToStandardPath,
    FromStandardName,
    FromStandardPath,
}

impl Operation {
    pub fn apply<'a>(self, encoder: &dyn Encoder, input: &'a [u8]) -> Cow<'a, [u8]> {
        match self {
            Operation::Encode => encoder.encode(input),
            Operation::Decode => encoder.decode(input),
            Operation::ToStandardName => encoder.to_standard_name(input),
            Operation::ToStandardPath => encoder.to_standard_path(input),
            Operation::FromStandardName => encoder.from_standard_name(input),
            Operation::FromStandardPath => encoder.from_standard_path(input),
        }
    }

    /// Applies the operation to `inputs`, or to every line of stdin when no
    /// inputs were given, writing one result per line to stdout.
    pub fn run(self, encoder: &dyn Encoder, inputs: &[OsString]) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut output = BufWriter::new(stdout.lock());

        if inputs.is_empty() {
            log::debug!("Reading input from stdin");
            let stdin = io::stdin();
            self.transform_lines(encoder, stdin.lock(), &mut output)?;
        } else {
            for input in inputs {
                self.transform_one(encoder, input.as_encoded_bytes(), &mut output)?;
            }
        }

        output.flush().context("Could not write to stdout")?;
        Ok(())
    }

    /// Transforms each `\n` terminated line of `input`. Only the newline is
    /// stripped; a `\r` before it is part of the name.
    pub fn transform_lines<R: BufRead, W: Write>(
        self,
        encoder: &dyn Encoder,
        input: R,
        output: &mut W,
    ) -> anyhow::Result<()> {
        for line in input.split(b'\n') {
            let line = line.context("Could not read from stdin")?;
            self.transform_one(encoder, &line, output)?;
        }

        Ok(())
    }

    fn transform_one<W: Write>(
        self,
        encoder: &dyn Encoder,
        input: &[u8],
        output: &mut W,
    ) -> anyhow::Result<()> {
        let result = self.apply(encoder, input);
        if let Cow::Owned(_) = result {
            log::trace!(
                "{:?}: {:?} -> {:?}",
                self,
                String::from_utf8_lossy(input),
                String::from_utf8_lossy(&result)
            );
        }

        output
            .write_all(&result)
            .and_then(|_| output.write_all(b"\n"))
            .context("Could not write to stdout")
    }
}
