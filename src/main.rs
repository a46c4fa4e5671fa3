use std::{panic, process};

use backtrace::Backtrace;
use clap::Parser;

use libnamecodec::cli::Options;
use libnamecodec::logging;

fn main() {
    panic::set_hook(Box::new(|panic_info| {
        let message = logging::panic_message(panic_info.payload());

        log::error!(
            "namecodec {} panicked: {}",
            env!("CARGO_PKG_VERSION"),
            message
        );
        if let Some(location) = panic_info.location() {
            log::error!("at {}:{}", location.file(), location.line());
        }
        log::error!("Please report this, along with the input that caused it.");

        if logging::backtrace_requested() {
            eprintln!("{:?}", Backtrace::new());
        } else {
            eprintln!("note: set RUST_BACKTRACE=1 to print a backtrace.");
        }

        process::exit(1);
    }));

    let options = Options::parse();

    if let Err(err) = logging::init_logging(options.global.verbosity, options.global.color) {
        eprintln!("Warning: could not initialize logging: {err:?}");
    }

    log::trace!("Running {}", options.subcommand.command_name());

    if let Err(err) = options.run() {
        log::error!("{:?}", err);
        process::exit(1);
    }
}
