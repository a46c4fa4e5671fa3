use std::{
    any::Any,
    env,
    io::{self, IsTerminal},
};

use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer};

use crate::cli::ColorChoice;

/// Filter used for the console when `RUST_LOG` is not set.
fn console_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "info,libnamecodec=debug,fsencoding=debug",
        2 => "info,libnamecodec=trace,fsencoding=trace",
        _ => "trace",
    }
}

fn use_ansi(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    }
}

/// Sends `tracing` events and `log` records to stderr.
pub fn init_logging(verbosity: u8, color: ColorChoice) -> anyhow::Result<()> {
    tracing_log::LogTracer::init().context("Failed to set log tracer")?;

    let console_env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_filter(verbosity)));

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(use_ansi(color))
        .without_time()
        .with_target(false)
        .with_thread_names(false)
        .with_level(true)
        .with_filter(console_env_filter);

    let subscriber = tracing_subscriber::registry().with(console_layer);
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global tracing subscriber")?;

    Ok(())
}

/// The text of a panic payload, which is a `&str` or a `String` for every
/// `panic!` with a message.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "<no message>".to_owned()
    }
}

/// Whether `RUST_BACKTRACE` asks for a backtrace.
pub fn backtrace_requested() -> bool {
    env::var("RUST_BACKTRACE").is_ok_and(|var| backtrace_setting_enabled(&var))
}

fn backtrace_setting_enabled(setting: &str) -> bool {
    !setting.is_empty() && setting != "0"
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn quiet_by_default() {
        assert_eq!(console_filter(0), "info");
    }

    #[test]
    fn verbosity_raises_crate_levels() {
        assert_eq!(console_filter(1), "info,libnamecodec=debug,fsencoding=debug");
        assert_eq!(console_filter(2), "info,libnamecodec=trace,fsencoding=trace");
        assert_eq!(console_filter(3), "trace");
        assert_eq!(console_filter(u8::MAX), "trace");
    }

    #[test]
    fn every_filter_parses() {
        for verbosity in 0..4 {
            assert!(EnvFilter::try_new(console_filter(verbosity)).is_ok());
        }
    }

    #[test]
    fn explicit_color_choices() {
        assert!(use_ansi(ColorChoice::Always));
        assert!(!use_ansi(ColorChoice::Never));
    }

    #[test]
    fn panic_messages() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(payload.as_ref()), "static message");

        let payload: Box<dyn Any + Send> = Box::new(format!("formatted {}", 1));
        assert_eq!(panic_message(payload.as_ref()), "formatted 1");

        let payload: Box<dyn Any + Send> = Box::new(42u32);
        assert_eq!(panic_message(payload.as_ref()), "<no message>");
    }

    #[test]
    fn backtrace_settings() {
        assert!(backtrace_setting_enabled("1"));
        assert!(backtrace_setting_enabled("full"));
        assert!(!backtrace_setting_enabled("0"));
        assert!(!backtrace_setting_enabled(""));
    }
}
