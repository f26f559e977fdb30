//! Shared command line and logging glue for the binaries in this workspace.

pub use clap;
pub use clap_verbosity_flag as verbose;

use clap::builder::styling::{AnsiColor, Effects, Styles};

/// Help message styles shared by all binaries.
pub fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Cyan.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Map the `-v`/`-q` level to a tracing level. Every step is one notch more
/// verbose than the flag says, since errors are reported through `anyhow`.
pub fn verbose_level_to_trace(level: Option<verbose::Level>) -> &'static tracing::Level {
    match level {
        Some(verbose::Level::Error) => &tracing::Level::WARN,
        Some(verbose::Level::Warn) => &tracing::Level::INFO,
        Some(verbose::Level::Info) => &tracing::Level::DEBUG,
        Some(verbose::Level::Debug) => &tracing::Level::TRACE,
        Some(verbose::Level::Trace) => &tracing::Level::TRACE,
        None => &tracing::Level::ERROR,
    }
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr in a compact human readable form. If `file` is given,
/// they are written there as JSON lines instead.
pub fn logging_setup<W>(level: &tracing::Level, file: Option<W>)
where
    W: std::io::Write + Send + 'static,
{
    let builder = tracing_subscriber::fmt().with_max_level(*level);
    let r = match file {
        Some(w) => builder
            .json()
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(w))
            .try_init(),
        None => builder
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .try_init(),
    };
    if let Err(e) = r {
        eprintln!("failed to set up logging: {e}");
    }
}
