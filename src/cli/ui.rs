use std::io;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::display::{DisplaySink, MimeBundleSink, WriterSink};

/// How markup is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw HTML
    #[default]
    Html,
    /// One `{"text/html": ...}` JSON object per display call
    Mime,
}

pub fn make_sink(format: OutputFormat) -> Box<dyn DisplaySink> {
    match format {
        OutputFormat::Html => Box::new(WriterSink::stdout()),
        OutputFormat::Mime => Box::new(MimeBundleSink::new(io::stdout())),
    }
}

/// Install the stderr log subscriber.
///
/// `--verbose` selects debug output, otherwise `RUST_LOG` decides and
/// defaults to warnings only.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
