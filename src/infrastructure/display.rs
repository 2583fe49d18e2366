//! Display sinks that receive rendered markup

use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;

/// Append-only output surface for markup.
///
/// Every call is one display unit; the order of calls is the order the
/// front end shows them in.
pub trait DisplaySink {
    fn display_html(&mut self, markup: &str) -> Result<()>;
}

/// Writes raw markup to any writer, one unit per line
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        WriterSink::new(io::stdout())
    }
}

impl<W: Write> DisplaySink for WriterSink<W> {
    fn display_html(&mut self, markup: &str) -> Result<()> {
        writeln!(self.writer, "{}", markup)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct MimeBundle<'a> {
    #[serde(rename = "text/html")]
    html: &'a str,
}

/// Writes each unit as a `{"text/html": ...}` JSON line for notebook front ends
pub struct MimeBundleSink<W: Write> {
    writer: W,
}

impl<W: Write> MimeBundleSink<W> {
    pub fn new(writer: W) -> Self {
        MimeBundleSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for MimeBundleSink<W> {
    fn display_html(&mut self, markup: &str) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &MimeBundle { html: markup })?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every displayed unit in memory
#[derive(Debug, Default)]
pub struct BufferSink {
    units: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        BufferSink::default()
    }

    pub fn units(&self) -> &[String] {
        &self.units
    }

    pub fn last(&self) -> Option<&str> {
        self.units.last().map(String::as_str)
    }
}

impl DisplaySink for BufferSink {
    fn display_html(&mut self, markup: &str) -> Result<()> {
        self.units.push(markup.to_string());
        Ok(())
    }
}
