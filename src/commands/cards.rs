use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::cards::{render_cards, render_standalone_cards};
use crate::domain::search::parse_results;
use crate::infrastructure::constants::STDIN_MARKER;
use crate::infrastructure::display::DisplaySink;

/// Read a JSON array of results from a file or stdin
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new(STDIN_MARKER) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read search results from {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read search results from stdin")?;
            Ok(buffer)
        }
    }
}

/// Render search results as cards and send them to the sink
pub fn run(input: Option<&Path>, standalone: bool, sink: &mut dyn DisplaySink) -> Result<()> {
    let json = read_input(input)?;
    render_json(&json, standalone, sink)
}

pub fn render_json(json: &str, standalone: bool, sink: &mut dyn DisplaySink) -> Result<()> {
    let results = parse_results(json).context("Invalid search results")?;
    let markup = if standalone {
        render_standalone_cards(&results)
    } else {
        render_cards(&results).markup
    };
    sink.display_html(&markup)?;
    Ok(())
}
