use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::styles::apply_custom_styles;
use crate::infrastructure::display::DisplaySink;

/// Inject base and custom styles; inline CSS wins over a CSS file
pub fn run(
    use_base: bool,
    custom: Option<&str>,
    custom_file: Option<&Path>,
    sink: &mut dyn DisplaySink,
) -> Result<()> {
    let custom_style = match (custom, custom_file) {
        (Some(css), _) => css.to_string(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read custom styles from {}", path.display()))?,
        (None, None) => String::new(),
    };
    apply_custom_styles(sink, use_base, &custom_style)?;
    Ok(())
}
