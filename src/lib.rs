//! Notebook presentation helpers.
//!
//! - [`domain::cards`]: collapsible HTML cards for search results
//! - [`domain::styles`]: stylesheet injection
//! - [`infrastructure::color`]: ANSI-styled console text
//! - [`domain::env`]: `.env` discovery and loading

pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::cards::{display_search_result_values, display_search_results, render_cards};
pub use domain::env::{load_env, setup_environment};
pub use domain::search::SearchResult;
pub use domain::styles::apply_custom_styles;
pub use error::{Error, Result};
pub use infrastructure::color::{Color, PrintOptions, TextStyle, cprint, format_text, get_color};
pub use infrastructure::display::{BufferSink, DisplaySink, MimeBundleSink, WriterSink};
