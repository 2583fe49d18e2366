//! Error handling utilities

use std::process;

use thiserror::Error;

use crate::infrastructure::constants::VALID_COLORS;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid color '{name}'. Valid options are: {}.", VALID_COLORS.join(", "))]
    InvalidColor { name: String },

    #[error("search result {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("search result {index} is not an object")]
    NotAnObject { index: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("environment file error: {0}")]
    EnvFile(#[from] dotenv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Print an error message and exit with code 1
pub fn exit_with_error(message: &str) -> ! {
    eprintln!("{}", crate::infrastructure::color::red(message));
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_lists_options() {
        let err = Error::InvalidColor {
            name: "purple".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid color 'purple'. Valid options are: red, green, yellow, blue, magenta, cyan, white."
        );
    }

    #[test]
    fn test_missing_field_names_index_and_field() {
        let err = Error::MissingField {
            index: 2,
            field: "url",
        };
        assert_eq!(
            err.to_string(),
            "search result 2 is missing required field 'url'"
        );
    }
}
