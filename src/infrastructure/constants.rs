//! Application-wide constants

// ANSI escape sequences
pub const ANSI_RESET: &str = "\x1b[0m";
pub const ANSI_BRIGHT: &str = "\x1b[1m";
pub const ANSI_DIM: &str = "\x1b[2m";
pub const ANSI_UNDERLINE: &str = "\x1b[4m";

/// Color names accepted by `get_color`, in display order
pub const VALID_COLORS: [&str; 7] = ["red", "green", "yellow", "blue", "magenta", "cyan", "white"];

// Result card element ids
pub const CONTENT_ID_PREFIX: &str = "result-content";
pub const ICON_ID_PREFIX: &str = "icon";
pub const TOGGLE_ICON: &str = "&#9654;";

// Environment loading
pub const ENV_FILE_NAME: &str = ".env";
pub const ENV_LOADED_MESSAGE: &str = "\n✅ Environment Variables Loaded Successfully\n";
pub const ENV_FAILED_MESSAGE: &str = "\n❌ Environment Variables Failed to Load\n";

// Standard input marker for file arguments
pub const STDIN_MARKER: &str = "-";
