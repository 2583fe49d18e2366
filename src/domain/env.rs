use std::env as std_env;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::infrastructure::color::{Color, PrintOptions, TextStyle, cprint};
use crate::infrastructure::constants::{ENV_FAILED_MESSAGE, ENV_FILE_NAME, ENV_LOADED_MESSAGE};

/// Outcome of loading one environment file
#[derive(Debug, Clone)]
pub struct EnvLoad {
    pub path: PathBuf,
    /// Every pair in the file, in file order
    pub vars: Vec<(String, String)>,
    /// Keys written to the process environment; keys already set are skipped
    pub applied: Vec<String>,
}

impl EnvLoad {
    pub fn is_success(&self) -> bool {
        !self.vars.is_empty()
    }
}

/// Search `start` and its ancestors for `file_name`.
///
/// A relative `start` is resolved against the current directory first, so the
/// search continues above it.
pub fn find_env_file(start: &Path, file_name: &str) -> Option<PathBuf> {
    let start = std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf());
    start
        .ancestors()
        .map(|dir| dir.join(file_name))
        .find(|candidate| candidate.is_file())
}

/// Parse an environment file into ordered key-value pairs without touching the process
pub fn read_env_file(path: &Path) -> Result<Vec<(String, String)>> {
    let mut vars = Vec::new();
    for item in dotenv::from_path_iter(path)? {
        vars.push(item?);
    }
    Ok(vars)
}

/// Write pairs into the process environment, keeping variables that already exist
pub fn apply_env_vars(vars: &[(String, String)]) -> Vec<String> {
    let mut applied = Vec::new();
    for (key, value) in vars {
        if std_env::var_os(key).is_some() {
            debug!(key = %key, "keeping existing environment variable");
            continue;
        }
        // Loading runs from a single interactive context, before other threads read the environment.
        unsafe {
            std_env::set_var(key, value);
        }
        applied.push(key.clone());
    }
    applied
}

/// Find, parse and apply an environment file starting at `start`.
///
/// Returns `None` when no file is found or it cannot be parsed.
pub fn load_env_file_from(start: &Path, file_name: &str) -> Option<EnvLoad> {
    let Some(path) = find_env_file(start, file_name) else {
        warn!(start = %start.display(), file_name, "no environment file found");
        return None;
    };

    let vars = match read_env_file(&path) {
        Ok(vars) => vars,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to parse environment file");
            return None;
        }
    };

    let applied = apply_env_vars(&vars);
    info!(
        path = %path.display(),
        parsed = vars.len(),
        applied = applied.len(),
        "loaded environment file"
    );
    Some(EnvLoad {
        path,
        vars,
        applied,
    })
}

/// Load `file_name` found upward from `start`; true when it held at least one variable
pub fn load_env_from(start: &Path, file_name: &str) -> bool {
    load_env_file_from(start, file_name).is_some_and(|load| load.is_success())
}

/// Load `.env` found upward from the current directory
pub fn load_env() -> bool {
    match std_env::current_dir() {
        Ok(cwd) => load_env_from(&cwd, ENV_FILE_NAME),
        Err(err) => {
            warn!(error = %err, "cannot resolve current directory");
            false
        }
    }
}

/// Message and bold green/red styling for an environment load notice
fn env_notice(success: bool) -> (&'static str, PrintOptions) {
    let (message, color) = if success {
        (ENV_LOADED_MESSAGE, Color::Green)
    } else {
        (ENV_FAILED_MESSAGE, Color::Red)
    };
    (message, PrintOptions::new(TextStyle::default().fg(color).bold()))
}

pub fn print_env_notice(success: bool) {
    let (message, options) = env_notice(success);
    cprint(message, &options);
}

/// Load `.env` from the current directory and report the outcome
pub fn setup_environment(verbose: bool) -> bool {
    let success = load_env();
    if verbose {
        print_env_notice(success);
    }
    success
}
