use std::env as std_env;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::env::{load_env_from, print_env_notice};

/// Load an environment file found upward from `dir` (default: current directory).
///
/// Returns whether the load succeeded; the notice is printed unless `quiet`.
pub fn run(dir: Option<&Path>, file_name: &str, quiet: bool) -> Result<bool> {
    let start = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std_env::current_dir().context("Cannot resolve current directory")?,
    };
    let success = load_env_from(&start, file_name);
    if !quiet {
        print_env_notice(success);
    }
    Ok(success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_reports_success_and_failure() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(".nbglow-cmd-env"), "NBGLOW_TEST_CMD=1\n").unwrap();

        assert!(run(Some(temp_dir.path()), ".nbglow-cmd-env", true).unwrap());
        assert!(!run(Some(temp_dir.path()), ".nbglow-cmd-missing", true).unwrap());

        unsafe {
            std_env::remove_var("NBGLOW_TEST_CMD");
        }
    }
}
