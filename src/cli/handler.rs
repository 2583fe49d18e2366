use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::ui::{self, OutputFormat};
use crate::commands::{cards, env, print, styles};
use crate::infrastructure::color::{Color, PrintOptions, TextStyle};
use crate::infrastructure::constants::ENV_FILE_NAME;

/// Notebook presentation helpers
#[derive(Debug, Parser)]
#[command(name = "nbglow", version, about)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Markup output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub cmd: Command,
}

/// Available commands for the CLI
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a JSON array of {url, content} objects as collapsible cards
    Cards {
        /// Input file; reads stdin when absent or "-"
        file: Option<PathBuf>,
        /// Include the card stylesheet and toggle script
        #[arg(long)]
        standalone: bool,
    },
    /// Emit the notebook stylesheet, optionally with custom CSS
    Styles {
        /// Skip the base stylesheet
        #[arg(long)]
        no_base: bool,
        /// Custom CSS, with or without a <style> wrapper
        #[arg(long, conflicts_with = "custom_file")]
        custom: Option<String>,
        /// Read custom CSS from a file
        #[arg(long)]
        custom_file: Option<PathBuf>,
    },
    /// Print text with terminal colors and styling
    Print {
        text: String,
        #[arg(long)]
        fg: Option<Color>,
        #[arg(long)]
        bg: Option<Color>,
        #[arg(long)]
        bold: bool,
        #[arg(long)]
        dim: bool,
        #[arg(long)]
        underline: bool,
        /// Text printed before the main text in the same colors
        #[arg(long, default_value = "")]
        prefix: String,
        #[arg(long)]
        bold_prefix: bool,
        #[arg(long)]
        dim_prefix: bool,
        #[arg(long)]
        underline_prefix: bool,
    },
    /// Load an environment file found by searching upward
    Env {
        /// Directory to start the search from
        #[arg(long)]
        dir: Option<PathBuf>,
        /// File name to look for
        #[arg(long, default_value = ENV_FILE_NAME)]
        file: String,
        /// Suppress the success/failure notice
        #[arg(short, long)]
        quiet: bool,
    },
}

impl Command {
    fn print_options(&self) -> Option<PrintOptions> {
        let Command::Print {
            fg,
            bg,
            bold,
            dim,
            underline,
            prefix,
            bold_prefix,
            dim_prefix,
            underline_prefix,
            ..
        } = self
        else {
            return None;
        };
        Some(PrintOptions {
            style: TextStyle {
                fg: *fg,
                bg: *bg,
                bold: *bold,
                dim: *dim,
                underline: *underline,
            },
            prefix_text: prefix.clone(),
            bold_prefix: *bold_prefix,
            dim_prefix: *dim_prefix,
            underline_prefix: *underline_prefix,
            return_formatted: false,
        })
    }
}

/// Execute the parsed command; returns false when the command reports failure
pub fn execute_command(cli: &Cli) -> anyhow::Result<bool> {
    let mut sink = ui::make_sink(cli.format);
    match &cli.cmd {
        Command::Cards { file, standalone } => {
            cards::run(file.as_deref(), *standalone, sink.as_mut())?;
        }
        Command::Styles {
            no_base,
            custom,
            custom_file,
        } => styles::run(!no_base, custom.as_deref(), custom_file.as_deref(), sink.as_mut())?,
        Command::Print { text, .. } => {
            if let Some(options) = cli.cmd.print_options() {
                print::run(text, &options);
            }
        }
        Command::Env { dir, file, quiet } => return env::run(dir.as_deref(), file, *quiet),
    }
    Ok(true)
}

/// Parse command line arguments and execute the corresponding command
pub fn parse_and_execute() {
    let cli = Cli::parse();
    ui::init_logging(cli.verbose);
    match execute_command(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => crate::error::exit_with_error(&format!("{err:#}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("nbglow").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_cards_defaults() {
        let cli = parse(&["cards"]);
        assert!(!cli.verbose);
        assert_eq!(cli.format, OutputFormat::Html);
        assert!(matches!(
            cli.cmd,
            Command::Cards {
                file: None,
                standalone: false
            }
        ));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = parse(&["cards", "results.json", "--standalone", "-v", "--format", "mime"]);
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Mime);
        match cli.cmd {
            Command::Cards { file, standalone } => {
                assert_eq!(file.unwrap(), PathBuf::from("results.json"));
                assert!(standalone);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_print_options() {
        let cli = parse(&[
            "print", "hello", "--fg", "red", "--bg", "White", "--dim", "--prefix", "> ", "--bold-prefix",
        ]);
        let options = cli.cmd.print_options().unwrap();
        assert_eq!(options.style.fg, Some(Color::Red));
        assert_eq!(options.style.bg, Some(Color::White));
        assert!(options.style.dim);
        assert!(!options.style.bold);
        assert_eq!(options.prefix_text, "> ");
        assert!(options.bold_prefix);
    }

    #[test]
    fn test_parse_rejects_unknown_color() {
        let result = Cli::try_parse_from(["nbglow", "print", "x", "--fg", "purple"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_styles_conflict() {
        let result = Cli::try_parse_from(["nbglow", "styles", "--custom", "a", "--custom-file", "b.css"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_env_defaults() {
        let cli = parse(&["env"]);
        match cli.cmd {
            Command::Env { dir, file, quiet } => {
                assert!(dir.is_none());
                assert_eq!(file, ".env");
                assert!(!quiet);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_print_options_only_for_print() {
        assert!(parse(&["env"]).cmd.print_options().is_none());
    }
}
