use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use tailbuf::ScriptOptions;

/// Apply an edit script and print the normalized tail of the buffer.
///
/// The script starts with the window size `k` and the operation count `q`,
/// followed by `q` records of a count and a one-character selector. A `0`
/// selector appends blanks, `1` truncates, anything else appends itself.
#[derive(Parser, Debug)]
#[command(name = "tailbuf", version, about, long_about)]
pub struct Cli {
    /// Script to read, or `-` for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: PathBuf,

    /// Reject anything but whitespace after the last operation
    #[arg(long)]
    pub strict: bool,

    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    pub fn script_options(&self) -> ScriptOptions {
        ScriptOptions {
            reject_trailing_input: self.strict,
        }
    }

    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }

    /// `None` leaves the level to `RUST_LOG`.
    pub fn log_level(&self) -> Option<LevelFilter> {
        match self.verbosity {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use rstest::rstest;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_stdin() {
        let cli = Cli::parse_from(["tailbuf"]);
        assert!(cli.reads_stdin());
        assert!(!cli.script_options().reject_trailing_input);
        assert_eq!(cli.log_level(), None);
    }

    #[rstest]
    #[case(&["tailbuf", "-v"], Some(LevelFilter::Info))]
    #[case(&["tailbuf", "-vv", "--strict"], Some(LevelFilter::Debug))]
    #[case(&["tailbuf", "-vvvv", "script.txt"], Some(LevelFilter::Trace))]
    fn verbosity_levels(#[case] args: &[&str], #[case] expected: Option<LevelFilter>) {
        let cli = Cli::parse_from(args);
        assert_eq!(cli.log_level(), expected);
    }

    #[test]
    fn strict_and_path() {
        let cli = Cli::parse_from(["tailbuf", "--strict", "ops.txt"]);
        assert!(!cli.reads_stdin());
        assert!(cli.script_options().reject_trailing_input);
        assert_eq!(cli.input, PathBuf::from("ops.txt"));
    }
}
