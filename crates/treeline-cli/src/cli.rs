/// Command-line arguments.
use clap::Parser;
use std::path::PathBuf;

/// Scan a directory into a tree listing with aggregate statistics.
#[derive(Debug, Parser)]
#[command(name = "treeline", version, about)]
pub struct Cli {
    /// Directory to scan.
    pub path: PathBuf,

    /// Write the report to this file instead of stdout.
    #[arg(short, long, value_name = "FILE", conflicts_with = "save")]
    pub output: Option<PathBuf>,

    /// Write the report to a timestamped file in the current directory.
    #[arg(long)]
    pub save: bool,

    /// Print scan statistics as JSON to stdout after the report.
    #[arg(long)]
    pub json: bool,

    /// Suppress the progress spinner.
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_bare_path() {
        let cli = Cli::try_parse_from(["treeline", "/srv/data"]).expect("parse");
        assert_eq!(cli.path, PathBuf::from("/srv/data"));
        assert!(cli.output.is_none());
        assert!(!cli.save);
        assert!(!cli.json);
        assert!(!cli.quiet);
    }

    #[test]
    fn parses_output_and_flags() {
        let cli = Cli::try_parse_from(["treeline", ".", "-o", "out.txt", "--json", "-q"])
            .expect("parse");
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn output_and_save_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["treeline", ".", "-o", "x.txt", "--save"]).is_err());
    }

    #[test]
    fn a_path_is_required() {
        assert!(Cli::try_parse_from(["treeline"]).is_err());
    }
}
