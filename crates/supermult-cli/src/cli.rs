use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "P. Valencia",
    version,
    about = "supermult CLI - Decompose SU(4) irreducible representations into nuclear spin-isospin (S, T) supermultiplets, starting from SU(4) Young diagrams or sd/pf shell-model configurations.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Branch a custom SU(4) irrep given by its Young-diagram rows.
    Su4(Su4Args),
    /// Branch an sd-shell configuration given by its U(6) Young diagram.
    Sd(SdArgs),
    /// Branch a pf-shell configuration given by its U(10) Young diagram.
    Pf(PfArgs),
    /// Export tables for several SU(4) irreps in one pass.
    Batch(BatchArgs),
}

/// Arguments for the `su4` subcommand.
#[derive(Args, Debug)]
pub struct Su4Args {
    /// Row lengths f1 f2 f3 [f4] of the SU(4) Young diagram (f4 defaults to 0).
    #[arg(required = true, num_args(3..=4), value_name = "ROW")]
    pub rows: Vec<i64>,

    /// Write CSV and LaTeX tables for the result into this directory.
    #[arg(short = 'e', long, value_name = "DIR")]
    pub export: Option<PathBuf>,
}

/// Arguments for the `sd` subcommand.
#[derive(Args, Debug)]
pub struct SdArgs {
    /// The six row lengths of the U(6) Young diagram.
    #[arg(required = true, num_args(6), value_name = "ROW")]
    pub rows: Vec<i64>,

    /// Write CSV and LaTeX tables for the result into this directory.
    #[arg(short = 'e', long, value_name = "DIR")]
    pub export: Option<PathBuf>,
}

/// Arguments for the `pf` subcommand.
#[derive(Args, Debug)]
pub struct PfArgs {
    /// The ten row lengths of the U(10) Young diagram.
    #[arg(required = true, num_args(10), value_name = "ROW")]
    pub rows: Vec<i64>,

    /// Write CSV and LaTeX tables for the result into this directory.
    #[arg(short = 'e', long, value_name = "DIR")]
    pub export: Option<PathBuf>,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Comma-separated Young-diagram rows, one argument per irrep,
    /// e.g. `2,1,1,0 1,1,0,0`.
    #[arg(required = true, value_name = "IRREP")]
    pub irreps: Vec<String>,

    /// Directory receiving the exported tables.
    #[arg(short = 'e', long, value_name = "DIR", default_value = ".")]
    pub export: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn su4_accepts_three_or_four_rows() {
        let cli = Cli::try_parse_from(["supermult", "su4", "8", "5", "5"]).unwrap();
        match cli.command {
            Commands::Su4(args) => assert_eq!(args.rows, vec![8, 5, 5]),
            _ => panic!("expected su4 subcommand"),
        }

        assert!(Cli::try_parse_from(["supermult", "su4", "8", "5"]).is_err());
        assert!(Cli::try_parse_from(["supermult", "su4", "8", "5", "5", "0", "0"]).is_err());
    }

    #[test]
    fn shell_commands_require_exact_diagram_lengths() {
        assert!(Cli::try_parse_from(["supermult", "sd", "2", "1", "1", "0", "0", "0"]).is_ok());
        assert!(Cli::try_parse_from(["supermult", "sd", "2", "1", "1"]).is_err());

        let pf = [
            "supermult", "pf", "2", "2", "1", "1", "0", "0", "0", "0", "0", "0",
        ];
        assert!(Cli::try_parse_from(pf).is_ok());
    }

    #[test]
    fn batch_takes_one_argument_per_irrep() {
        let cli =
            Cli::try_parse_from(["supermult", "batch", "2,1,1,0", "1,1,0,0", "-e", "out"]).unwrap();
        match cli.command {
            Commands::Batch(args) => {
                assert_eq!(args.irreps, vec!["2,1,1,0", "1,1,0,0"]);
                assert_eq!(args.export, PathBuf::from("out"));
            }
            _ => panic!("expected batch subcommand"),
        }

        assert!(Cli::try_parse_from(["supermult", "batch"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["supermult", "-q", "-v", "su4", "1", "0", "0"]);
        assert!(result.is_err());
    }
}
