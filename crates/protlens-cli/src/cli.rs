use clap::{Args, Parser, Subcommand, ValueEnum};
use protlens::geometry::Granularity;
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "protlens - inspect macromolecular structures: summaries, spatial extent, and ligand-proximity queries over PDB coordinate files.",
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

    /// Path to an optional TOML configuration file with query defaults
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a structure: models, chains, residue and atom counts.
    Info(InfoArgs),
    /// Compute the spatial extent (largest pairwise atom distance) per model.
    Diameter(DiameterArgs),
    /// List the ligand (HETATM) residues available as contact-query targets.
    Ligands(LigandsArgs),
    /// Find polymer atoms or residues within a distance of a ligand residue.
    Contacts(ContactsArgs),
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the input coordinate file in PDB format.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Also print each chain's one-letter amino-acid sequence.
    #[arg(long)]
    pub sequence: bool,
}

/// Arguments for the `diameter` subcommand.
#[derive(Args, Debug)]
pub struct DiameterArgs {
    /// Path to the input coordinate file in PDB format.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

/// Arguments for the `ligands` subcommand.
#[derive(Args, Debug)]
pub struct LigandsArgs {
    /// Path to the input coordinate file in PDB format.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Model to list from, 1-based. Defaults to the first model.
    #[arg(short, long, value_name = "N")]
    pub model: Option<usize>,

    /// Include water residues (HOH and friends), hidden by default.
    #[arg(long)]
    pub include_water: bool,
}

/// Arguments for the `contacts` subcommand.
#[derive(Args, Debug)]
pub struct ContactsArgs {
    /// Path to the input coordinate file in PDB format.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Chain identifier of the ligand residue (e.g., A).
    #[arg(long, value_name = "CHAIN")]
    pub chain: char,

    /// Sequence identifier of the ligand residue (e.g., 154).
    #[arg(long, value_name = "SEQ")]
    pub residue: String,

    /// Distance threshold in Angstroms. Overrides the config file.
    #[arg(short, long, value_name = "ANGSTROM")]
    pub distance: Option<f64>,

    /// Report matching atoms or whole residues. Overrides the config file.
    #[arg(short, long, value_enum, value_name = "LEVEL")]
    pub granularity: Option<GranularityArg>,

    /// Model to query, 1-based. Defaults to the first model.
    #[arg(short, long, value_name = "N")]
    pub model: Option<usize>,

    /// Also write the matches to a CSV file at this path.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Granularity of contact reporting, shared by the CLI flag and the config
/// file ("atom" / "residue" in both).
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GranularityArg {
    Atom,
    Residue,
}

impl From<GranularityArg> for Granularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Atom => Granularity::Atom,
            GranularityArg::Residue => Granularity::Residue,
        }
    }
}
