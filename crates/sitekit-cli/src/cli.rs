use clap::{Args, Parser, Subcommand};
use sitekit::core::forcefield::energy::DEFAULT_BOND_ORDER;
use sitekit::core::topology::DEFAULT_COVALENT_FACTOR;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "sitekit",
    version,
    about = "sitekit - a molecular-geometry toolkit: covalent bond-graph inference, generic force-field bond scoring, and grid-based pocket/water carving.",
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
    /// Infer the covalent bond graph of a structure from its coordinates.
    Bonds(BondsArgs),
    /// Score the bond graph against the generic force-field stretch model.
    Energy(EnergyArgs),
    /// Carve pocket and water point sets out of a lattice around a structure.
    Pocket(PocketArgs),
}

/// Arguments for the `bonds` subcommand.
#[derive(Args, Debug)]
pub struct BondsArgs {
    /// Path to the input coordinate file (XYZ format).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Scale applied to the summed covalent radii before thresholding.
    #[arg(long, value_name = "FLOAT", default_value_t = DEFAULT_COVALENT_FACTOR)]
    pub covalent_factor: f64,
}

/// Arguments for the `energy` subcommand.
#[derive(Args, Debug)]
pub struct EnergyArgs {
    /// Path to the input coordinate file (XYZ format).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Scale applied to the summed covalent radii before thresholding.
    #[arg(long, value_name = "FLOAT", default_value_t = DEFAULT_COVALENT_FACTOR)]
    pub covalent_factor: f64,

    /// Global bond order applied to every bond.
    #[arg(long, value_name = "FLOAT", default_value_t = DEFAULT_BOND_ORDER)]
    pub bond_order: f64,

    /// Override the embedded force-field parameter table
    /// (.par whitespace table or .toml).
    #[arg(long, value_name = "PATH")]
    pub params: Option<PathBuf>,
}

/// Arguments for the `pocket` subcommand.
#[derive(Args, Debug)]
pub struct PocketArgs {
    /// Path to the input coordinate file (XYZ format).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to the accessible-surface point cloud ("pas" dots).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub surface: PathBuf,

    /// Path to a TOML file of carving parameters.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory to write pocket.dots and water.dots into.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Override the solvation probe radius from the config file.
    #[arg(long, value_name = "FLOAT")]
    pub probe_radius: Option<f64>,

    /// Override the accessible-surface carve radius from the config file.
    #[arg(long, value_name = "FLOAT")]
    pub surface_radius: Option<f64>,
}
