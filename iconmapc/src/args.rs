//! Command line arguments

use std::path::PathBuf;

use clap::{Args as CommandArgs, Parser, Subcommand};
use iconcat::IconSet;

/// What mapping list can we build for you today?
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate a mapping list covering every icon of a destination set
    Generate(GenerateArgs),
    /// Map every icon of a set onto itself
    Identity(IdentityArgs),
    /// Merge one mapping list into another
    Merge(MergeArgs),
    /// Rebuild and validate the composite symbol mapping list
    Reconcile(ReconcileArgs),
}

#[derive(CommandArgs, Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    /// The icon set every mapping's destination comes from
    #[arg(short, long)]
    pub destination_set: IconSet,

    /// Only pre-fill sources from this set
    #[arg(short, long)]
    #[clap(default_value = "Undefined")]
    pub source_set: IconSet,

    /// Existing mapping lists to pre-fill sources from, searched in order
    #[arg(short, long)]
    pub base: Vec<PathBuf>,

    /// Where to write the new list
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(CommandArgs, Debug, Clone, PartialEq)]
pub struct IdentityArgs {
    /// The icon set to map onto itself
    #[arg(short, long)]
    pub icon_set: IconSet,

    /// Where to write the new list
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(CommandArgs, Debug, Clone, PartialEq)]
pub struct MergeArgs {
    /// The list whose entries win
    #[arg(short, long)]
    pub incoming: PathBuf,

    /// The list merged into
    #[arg(short, long)]
    pub dest: PathBuf,

    /// Where to write the merged list
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(CommandArgs, Debug, Clone, PartialEq)]
pub struct ReconcileArgs {
    /// The raw composite symbol mapping list
    #[arg(short, long)]
    pub composite: PathBuf,

    /// Redirect list for stale intermediate-set sources
    #[arg(long)]
    pub redirects: Option<PathBuf>,

    /// Translation list for very old symbol code points
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Skip probing the bundled catalogs for glyph sources
    #[arg(long)]
    pub no_probe: bool,

    /// Where to write the rebuilt list
    #[arg(short, long)]
    pub output: PathBuf,
}
