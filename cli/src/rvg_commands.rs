use clap::{Args, Parser, Subcommand};
use definitions::{GROUP_COLUMN, MEMBERSHIP_COLUMN, PAIR_COLUMN};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "rvg")]
#[clap(version = "0.1")]
#[clap(about = "Label expression-outlier pairs by their rare-variant groups.", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace the pairing column of an annotation file by group IDs.
    Group(GroupArgs),
    /// Summarize the groups of an annotation file already labelled by `group`.
    Stats(StatsArgs),
    /// Gather the outlier values of each group into one row.
    Outliers(OutliersArgs),
    /// Run the jobs listed in a TOML profile.
    Pipeline(PipelineArgs),
}

impl Commands {
    pub fn common(&self) -> Option<&CommonArgs> {
        match self {
            Commands::Group(args) => Some(&args.common),
            Commands::Stats(args) => Some(&args.common),
            Commands::Outliers(args) => Some(&args.common),
            Commands::Pipeline(_) => None,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Debug mode. Repeat for more messages.
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Number of threads.
    #[clap(short, long, default_value_t = 1)]
    pub threads: usize,
}

#[derive(Args, Debug, Clone)]
pub struct GroupArgs {
    /// Input annotation file (TSV with a header). `-` for stdin.
    #[clap(short, long, value_name = "TSV")]
    pub input: PathBuf,
    /// Output file. `-` for stdout.
    #[clap(short, long, value_name = "TSV")]
    pub output: PathBuf,
    /// Column holding the pairing keys.
    #[clap(long, default_value = PAIR_COLUMN)]
    pub pair_column: String,
    /// Column to write the group IDs into.
    #[clap(long, default_value = GROUP_COLUMN)]
    pub group_column: String,
    /// Also write whether each row has a partner.
    #[clap(long, num_args = 0..=1, default_missing_value = MEMBERSHIP_COLUMN)]
    pub membership_column: Option<String>,
    /// Keep the pairing column in the output.
    #[clap(long)]
    pub keep_pair_column: bool,
    /// Treat empty pairing cells as `NA`.
    #[clap(long)]
    pub empty_as_missing: bool,
    /// Write the group summary as JSON to this file.
    #[clap(long, value_name = "JSON")]
    pub stats: Option<PathBuf>,
    #[clap(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Grouped annotation file. `-` for stdin.
    #[clap(short, long, value_name = "TSV")]
    pub input: PathBuf,
    #[clap(long, default_value = GROUP_COLUMN)]
    pub group_column: String,
    /// Print JSON instead of the text report.
    #[clap(long)]
    pub json: bool,
    #[clap(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct OutliersArgs {
    /// Grouped annotation file. `-` for stdin.
    #[clap(short, long, value_name = "TSV")]
    pub input: PathBuf,
    /// Output file. `-` for stdout.
    #[clap(short, long, value_name = "TSV")]
    pub output: PathBuf,
    /// Outlier columns, comma separated.
    #[clap(short, long, value_delimiter = ',', required = true)]
    pub columns: Vec<String>,
    #[clap(long, default_value = GROUP_COLUMN)]
    pub group_column: String,
    #[clap(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// TOML profile.
    pub profile: PathBuf,
}
