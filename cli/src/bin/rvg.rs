use clap::Parser;
use definitions::*;
use rv_groups::*;
use rvg_cli::pipeline::{run_job, run_outliers, run_pipeline, JobConfig, PipelineConfig};
use rvg_cli::rvg_commands::*;
use rvg_cli::{open_input, with_path};
use std::io::Write;
#[macro_use]
extern crate log;

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    if let Some(common) = cli.command.common() {
        let level = rvg_cli::log_level(common.verbose as usize);
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
        rvg_cli::set_threads(common.threads);
    }
    match &cli.command {
        Commands::Group(args) => group(args),
        Commands::Stats(args) => stats(args),
        Commands::Outliers(args) => outliers(args),
        Commands::Pipeline(args) => {
            let config = PipelineConfig::from_path(&args.profile)?;
            run_pipeline(&config)
        }
    }
}

fn group(args: &GroupArgs) -> std::io::Result<()> {
    debug!("START\tGroup");
    let missing_policy = if args.empty_as_missing {
        MissingPolicy::EmptyAsMissing
    } else {
        MissingPolicy::Textual
    };
    let job = JobConfig::new(args.input.clone(), args.output.clone())
        .with_columns(&args.pair_column, &args.group_column)
        .with_membership_column(args.membership_column.clone())
        .keep_pair_column(args.keep_pair_column)
        .with_missing_policy(missing_policy)
        .with_stats(args.stats.clone());
    run_job(&job).map(|_| ())
}

fn stats(args: &StatsArgs) -> std::io::Result<()> {
    debug!("START\tStats");
    let reader = open_input(&args.input)?;
    let table = AnnotationTable::entry(reader).map_err(|why| with_path(&args.input, why))?;
    let group_ids = table
        .group_ids(&args.group_column)
        .map_err(|why| with_path(&args.input, why))?;
    let stdout = std::io::stdout();
    let mut wtr = std::io::BufWriter::new(stdout.lock());
    if args.json {
        serde_json::to_writer_pretty(&mut wtr, &summarize(&group_ids))?;
        writeln!(wtr)?;
    } else {
        group_ids.stats(&mut wtr)?;
    }
    wtr.flush()
}

fn outliers(args: &OutliersArgs) -> std::io::Result<()> {
    debug!("START\tOutliers");
    run_outliers(&args.input, &args.output, &args.group_column, args.columns.as_slice())
}
