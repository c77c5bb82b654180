//! Pipelines -- label many annotation files in one run.
//!
//! Each job is independent: it reads one table, assigns groups, and writes one table.
//! Jobs are run in parallel.
use crate::{create_output, open_input, with_path};
use definitions::*;
use log::*;
use rayon::prelude::*;
use rv_groups::*;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// The configuration of the pipeline, usually read from a TOML profile.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PipelineConfig {
    #[serde(default)]
    verbose: usize,
    #[serde(default = "default_threads")]
    threads: usize,
    jobs: Vec<JobConfig>,
}

fn default_threads() -> usize {
    1
}

impl PipelineConfig {
    pub fn from_toml(profile: &str) -> std::io::Result<Self> {
        toml::from_str(profile)
            .map_err(|why| std::io::Error::new(std::io::ErrorKind::InvalidData, why))
    }
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let profile = std::fs::read_to_string(path).map_err(|why| with_path(path, why))?;
        Self::from_toml(&profile).map_err(|why| with_path(path, why))
    }
    pub fn jobs(&self) -> &[JobConfig] {
        &self.jobs
    }
}

/// One annotation file to be labelled.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JobConfig {
    input: PathBuf,
    output: PathBuf,
    #[serde(default = "default_pair_column")]
    pair_column: String,
    #[serde(default = "default_group_column")]
    group_column: String,
    #[serde(default)]
    membership_column: Option<String>,
    #[serde(default)]
    keep_pair_column: bool,
    #[serde(default)]
    missing_policy: MissingPolicy,
    /// If set, the summary of the groups is written here as JSON.
    #[serde(default)]
    stats: Option<PathBuf>,
}

fn default_pair_column() -> String {
    PAIR_COLUMN.to_string()
}

fn default_group_column() -> String {
    GROUP_COLUMN.to_string()
}

impl JobConfig {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            pair_column: default_pair_column(),
            group_column: default_group_column(),
            membership_column: None,
            keep_pair_column: false,
            missing_policy: MissingPolicy::Textual,
            stats: None,
        }
    }
    pub fn with_columns(mut self, pair_column: &str, group_column: &str) -> Self {
        self.pair_column = pair_column.to_string();
        self.group_column = group_column.to_string();
        self
    }
    pub fn with_membership_column(mut self, membership_column: Option<String>) -> Self {
        self.membership_column = membership_column;
        self
    }
    pub fn keep_pair_column(mut self, keep: bool) -> Self {
        self.keep_pair_column = keep;
        self
    }
    pub fn with_missing_policy(mut self, missing_policy: MissingPolicy) -> Self {
        self.missing_policy = missing_policy;
        self
    }
    pub fn with_stats(mut self, stats: Option<PathBuf>) -> Self {
        self.stats = stats;
        self
    }
    fn annotate_config(&self) -> AnnotateConfig {
        AnnotateConfig::new(
            &self.pair_column,
            &self.group_column,
            self.membership_column.as_deref(),
            self.keep_pair_column,
            self.missing_policy,
        )
    }
}

/// Label one file. Errors carry the path of the offending file.
pub fn run_job(job: &JobConfig) -> std::io::Result<GroupSummary> {
    debug!("START\tGroup\t{}", job.input.display());
    let reader = open_input(&job.input)?;
    let mut table = AnnotationTable::entry(reader).map_err(|why| with_path(&job.input, why))?;
    let group_ids = table
        .annotate_groups(&job.annotate_config())
        .map_err(|why| with_path(&job.input, why))?;
    let summary = summarize(&group_ids);
    info!(
        "Group\t{}\tRows\t{}\tGroups\t{}\tShared\t{}",
        job.input.display(),
        summary.rows,
        summary.groups,
        summary.shared_groups
    );
    let wtr = create_output(&job.output)?;
    table
        .extract(wtr)
        .map_err(|why| with_path(&job.output, why))?;
    if let Some(path) = job.stats.as_ref() {
        let mut wtr = create_output(path)?;
        serde_json::to_writer_pretty(&mut wtr, &summary).map_err(|why| with_path(path, why))?;
        writeln!(wtr).map_err(|why| with_path(path, why))?;
        wtr.flush().map_err(|why| with_path(path, why))?;
    }
    debug!("END\tGroup\t{}", job.output.display());
    Ok(summary)
}

/// Gather the outlier columns of each group of `input` into one row, and write the result to `output`.
pub fn run_outliers<S: AsRef<str>>(
    input: &Path,
    output: &Path,
    group_column: &str,
    columns: &[S],
) -> std::io::Result<()> {
    let reader = open_input(input)?;
    let table = AnnotationTable::entry(reader).map_err(|why| with_path(input, why))?;
    let group_ids = table
        .group_ids(group_column)
        .map_err(|why| with_path(input, why))?;
    let outliers = table
        .outlier_matrix(columns)
        .map_err(|why| with_path(input, why))?;
    let grouped = group_outliers(&group_ids, &outliers).map_err(|why| with_path(input, why))?;
    info!(
        "Outliers\t{}\tRows\t{}\tGroups\t{}",
        input.display(),
        group_ids.len(),
        grouped.nrows()
    );
    let grouped = grouped_outlier_table(group_column, columns, &grouped)?;
    let wtr = create_output(output)?;
    grouped.extract(wtr).map_err(|why| with_path(output, why))
}

pub fn run_pipeline(config: &PipelineConfig) -> std::io::Result<()> {
    let level = crate::log_level(config.verbose);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    crate::set_threads(config.threads);
    let summaries = config
        .jobs
        .par_iter()
        .map(run_job)
        .collect::<std::io::Result<Vec<_>>>()?;
    let rows: usize = summaries.iter().map(|s| s.rows).sum();
    let groups: usize = summaries.iter().map(|s| s.groups).sum();
    info!("Pipeline\tJobs\t{}\tRows\t{}\tGroups\t{}", summaries.len(), rows, groups);
    Ok(())
}
