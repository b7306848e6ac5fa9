//! Arguments shared by commands.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use prcomment_config::Config;
use prcomment_models::{PullRequestHandle, Report, RepositoryPath};

use crate::{context::resolve_pull_request_handle, Result};

#[derive(Debug, Args)]
pub(crate) struct TargetArgs {
    /// Repository path (e.g. 'MyOrganization/my-project'), defaults to GITHUB_REPOSITORY
    #[arg(long, short)]
    repository: Option<RepositoryPath>,

    /// Pull request number, defaults to the number found in the GITHUB_EVENT_PATH payload
    #[arg(long, short)]
    number: Option<u64>,
}

impl TargetArgs {
    pub fn resolve(self, config: &Config) -> Result<PullRequestHandle> {
        Ok(resolve_pull_request_handle(
            &config.actions,
            self.repository,
            self.number,
        )?)
    }
}

#[derive(Debug, Args)]
pub(crate) struct ReportArgs {
    /// Report title, defaults to PRCOMMENT_REPORT_TITLE or 'title'
    #[arg(long, short)]
    title: Option<String>,

    /// Report summary, defaults to PRCOMMENT_REPORT_SUMMARY or 'summary'
    #[arg(long, short)]
    summary: Option<String>,

    /// Read the report summary from a file
    #[arg(long, conflicts_with = "summary")]
    summary_file: Option<PathBuf>,
}

impl ReportArgs {
    pub fn resolve(self, config: &Config) -> Result<Report> {
        let title = self.title.unwrap_or_else(|| config.report.title.clone());
        let summary = match (self.summary, self.summary_file) {
            (Some(summary), _) => summary,
            (None, Some(path)) => std::fs::read_to_string(&path)
                .with_context(|| format!("Could not read summary file {}", path.display()))?,
            (None, None) => config.report.summary.clone(),
        };

        Ok(Report::new(title, summary))
    }
}
