use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "junit-monorepo-go")]
#[command(about = "Summarize gotestsum and golangci-lint JUnit reports of a Go monorepo on the pull request")]
#[command(version)]
pub struct CliArgs {
    /// Inline YAML config: a mapping of group name to {title, type, directories, fileName}
    #[arg(long, value_name = "YAML", conflicts_with = "config_file")]
    pub config: Option<String>,

    /// Read the YAML config from a file instead
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Token used to create or update the pull request comment
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Repository as owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY", value_name = "OWNER/REPO")]
    pub repository: Option<String>,

    /// Commit the reports were produced for
    #[arg(long, env = "GITHUB_SHA")]
    pub sha: Option<String>,

    /// Pull request to comment on
    /// Defaults to pull_request.number of the triggering event payload, if any
    #[arg(long, value_name = "NUMBER")]
    pub pull_request_number: Option<u64>,

    /// Event payload consulted when --pull-request-number is absent
    #[arg(long, env = "GITHUB_EVENT_PATH", value_name = "PATH", hide = true)]
    pub event_path: Option<PathBuf>,

    /// Workflow run linked from the report header
    #[arg(long, env = "GITHUB_RUN_ID")]
    pub run_id: Option<u64>,

    /// User credited in the report footer
    #[arg(long, env = "GITHUB_ACTOR")]
    pub actor: Option<String>,

    /// Append the report to this job summary file
    #[arg(long, env = "GITHUB_STEP_SUMMARY", value_name = "PATH")]
    pub step_summary: Option<PathBuf>,

    /// Write the report as the `body` step output to this file
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write a machine-readable JSON report here
    #[arg(long, value_name = "PATH")]
    pub json_report: Option<PathBuf>,

    /// Never touch the pull request, even when a number and token are known
    #[arg(long)]
    pub no_comment: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.config.is_none() && self.config_file.is_none() {
            return Err("Must specify one of: --config or --config-file".to_string());
        }
        self.owner_repo()?;
        if self.sha.as_deref().is_none_or(str::is_empty) {
            return Err("--sha (or GITHUB_SHA) is required".to_string());
        }
        if self.run_id.is_none() {
            return Err("--run-id (or GITHUB_RUN_ID) is required".to_string());
        }
        if self.actor.as_deref().is_none_or(str::is_empty) {
            return Err("--actor (or GITHUB_ACTOR) is required".to_string());
        }
        Ok(())
    }

    /// Split `--repository` into (owner, repo)
    pub fn owner_repo(&self) -> Result<(String, String), String> {
        let raw = self.repository.as_deref().ok_or("--repository (or GITHUB_REPOSITORY) is required")?;
        match raw.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok((owner.to_string(), repo.to_string()))
            }
            _ => Err(format!("--repository must look like owner/repo, got {:?}", raw)),
        }
    }

    /// Explicit number first, then the event payload
    pub fn pull_number(&self) -> Result<Option<u64>, String> {
        if let Some(number) = self.pull_request_number {
            return Ok(Some(number));
        }
        let Some(path) = &self.event_path else {
            return Ok(None);
        };

        let raw = fs::read_to_string(path).map_err(|e| format!("Failed to read event payload {}: {}", path.display(), e))?;
        let payload: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| format!("Failed to parse event payload {}: {}", path.display(), e))?;
        Ok(payload.pointer("/pull_request/number").and_then(serde_json::Value::as_u64))
    }

    /// Token to comment with, unless commenting is disabled
    pub fn comment_token(&self) -> Option<&str> {
        if self.no_comment {
            return None;
        }
        self.github_token.as_deref().filter(|t| !t.is_empty())
    }
}
