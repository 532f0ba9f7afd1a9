// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod actions;
mod cli;
mod config;
mod github;
mod junit;
mod markdown;
mod report;
mod table;
mod types;
mod ui;

use github::{COMMENT_MARK, UpsertComment};
use junit::JUnitXmlReader;
use log::{debug, info};
use markdown::{RunContext, make_markdown_report};
use report::ReporterFactory;
use table::TableSetFactory;
use types::{GitHubContext, Outcome};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Any failure aborts before a partial report is posted anywhere
    if let Err(e) = run(&args) {
        ui::print_error(&e);
        std::process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> Result<(), String> {
    let groups = config::load_groups(args)?;
    let (owner, repo) = args.owner_repo()?;
    let sha = args.sha.clone().unwrap_or_default();
    let pull_number = args.pull_number()?;

    ui::status("making the junit report");
    let context = GitHubContext::new(owner.as_str(), repo.as_str(), sha.as_str());
    let factory = TableSetFactory::new(ReporterFactory::new(JUnitXmlReader::new()));
    let tables = factory.multi(&context, &groups)?;

    let run = RunContext {
        owner,
        repo,
        sha,
        pull_number,
        run_id: args.run_id.unwrap_or_default(),
        actor: args.actor.clone().unwrap_or_default(),
    };
    let result = tables.as_ref().map(|t| t.result).unwrap_or(Outcome::Passed);
    let body = make_markdown_report(
        &run,
        result,
        &tables.as_ref().map(|t| t.summary.to_string()).unwrap_or_default(),
        &tables.as_ref().map(|t| t.failures.to_string()).unwrap_or_default(),
    );

    if let Some(t) = &tables {
        debug!(
            "summary: {} module row(s) x {} column(s), {} failure row(s)",
            t.summary.rows(),
            t.summary.columns(),
            t.failures.rows()
        );
        t.annotations.iter().for_each(|a| ui::annotation(a));
    }

    if let Some(pull_number) = run.pull_number
        && let Some(token) = args.comment_token()
    {
        ui::status(&format!("upserting comment matching {}", COMMENT_MARK));
        let client = github::Client::new(github::RestApi::from_env(token));
        let outcome = client.upsert_comment(&UpsertComment {
            owner: &run.owner,
            repo: &run.repo,
            pull_number,
            mark: COMMENT_MARK,
            body: &body,
        })?;
        if outcome.updated {
            ui::status(&format!("updated comment: {}", outcome.id));
        } else {
            ui::status(&format!("created comment: {}", outcome.id));
        }
    } else {
        debug!("not commenting: pull request {:?}, token present: {}", run.pull_number, args.comment_token().is_some());
    }

    if let Some(path) = &args.step_summary {
        ui::status("posting summary to the summary page");
        actions::append_step_summary(path, &body)?;
    }

    if let Some(path) = &args.output {
        ui::status("setting output");
        actions::set_output(path, "body", &body)?;
    }

    if let Some(path) = &args.json_report {
        report::export_json_report(path, &run, tables.as_ref(), &body)?;
        ui::status(&format!("JSON report saved to: {}", path.display()));
    }

    info!("result: {}", result.as_str());
    Ok(())
}
