//! Markdown body of the pull-request comment and step summary

use crate::types::Outcome;

/// Where and by whom the reported run happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub owner: String,
    pub repo: String,
    pub sha: String,
    pub pull_number: Option<u64>,
    pub run_id: u64,
    pub actor: String,
}

impl RunContext {
    fn repo_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }

    fn run_url(&self) -> String {
        format!("{}/actions/runs/{}", self.repo_url(), self.run_id)
    }

    /// Commit link, scoped to the pull request when there is one
    fn commit_url(&self) -> String {
        match self.pull_number {
            Some(number) => format!("{}/pull/{}/commits/{}", self.repo_url(), number, self.sha),
            None => format!("{}/commit/{}", self.repo_url(), self.sha),
        }
    }

    fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }
}

fn result_line(result: Outcome) -> String {
    match result {
        Outcome::Failed => "#### Result: `Failed`\u{1F645}\u{200D}\u{2642}\u{FE0F}".to_string(),
        _ => "#### Result: `Passed`\u{1F646}\u{200D}\u{2640}\u{FE0F}".to_string(),
    }
}

/// Assemble the full report.
///
/// Only `Failed` is shown as failed; every other outcome renders as passed.
/// An empty `module_table` is replaced by a placeholder line and an empty
/// `failure_table` drops the failures section entirely.
pub fn make_markdown_report(run: &RunContext, result: Outcome, module_table: &str, failure_table: &str) -> String {
    let mut sections = vec![
        format!("## \u{1F97D} Go Test Report <sup>[CI]({})</sup>", run.run_url()),
        result_line(result),
    ];

    if module_table.is_empty() {
        sections.push("No test results found.".to_string());
    } else {
        sections.push(module_table.to_string());
    }

    if !failure_table.is_empty() {
        sections.push("<br/>".to_string());
        sections.push(format!("<details open>\n<summary> Failures </summary>\n\n{}\n\n</details>", failure_table));
    }

    sections.push(format!(
        "---\n*This comment is created for the commit [{}]({}) pushed by @{}.*",
        run.short_sha(),
        run.commit_url(),
        run.actor
    ));

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pull_number: Option<u64>) -> RunContext {
        RunContext {
            owner: "owner".to_string(),
            repo: "repo".to_string(),
            sha: "abcdef123456".to_string(),
            pull_number,
            run_id: 456,
            actor: "actor".to_string(),
        }
    }

    const HEADER: &str = "## \u{1F97D} Go Test Report <sup>[CI](https://github.com/owner/repo/actions/runs/456)</sup>";
    const PASSED: &str = "#### Result: `Passed`\u{1F646}\u{200D}\u{2640}\u{FE0F}";
    const FAILED: &str = "#### Result: `Failed`\u{1F645}\u{200D}\u{2642}\u{FE0F}";
    const PR_FOOTER: &str = "---\n*This comment is created for the commit [abcdef1](https://github.com/owner/repo/pull/123/commits/abcdef123456) pushed by @actor.*";

    #[test]
    fn test_empty_run() {
        let expected = format!("{}\n\n{}\n\nNo test results found.\n\n{}", HEADER, PASSED, PR_FOOTER);
        assert_eq!(make_markdown_report(&run(Some(123)), Outcome::Passed, "", ""), expected);
    }

    #[test]
    fn test_without_pull_request_links_the_commit() {
        let expected = format!(
            "{}\n\n{}\n\nNo test results found.\n\n---\n*This comment is created for the commit [abcdef1](https://github.com/owner/repo/commit/abcdef123456) pushed by @actor.*",
            HEADER, PASSED
        );
        assert_eq!(make_markdown_report(&run(None), Outcome::Passed, "", ""), expected);
    }

    #[test]
    fn test_module_table_only() {
        let expected = format!("{}\n\n{}\n\nMODULE_TABLE\n\n{}", HEADER, PASSED, PR_FOOTER);
        assert_eq!(make_markdown_report(&run(Some(123)), Outcome::Passed, "MODULE_TABLE", ""), expected);
    }

    #[test]
    fn test_with_failures() {
        let expected = format!(
            "{}\n\n{}\n\nMODULE_TABLE\n\n<br/>\n\n<details open>\n<summary> Failures </summary>\n\nFAILED_TABLE\n\n</details>\n\n{}",
            HEADER, FAILED, PR_FOOTER
        );
        assert_eq!(make_markdown_report(&run(Some(123)), Outcome::Failed, "MODULE_TABLE", "FAILED_TABLE"), expected);
    }

    #[test]
    fn test_non_failed_outcomes_read_as_passed() {
        for outcome in [Outcome::Skipped, Outcome::Unknown] {
            assert!(make_markdown_report(&run(None), outcome, "", "").contains(PASSED));
        }
    }

    #[test]
    fn test_short_sha_tolerates_short_input() {
        let mut context = run(None);
        context.sha = "abc".to_string();
        assert!(make_markdown_report(&context, Outcome::Passed, "", "").contains("[abc](https://github.com/owner/repo/commit/abc)"));
    }
}
