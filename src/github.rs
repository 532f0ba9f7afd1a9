/// Pull-request comment service
///
/// The report is posted as a single issue comment tagged with a hidden HTML
/// marker. Later runs find that comment again and overwrite it instead of
/// piling up new ones.

use log::debug;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Hidden marker identifying comments owned by this tool
pub const COMMENT_MARK: &str = "<!-- commented by junit-monorepo-go -->";

const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("junit-monorepo-go/", env!("CARGO_PKG_VERSION"));
const PER_PAGE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(default)]
    pub body: Option<String>,
}

/// The issue-comment endpoints the upsert needs
pub trait CommentApi {
    /// One page of comments, 1-based
    fn list_comments(&self, owner: &str, repo: &str, issue: u64, page: usize) -> Result<Vec<Comment>, String>;
    fn create_comment(&self, owner: &str, repo: &str, issue: u64, body: &str) -> Result<Comment, String>;
    fn update_comment(&self, owner: &str, repo: &str, comment_id: u64, body: &str) -> Result<Comment, String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertComment<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub pull_number: u64,
    pub mark: &'a str,
    pub body: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub updated: bool,
    pub id: u64,
}

pub struct Client<A: CommentApi> {
    api: A,
}

impl<A: CommentApi> Client<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Update the first comment starting with `mark`, or create one.
    ///
    /// The posted body is always `mark` on its own line followed by `body`.
    pub fn upsert_comment(&self, params: &UpsertComment<'_>) -> Result<UpsertOutcome, String> {
        let marked_body = format!("{}\n{}", params.mark, params.body);

        if let Some(existing) = self.find_marked(params)? {
            debug!("updating comment {} on #{}", existing.id, params.pull_number);
            let updated = self.api.update_comment(params.owner, params.repo, existing.id, &marked_body)?;
            return Ok(UpsertOutcome { updated: true, id: updated.id });
        }

        debug!("creating comment on #{}", params.pull_number);
        let created = self.api.create_comment(params.owner, params.repo, params.pull_number, &marked_body)?;
        Ok(UpsertOutcome { updated: false, id: created.id })
    }

    fn find_marked(&self, params: &UpsertComment<'_>) -> Result<Option<Comment>, String> {
        for page in 1.. {
            let comments = self.api.list_comments(params.owner, params.repo, params.pull_number, page)?;
            let page_size = comments.len();
            debug!("got {} comment(s) on page {}", page_size, page);

            if let Some(found) = comments.into_iter().find(|c| c.body.as_deref().is_some_and(|b| b.starts_with(params.mark))) {
                return Ok(Some(found));
            }

            // A short page is the last one
            if page_size < PER_PAGE {
                break;
            }
        }
        Ok(None)
    }
}

/// GitHub REST implementation over `ureq`
pub struct RestApi {
    agent: ureq::Agent,
    api_url: String,
    token: String,
}

impl RestApi {
    pub fn new(api_url: Option<String>, token: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(Duration::from_secs(30)).user_agent(USER_AGENT).build();
        let api_url = api_url.filter(|u| !u.is_empty()).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { agent, api_url: api_url.trim_end_matches('/').to_string(), token: token.into() }
    }

    /// Reads the API base from `GITHUB_API_URL`, as set on Actions runners and GHES
    pub fn from_env(token: impl Into<String>) -> Self {
        Self::new(std::env::var("GITHUB_API_URL").ok(), token)
    }

    fn request(&self, method: &str, url: &str) -> ureq::Request {
        self.agent
            .request(method, url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/vnd.github+json")
            .set("X-GitHub-Api-Version", "2022-11-28")
    }

    fn send(&self, method: &str, url: &str, body: &str) -> Result<Comment, String> {
        let payload = json!({ "body": body }).to_string();
        let response = self
            .request(method, url)
            .set("Content-Type", "application/json")
            .send_string(&payload)
            .map_err(|e| format!("{} {} failed: {}", method, url, e))?;
        parse_response(url, response)
    }
}

fn parse_response<T: for<'de> Deserialize<'de>>(url: &str, response: ureq::Response) -> Result<T, String> {
    let text = response.into_string().map_err(|e| format!("Failed to read response from {}: {}", url, e))?;
    serde_json::from_str(&text).map_err(|e| format!("Unexpected response from {}: {}", url, e))
}

impl CommentApi for RestApi {
    fn list_comments(&self, owner: &str, repo: &str, issue: u64, page: usize) -> Result<Vec<Comment>, String> {
        let url = format!("{}/repos/{}/{}/issues/{}/comments", self.api_url, owner, repo, issue);
        let response = self
            .request("GET", &url)
            .query("per_page", &PER_PAGE.to_string())
            .query("page", &page.to_string())
            .call()
            .map_err(|e| format!("GET {} failed: {}", url, e))?;
        parse_response(&url, response)
    }

    fn create_comment(&self, owner: &str, repo: &str, issue: u64, body: &str) -> Result<Comment, String> {
        let url = format!("{}/repos/{}/{}/issues/{}/comments", self.api_url, owner, repo, issue);
        self.send("POST", &url, body)
    }

    fn update_comment(&self, owner: &str, repo: &str, comment_id: u64, body: &str) -> Result<Comment, String> {
        let url = format!("{}/repos/{}/{}/issues/comments/{}", self.api_url, owner, repo, comment_id);
        self.send("PATCH", &url, body)
    }
}
