//! GitHub REST API 연동 구현.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::application::ports::{NewReviewComment, PullRequestApi};
use crate::domain::posted::RemoteReviewComment;
use crate::domain::target::PullRequestIdentity;

/// 리뷰 코멘트 목록 페이지 크기(GitHub 최대값).
const PER_PAGE: usize = 100;

pub struct GitHubClient {
    client: Client,
    host: String,
    token: Option<String>,
    api_base: Option<String>,
}

impl GitHubClient {
    /// GitHub 호스트용 클라이언트를 생성한다.
    pub fn new(host: String, token: Option<String>, api_base: Option<String>) -> Self {
        Self {
            client: Client::new(),
            host,
            token,
            api_base,
        }
    }

    fn api_base(&self) -> String {
        // github.com은 공개 API, 그 외는 Enterprise 기본 경로를 사용한다.
        if let Some(base) = &self.api_base {
            return base.trim_end_matches('/').to_string();
        }
        if self.host == "github.com" {
            "https://api.github.com".to_string()
        } else {
            format!("https://{}/api/v3", self.host)
        }
    }

    fn pull_endpoint(&self, pr: &PullRequestIdentity) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}",
            self.api_base(),
            pr.owner,
            pr.repo,
            pr.number
        )
    }

    fn review_comments_endpoint(&self, pr: &PullRequestIdentity) -> String {
        format!("{}/comments", self.pull_endpoint(pr))
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        // 공통 헤더/인증 적용.
        let req = self
            .client
            .request(method, url)
            .header("User-Agent", "linthound")
            .header("Accept", "application/vnd.github+json");

        if let Some(token) = &self.token {
            req.bearer_auth(token)
        } else {
            req
        }
    }

    /// 요청을 보내고 2xx가 아니면 상태/본문을 담은 오류로 바꾼다.
    async fn send(&self, req: RequestBuilder, what: &str) -> Result<String> {
        let resp = req
            .send()
            .await
            .with_context(|| format!("github: failed to {what}"))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .with_context(|| format!("github: failed to read {what} body"))?;

        if !status.is_success() {
            anyhow::bail!("github: failed to {what} ({status}): {body}");
        }
        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct PullResponse {
    base: PullRef,
}

#[derive(Debug, Deserialize)]
struct PullRef {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct ReviewCommentResponse {
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    position: Option<u64>,
    #[serde(default)]
    body: Option<String>,
}

impl From<ReviewCommentResponse> for RemoteReviewComment {
    fn from(c: ReviewCommentResponse) -> Self {
        Self {
            path: c.path,
            position: c.position,
            body: c.body,
        }
    }
}

fn parse_review_comments(body: &str) -> Result<Vec<RemoteReviewComment>> {
    let page: Vec<ReviewCommentResponse> =
        serde_json::from_str(body).context("github: invalid review comments JSON")?;
    Ok(page.into_iter().map(Into::into).collect())
}

/// 리뷰 코멘트 생성 요청 본문. 이 네 필드 외에는 보내지 않는다.
fn create_payload(comment: &NewReviewComment) -> serde_json::Value {
    json!({
        "commit_id": comment.commit_id,
        "body": comment.body,
        "path": comment.path,
        "position": comment.position,
    })
}

#[async_trait]
impl PullRequestApi for GitHubClient {
    async fn fetch_base_sha(&self, pr: &PullRequestIdentity) -> Result<String> {
        let body = self
            .send(self.request(Method::GET, self.pull_endpoint(pr)), "fetch PR")
            .await?;
        let pull: PullResponse = serde_json::from_str(&body).context("github: invalid PR JSON")?;
        Ok(pull.base.sha)
    }

    async fn list_review_comments(
        &self,
        pr: &PullRequestIdentity,
    ) -> Result<Vec<RemoteReviewComment>> {
        // 꽉 차지 않은 페이지가 나올 때까지 읽는다.
        let mut comments = Vec::new();
        for page in 1u32.. {
            let url = format!(
                "{}?per_page={PER_PAGE}&page={page}",
                self.review_comments_endpoint(pr)
            );
            let body = self
                .send(self.request(Method::GET, url), "list review comments")
                .await?;
            let batch = parse_review_comments(&body)?;
            let last = batch.len() < PER_PAGE;
            comments.extend(batch);
            if last {
                debug!(pages = page, total = comments.len(), "listed review comments");
                break;
            }
        }
        Ok(comments)
    }

    async fn create_review_comment(
        &self,
        pr: &PullRequestIdentity,
        comment: &NewReviewComment,
    ) -> Result<()> {
        self.send(
            self.request(Method::POST, self.review_comments_endpoint(pr))
                .json(&create_payload(comment)),
            "create review comment",
        )
        .await?;
        Ok(())
    }
}
