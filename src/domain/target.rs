//! 입력 URL을 GitHub PR 대상으로 해석하는 모듈.

use anyhow::{Result, bail};
use url::Url;

/// URL에서 해석한 PR 위치.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestTarget {
    pub host: String,
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub url: String,
}

/// flush/diff 동안 변하지 않는 PR 식별자.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestIdentity {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub head_sha: String,
}

impl PullRequestTarget {
    /// `https://<host>/<owner>/<repo>/pull/<number>` 형태만 허용한다.
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input)?;
        let host = url
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("URL host is missing"))?
            .to_string();

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).collect())
            .unwrap_or_default();

        // /owner/repo/pull/<number>[/files ...]
        if segments.len() < 4 || segments[2] != "pull" {
            bail!("unsupported pull request URL: {input}");
        }
        let Ok(number) = segments[3].parse() else {
            bail!("invalid pull request number in URL: {input}");
        };

        Ok(Self {
            host,
            owner: segments[0].to_string(),
            repo: segments[1].to_string(),
            number,
            url: input.to_string(),
        })
    }

    pub fn identity(&self, head_sha: &str) -> PullRequestIdentity {
        PullRequestIdentity {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            number: self.number,
            head_sha: head_sha.to_string(),
        }
    }
}
