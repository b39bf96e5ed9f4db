//! 포트 테스트 더블. 호출 내용을 기록하고, 게시된 코멘트는 이후 조회에 반영한다.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;

use crate::application::ports::{DiffCommand, NewReviewComment, PullRequestApi};
use crate::domain::posted::RemoteReviewComment;
use crate::domain::target::PullRequestIdentity;

pub(crate) fn identity(head_sha: &str) -> PullRequestIdentity {
    PullRequestIdentity {
        owner: "acme".to_string(),
        repo: "widgets".to_string(),
        number: 7,
        head_sha: head_sha.to_string(),
    }
}

#[derive(Default)]
pub(crate) struct FakeApi {
    base_sha: Mutex<String>,
    remote: Mutex<Vec<RemoteReviewComment>>,
    created: Mutex<Vec<NewReviewComment>>,
    fail_list: bool,
    fail_base: bool,
    fail_bodies: Vec<String>,
    list_calls: AtomicUsize,
    create_attempts: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeApi {
    pub fn with_remote(remote: Vec<RemoteReviewComment>) -> Self {
        Self {
            remote: Mutex::new(remote),
            ..Self::default()
        }
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_base(mut self) -> Self {
        self.fail_base = true;
        self
    }

    pub fn failing_body(mut self, rendered_body: String) -> Self {
        self.fail_bodies.push(rendered_body);
        self
    }

    pub fn set_base_sha(&self, sha: &str) {
        *self.base_sha.lock().unwrap() = sha.to_string();
    }

    pub fn created(&self) -> Vec<NewReviewComment> {
        self.created.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_attempts(&self) -> usize {
        self.create_attempts.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PullRequestApi for FakeApi {
    async fn fetch_base_sha(&self, _pr: &PullRequestIdentity) -> Result<String> {
        if self.fail_base {
            bail!("fetch PR failed");
        }
        Ok(self.base_sha.lock().unwrap().clone())
    }

    async fn list_review_comments(
        &self,
        _pr: &PullRequestIdentity,
    ) -> Result<Vec<RemoteReviewComment>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list {
            bail!("list comments failed");
        }
        Ok(self.remote.lock().unwrap().clone())
    }

    async fn create_review_comment(
        &self,
        _pr: &PullRequestIdentity,
        comment: &NewReviewComment,
    ) -> Result<()> {
        self.create_attempts.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        // 다른 요청이 끼어들 수 있도록 한 번 양보한다.
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_bodies.contains(&comment.body) {
            return Err(anyhow!("create comment failed for {}", comment.path));
        }
        self.created.lock().unwrap().push(comment.clone());
        self.remote.lock().unwrap().push(RemoteReviewComment {
            path: Some(comment.path.clone()),
            position: Some(comment.position),
            body: Some(comment.body.clone()),
        });
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeDiffCommand {
    calls: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl FakeDiffCommand {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiffCommand for FakeDiffCommand {
    async fn diff_find_renames(&self, base: &str, head: &str) -> Result<Vec<u8>> {
        self.calls
            .lock()
            .unwrap()
            .push((base.to_string(), head.to_string()));
        if self.fail {
            bail!("git diff failed");
        }
        Ok(format!("diff {base}..{head}\n").into_bytes())
    }
}
