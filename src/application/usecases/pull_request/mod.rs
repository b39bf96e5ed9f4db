//! PR 코멘트 적재/게시 및 diff 서비스.
//!
//! 분석 도구가 만든 코멘트를 먼저 쌓아 두고(`post`), `flush` 시점에
//! 이미 게시된 코멘트를 제외한 나머지만 병렬로 게시한다.
//! 외부 API/프로세스는 생성 시점에 포트로 주입받는다.

mod dedupe;
mod diff;
mod flush;

#[cfg(test)]
pub(crate) mod fakes;

use std::sync::Arc;

use crate::application::ports::{DiffCommand, PullRequestApi};
use crate::domain::comment::Comment;
use crate::domain::target::PullRequestIdentity;

pub use diff::GIT_DIFF_STRIP;

/// 동시에 보낼 수 있는 게시 요청 수 기본값.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// 하나의 PR에 대한 `CommentService` + `DiffService` 구현.
pub struct PullRequestCommenter {
    api: Arc<dyn PullRequestApi>,
    diff_command: Arc<dyn DiffCommand>,
    pr: PullRequestIdentity,
    max_concurrency: usize,
    post_comments: Vec<Arc<Comment>>,
}

impl PullRequestCommenter {
    pub fn new(
        api: Arc<dyn PullRequestApi>,
        diff_command: Arc<dyn DiffCommand>,
        pr: PullRequestIdentity,
    ) -> Self {
        Self {
            api,
            diff_command,
            pr,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            post_comments: Vec::new(),
        }
    }

    /// 동시 게시 요청 상한을 바꾼다. 0은 1로 취급한다.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn pull_request(&self) -> &PullRequestIdentity {
        &self.pr
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }
}
