//! PR base..head diff 생성 단계.

use async_trait::async_trait;
use tracing::debug;

use super::PullRequestCommenter;
use crate::application::error::DiffError;
use crate::application::ports::DiffService;

/// `git diff`가 붙이는 `a/`, `b/` 접두어 한 단계.
pub const GIT_DIFF_STRIP: usize = 1;

#[async_trait]
impl DiffService for PullRequestCommenter {
    /// 호스팅 서비스가 제공하는 diff는 rename 감지 없이 만들어져 코멘트 위치와 어긋난다.
    /// base SHA만 원격에서 받아 로컬에서 `--find-renames` diff를 만든다.
    async fn diff(&self) -> Result<Vec<u8>, DiffError> {
        let base = self
            .api
            .fetch_base_sha(&self.pr)
            .await
            .map_err(DiffError::BaseSha)?;
        debug!(base = %base, head = %self.pr.head_sha, "computing pull request diff");
        self.diff_command
            .diff_find_renames(&base, &self.pr.head_sha)
            .await
            .map_err(DiffError::Command)
    }

    fn strip(&self) -> usize {
        GIT_DIFF_STRIP
    }
}
