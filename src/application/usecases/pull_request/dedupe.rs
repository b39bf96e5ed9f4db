//! 게시 완료 인덱스 구성 단계.

use tracing::debug;

use crate::application::error::FlushError;
use crate::application::ports::PullRequestApi;
use crate::domain::posted::PostedComments;
use crate::domain::target::PullRequestIdentity;

/// PR의 기존 리뷰 코멘트를 한 번에 읽어 중복 판정 인덱스를 만든다.
pub(super) async fn load_posted_comments(
    api: &dyn PullRequestApi,
    pr: &PullRequestIdentity,
) -> Result<PostedComments, FlushError> {
    let remote = api
        .list_review_comments(pr)
        .await
        .map_err(FlushError::RemoteRead)?;
    let fetched = remote.len();
    let posted = PostedComments::from_remote(remote);
    debug!(
        owner = %pr.owner,
        repo = %pr.repo,
        number = pr.number,
        fetched,
        indexed = posted.len(),
        "loaded existing review comments"
    );
    Ok(posted)
}
