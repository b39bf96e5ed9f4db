//! 적재/중복 제외/병렬 게시 단계.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use super::PullRequestCommenter;
use super::dedupe::load_posted_comments;
use crate::application::error::FlushError;
use crate::application::ports::{CommentService, NewReviewComment};
use crate::domain::comment::Comment;
use crate::domain::flush::{CommentOutcome, FlushReport};

impl PullRequestCommenter {
    /// 게시 결과를 코멘트 단위로 돌려주는 flush.
    /// 인덱스 조회가 끝난 뒤에만 게시 요청을 보낸다.
    pub async fn flush_report(&self) -> Result<FlushReport, FlushError> {
        let posted = load_posted_comments(self.api.as_ref(), &self.pr).await?;

        let mut report = FlushReport::default();
        let mut pending = Vec::new();
        for comment in &self.post_comments {
            if posted.is_posted(comment) {
                debug!(path = %comment.path, position = comment.lnum_diff, "already posted; skipping");
                report.skipped.push(Arc::clone(comment));
            } else {
                pending.push(Arc::clone(comment));
            }
        }

        let api = self.api.as_ref();
        let pr = &self.pr;
        report.outcomes = stream::iter(pending)
            .map(|comment| async move {
                let request = NewReviewComment {
                    commit_id: pr.head_sha.clone(),
                    body: comment.rendered_body(),
                    path: comment.path.clone(),
                    position: comment.lnum_diff,
                };
                debug!(path = %request.path, position = request.position, "creating review comment");
                let result = api.create_review_comment(pr, &request).await;
                if let Err(err) = &result {
                    warn!(path = %request.path, position = request.position, "failed to create review comment: {err:#}");
                }
                CommentOutcome { comment, result }
            })
            .buffer_unordered(self.max_concurrency)
            .collect()
            .await;

        info!(
            number = pr.number,
            skipped = report.skipped.len(),
            posted = report.posted_count(),
            failed = report.dispatched_count() - report.posted_count(),
            "flushed review comments"
        );
        Ok(report)
    }
}

#[async_trait]
impl CommentService for PullRequestCommenter {
    fn post(&mut self, comment: Arc<Comment>) {
        self.post_comments.push(comment);
    }

    fn list_post_comments(&self) -> &[Arc<Comment>] {
        &self.post_comments
    }

    async fn flush(&self) -> Result<(), FlushError> {
        match self.flush_report().await?.into_first_error() {
            Some(err) => Err(FlushError::Write(err)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::pull_request::fakes::{FakeApi, FakeDiffCommand, identity};
    use crate::domain::comment::render_body;
    use crate::domain::posted::RemoteReviewComment;

    fn commenter(api: &Arc<FakeApi>) -> PullRequestCommenter {
        PullRequestCommenter::new(
            api.clone(),
            Arc::new(FakeDiffCommand::default()),
            identity("head"),
        )
    }

    fn remote(path: &str, position: Option<u64>, body: String) -> RemoteReviewComment {
        RemoteReviewComment {
            path: Some(path.to_string()),
            position,
            body: Some(body),
        }
    }

    #[test]
    fn post_keeps_staging_order_without_io() {
        let api = Arc::new(FakeApi::default());
        let mut svc = commenter(&api);
        svc.post(Arc::new(Comment::new("b.go", 2, "second")));
        svc.post(Arc::new(Comment::new("a.go", 1, "first")));

        let bodies: Vec<_> = svc.list_post_comments().iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, vec!["second", "first"]);
        assert_eq!(api.list_calls(), 0);
        assert!(api.created().is_empty());
    }

    #[tokio::test]
    async fn empty_flush_still_reads_index() {
        let api = Arc::new(FakeApi::default());
        let svc = commenter(&api);

        svc.flush().await.unwrap();
        assert_eq!(api.list_calls(), 1);
        assert!(api.created().is_empty());
    }

    #[tokio::test]
    async fn sends_commit_body_path_and_position() {
        let api = Arc::new(FakeApi::default());
        let mut svc = commenter(&api);
        svc.post(Arc::new(Comment::new("src/a.rs", 5, "unused").with_tool_name("clippy")));

        svc.flush().await.unwrap();
        assert_eq!(
            api.created(),
            vec![NewReviewComment {
                commit_id: "head".to_string(),
                body: render_body(Some("clippy"), "unused"),
                path: "src/a.rs".to_string(),
                position: 5,
            }]
        );
    }

    #[tokio::test]
    async fn same_rendered_body_is_deduplicated_together() {
        let api = Arc::new(FakeApi::with_remote(vec![remote(
            "x.go",
            Some(3),
            render_body(None, "bug"),
        )]));
        let mut svc = commenter(&api);
        svc.post(Arc::new(Comment::new("x.go", 3, "bug")));
        svc.post(Arc::new(Comment::new("x.go", 3, "bug")));
        svc.post(Arc::new(Comment::new("y.go", 3, "bug")));

        let report = svc.flush_report().await.unwrap();
        assert_eq!(report.skipped.len(), 2);
        let created: Vec<_> = api.created().into_iter().map(|c| c.path).collect();
        assert_eq!(created, vec!["y.go".to_string()]);
    }

    #[tokio::test]
    async fn different_tool_name_is_not_a_duplicate() {
        let api = Arc::new(FakeApi::with_remote(vec![remote(
            "x.go",
            Some(3),
            render_body(None, "bug"),
        )]));
        let mut svc = commenter(&api);
        svc.post(Arc::new(Comment::new("x.go", 3, "bug")));
        svc.post(Arc::new(Comment::new("x.go", 3, "bug").with_tool_name("vet")));

        let report = svc.flush_report().await.unwrap();
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.dispatched_count(), 1);
        assert_eq!(api.created()[0].body, render_body(Some("vet"), "bug"));
    }

    #[tokio::test]
    async fn comment_without_remote_position_never_matches() {
        let api = Arc::new(FakeApi::with_remote(vec![remote(
            "x.go",
            None,
            render_body(None, "bug"),
        )]));
        let mut svc = commenter(&api);
        svc.post(Arc::new(Comment::new("x.go", 3, "bug")));

        svc.flush().await.unwrap();
        assert_eq!(api.created().len(), 1);
    }

    #[tokio::test]
    async fn second_flush_posts_nothing() {
        let api = Arc::new(FakeApi::default());
        let mut svc = commenter(&api);
        svc.post(Arc::new(Comment::new("a.go", 1, "one")));
        svc.post(Arc::new(Comment::new("b.go", 2, "two").with_tool_name("lint")));

        svc.flush().await.unwrap();
        assert_eq!(api.created().len(), 2);

        let report = svc.flush_report().await.unwrap();
        assert_eq!(report.dispatched_count(), 0);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(api.created().len(), 2);
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn read_failure_aborts_before_any_write() {
        let api = Arc::new(FakeApi::default().failing_list());
        let mut svc = commenter(&api);
        svc.post(Arc::new(Comment::new("a.go", 1, "one")));

        let err = svc.flush().await.unwrap_err();
        assert!(matches!(err, FlushError::RemoteRead(_)));
        assert_eq!(err.to_string(), "list comments failed");
        assert!(api.created().is_empty());
    }

    #[tokio::test]
    async fn write_failure_surfaces_but_others_are_posted() {
        let api = Arc::new(FakeApi::default().failing_body(render_body(None, "bad")));
        let mut svc = commenter(&api);
        svc.post(Arc::new(Comment::new("a.go", 1, "ok")));
        svc.post(Arc::new(Comment::new("b.go", 2, "bad")));
        svc.post(Arc::new(Comment::new("c.go", 3, "fine")));

        let report = svc.flush_report().await.unwrap();
        assert!(!report.is_success());
        assert_eq!(report.posted_count(), 2);
        let failed: Vec<_> = report.failed().map(|o| o.comment.path.clone()).collect();
        assert_eq!(failed, vec!["b.go".to_string()]);

        // 성공한 코멘트는 다음 flush에서 제외되고 실패한 코멘트만 다시 시도된다.
        let err = svc.flush().await.unwrap_err();
        assert!(matches!(err, FlushError::Write(_)));
        assert_eq!(api.created().len(), 2);
        assert_eq!(api.create_attempts(), 4);
    }

    #[tokio::test]
    async fn concurrency_is_capped() {
        let api = Arc::new(FakeApi::default());
        let mut svc = commenter(&api).with_max_concurrency(2);
        for i in 0..6 {
            svc.post(Arc::new(Comment::new("a.go", i, format!("finding {i}"))));
        }

        svc.flush().await.unwrap();
        assert_eq!(api.created().len(), 6);
        assert!(api.max_in_flight() <= 2);
    }

    #[tokio::test]
    async fn writes_run_concurrently() {
        let api = Arc::new(FakeApi::default());
        let mut svc = commenter(&api);
        for i in 0..4 {
            svc.post(Arc::new(Comment::new("a.go", i, format!("finding {i}"))));
        }

        svc.flush().await.unwrap();
        assert!(api.max_in_flight() > 1);
    }

    #[test]
    fn zero_concurrency_is_clamped() {
        let api = Arc::new(FakeApi::default());
        assert_eq!(commenter(&api).with_max_concurrency(0).max_concurrency(), 1);
    }
}
