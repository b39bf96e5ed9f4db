//! 분석 결과 코멘트를 적재하고 PR에 게시하는 유스케이스.

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::{
    CommentService, ConfigRepository, GatewayFactory, Reporter, TargetResolver,
};
use crate::application::usecases::context::load_execution_context;
use crate::domain::comment::Comment;

#[derive(Debug, Clone)]
pub struct PostOptions {
    pub url: String,
    pub head_sha: String,
    /// 설정값보다 우선하는 동시 게시 상한
    pub max_concurrency: Option<usize>,
    pub dry_run: bool,
}

/// 적재 → 중복 제외 → 병렬 게시 → 결과 보고 흐름을 조율한다.
pub struct PostFindingsUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub target_resolver: &'a dyn TargetResolver,
    pub gateway_factory: &'a dyn GatewayFactory,
    pub reporter: &'a dyn Reporter,
}

impl<'a> PostFindingsUseCase<'a> {
    pub async fn execute(&self, options: PostOptions, comments: Vec<Comment>) -> Result<()> {
        self.reporter.section("Session");
        self.reporter.kv("Target", &options.url);
        self.reporter.kv("Head SHA", &options.head_sha);
        self.reporter
            .kv("Mode", if options.dry_run { "dry-run" } else { "post-comment" });

        let ctx = load_execution_context(
            self.config_repo,
            self.target_resolver,
            self.gateway_factory,
            &options.url,
            &options.head_sha,
            !options.dry_run,
        )?;

        let mut commenter = ctx.commenter;
        if let Some(max) = options.max_concurrency {
            commenter = commenter.with_max_concurrency(max);
        }

        for comment in comments {
            commenter.post(Arc::new(comment));
        }
        self.reporter
            .kv("Staged", &commenter.list_post_comments().len().to_string());

        if options.dry_run {
            self.reporter.section("Dry Run: Review Comments");
            for comment in commenter.list_post_comments() {
                self.reporter
                    .raw(&format!("--- {}:{} ---", comment.path, comment.lnum_diff));
                self.reporter.raw(&comment.rendered_body());
            }
            return Ok(());
        }

        self.reporter.section("Post Review Comments");
        self.reporter.kv("Host", &ctx.target.host);
        self.reporter
            .kv("Concurrency", &commenter.max_concurrency().to_string());

        let report = commenter.flush_report().await?;
        let failed = report.dispatched_count() - report.posted_count();
        self.reporter.kv("Skipped", &report.skipped.len().to_string());
        self.reporter.kv("Posted", &report.posted_count().to_string());
        self.reporter.kv("Failed", &failed.to_string());
        for outcome in report.failed() {
            if let Err(err) = &outcome.result {
                self.reporter.status(
                    "Failed",
                    &format!("{}:{}: {err:#}", outcome.comment.path, outcome.comment.lnum_diff),
                );
            }
        }

        match report.into_first_error() {
            Some(err) => Err(err.context(format!("{failed} review comment(s) failed to post"))),
            None => Ok(()),
        }
    }
}
