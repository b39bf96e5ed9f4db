//! PR diff 출력 유스케이스.

use anyhow::Result;

use crate::application::ports::{
    ConfigRepository, DiffService, GatewayFactory, Reporter, TargetResolver,
};
use crate::application::usecases::context::load_execution_context;

/// diff 원본 바이트와 경로 strip 깊이.
#[derive(Debug, Clone)]
pub struct DiffOutput {
    pub diff: Vec<u8>,
    pub strip: usize,
}

pub struct ShowDiffUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub target_resolver: &'a dyn TargetResolver,
    pub gateway_factory: &'a dyn GatewayFactory,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ShowDiffUseCase<'a> {
    pub async fn execute(&self, url: &str, head_sha: &str) -> Result<DiffOutput> {
        let ctx = load_execution_context(
            self.config_repo,
            self.target_resolver,
            self.gateway_factory,
            url,
            head_sha,
            true,
        )?;

        self.reporter.status("VCS", "computing diff");
        let diff = ctx.commenter.diff().await?;
        let strip = ctx.commenter.strip();
        self.reporter.kv("Diff Bytes", &diff.len().to_string());
        self.reporter.kv("Strip", &strip.to_string());
        Ok(DiffOutput { diff, strip })
    }
}
