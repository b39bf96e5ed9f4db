//! 실행 컨텍스트(설정/대상/서비스) 준비 단계.

use anyhow::{Context, Result, bail};

use crate::application::ports::{ConfigRepository, GatewayFactory, TargetResolver};
use crate::application::usecases::pull_request::PullRequestCommenter;
use crate::domain::target::PullRequestTarget;

/// 유스케이스 공통 실행 상태.
pub(super) struct ExecutionContext {
    pub target: PullRequestTarget,
    pub commenter: PullRequestCommenter,
}

/// 설정 로딩, 대상 파싱, 토큰 해석 후 PR 서비스를 조립한다.
pub(super) fn load_execution_context(
    config_repo: &dyn ConfigRepository,
    target_resolver: &dyn TargetResolver,
    gateway_factory: &dyn GatewayFactory,
    url: &str,
    head_sha: &str,
    require_token: bool,
) -> Result<ExecutionContext> {
    let config = config_repo
        .load()
        .context("failed to load linthound config")?;

    let target = target_resolver
        .parse(url)
        .context("failed to parse pull request URL")?;

    if head_sha.trim().is_empty() {
        bail!("head SHA must not be empty");
    }

    let host_cfg = config.host_config(&target.host);
    let token = host_cfg.and_then(|h| h.resolve_token());

    if require_token && token.is_none() {
        bail!(
            "missing token for host '{}'. Configure hosts.{}.token or hosts.{}.token_env in config",
            target.host,
            target.host,
            target.host,
        );
    }

    let api = gateway_factory.pull_request_api(&target, host_cfg, token);
    let diff_command = gateway_factory.diff_command(&config);
    let commenter = PullRequestCommenter::new(api, diff_command, target.identity(head_sha))
        .with_max_concurrency(config.max_concurrency());

    Ok(ExecutionContext {
        target,
        commenter,
    })
}
