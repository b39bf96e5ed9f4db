//! PR API / diff 명령 포트 구현체 팩토리.

use std::sync::Arc;

use crate::application::ports::{DiffCommand, GatewayFactory, PullRequestApi};
use crate::domain::target::PullRequestTarget;
use crate::infrastructure::config::{Config, HostConfig};
use crate::infrastructure::git::GitDiffCommand;
use crate::infrastructure::github::GitHubClient;

pub struct GatewayFactoryAdapter;

impl GatewayFactory for GatewayFactoryAdapter {
    fn pull_request_api(
        &self,
        target: &PullRequestTarget,
        host_cfg: Option<&HostConfig>,
        token: Option<String>,
    ) -> Arc<dyn PullRequestApi> {
        let api_base = host_cfg.and_then(|h| h.api_base.clone());
        Arc::new(GitHubClient::new(target.host.clone(), token, api_base))
    }

    fn diff_command(&self, config: &Config) -> Arc<dyn DiffCommand> {
        Arc::new(GitDiffCommand::new(
            config.git_command(),
            config.defaults.git_workdir.clone(),
        ))
    }
}
