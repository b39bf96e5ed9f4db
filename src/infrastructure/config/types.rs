//! 설정 스키마와 병합/해석 규칙.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::application::usecases::pull_request::DEFAULT_MAX_CONCURRENCY;

pub const DEFAULT_GIT_COMMAND: &str = "git";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// 호스트별 인증/엔드포인트 설정
    #[serde(default)]
    pub hosts: HashMap<String, HostConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 동시 게시 요청 상한
    pub max_concurrency: Option<usize>,
    /// diff 생성에 쓸 git 실행 파일
    pub git_command: Option<String>,
    /// git을 실행할 작업 디렉터리(미지정 시 현재 디렉터리)
    pub git_workdir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct HostConfig {
    pub token: Option<String>,
    pub token_env: Option<String>,
    pub api_base: Option<String>,
}

impl Config {
    pub fn max_concurrency(&self) -> usize {
        self.defaults
            .max_concurrency
            .unwrap_or(DEFAULT_MAX_CONCURRENCY)
    }

    pub fn git_command(&self) -> String {
        self.defaults
            .git_command
            .clone()
            .unwrap_or_else(|| DEFAULT_GIT_COMMAND.to_string())
    }

    pub fn host_config(&self, host: &str) -> Option<&HostConfig> {
        self.hosts.get(host)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub(crate) fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);

        for (host, incoming) in other.hosts {
            if let Some(existing) = self.hosts.get_mut(&host) {
                existing.merge_from(incoming);
            } else {
                self.hosts.insert(host, incoming);
            }
        }
    }
}

impl DefaultsConfig {
    pub(crate) fn merge_from(&mut self, other: DefaultsConfig) {
        if other.max_concurrency.is_some() {
            self.max_concurrency = other.max_concurrency;
        }
        if other.git_command.is_some() {
            self.git_command = other.git_command;
        }
        if other.git_workdir.is_some() {
            self.git_workdir = other.git_workdir;
        }
    }
}

impl HostConfig {
    /// host 토큰은 `token` 우선, 없으면 `token_env`를 조회한다.
    pub fn resolve_token(&self) -> Option<String> {
        if let Some(token) = &self.token {
            return Some(token.clone());
        }
        let env_name = self.token_env.as_ref()?;
        env::var(env_name).ok().filter(|v| !v.trim().is_empty())
    }

    pub(crate) fn merge_from(&mut self, other: HostConfig) {
        if other.token.is_some() {
            self.token = other.token;
        }
        if other.token_env.is_some() {
            self.token_env = other.token_env;
        }
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
    }

    pub(crate) fn token_source_label(&self) -> Option<String> {
        if self.token.is_some() {
            return Some("inline".to_string());
        }
        let env_name = self.token_env.as_ref()?;
        if env::var(env_name)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .is_some()
        {
            Some(format!("env:{env_name}"))
        } else {
            Some(format!("env:{env_name} (missing)"))
        }
    }
}
