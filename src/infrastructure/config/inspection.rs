//! 적용 설정 진단(inspection) 뷰 모델.

use std::collections::BTreeMap;

use serde::Serialize;

use super::loader::LoadedConfig;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub effective_defaults: EffectiveDefaults,
    pub hosts: BTreeMap<String, HostInspection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveDefaults {
    pub max_concurrency: usize,
    pub git_command: String,
    pub git_workdir: Option<String>,
}

/// 토큰 값은 노출하지 않고 출처만 보여준다.
#[derive(Debug, Clone, Serialize)]
pub struct HostInspection {
    pub token_source: Option<String>,
    pub token_resolved: bool,
    pub api_base: Option<String>,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = loaded.config;
        let hosts = config
            .hosts
            .iter()
            .map(|(host, cfg)| {
                (
                    host.clone(),
                    HostInspection {
                        token_source: cfg.token_source_label(),
                        token_resolved: cfg.resolve_token().is_some(),
                        api_base: cfg.api_base.clone(),
                    },
                )
            })
            .collect();

        Self {
            searched_paths: display_paths(&loaded.searched_paths),
            loaded_paths: display_paths(&loaded.loaded_paths),
            effective_defaults: EffectiveDefaults {
                max_concurrency: config.max_concurrency(),
                git_command: config.git_command(),
                git_workdir: config
                    .defaults
                    .git_workdir
                    .as_ref()
                    .map(|p| p.display().to_string()),
            },
            hosts,
        }
    }
}

fn display_paths(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}
