//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::Config;

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
/// 설정 파일이 하나도 없으면 기본값으로 동작한다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    let paths = config_paths();
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }
        merged.merge_from(read_config(path)?);
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

fn read_config(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse JSON in {}", path.display()))
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/linthound/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("linthound").join("config.json"));
    }

    paths.push(PathBuf::from(".linthound/config.json"));

    if let Ok(path) = env::var("LINTHOUND_CONFIG") {
        paths.push(PathBuf::from(path));
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_order() {
        let out = dedup_paths(vec![
            PathBuf::from("a"),
            PathBuf::from("b"),
            PathBuf::from("a"),
        ]);
        assert_eq!(out, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }

    #[test]
    fn project_path_is_searched() {
        assert!(config_paths().contains(&PathBuf::from(".linthound/config.json")));
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let path = env::temp_dir().join(format!("linthound-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let err = read_config(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(format!("{err:#}").contains("failed to parse JSON"));
    }
}
