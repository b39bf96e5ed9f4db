//! 로컬 `git diff` 실행기.

use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::DiffCommand;

/// `git diff --find-renames <base> <head>`를 실행한다.
pub struct GitDiffCommand {
    program: String,
    workdir: Option<PathBuf>,
}

impl GitDiffCommand {
    pub fn new(program: impl Into<String>, workdir: Option<PathBuf>) -> Self {
        Self {
            program: program.into(),
            workdir,
        }
    }

    fn args<'a>(base: &'a str, head: &'a str) -> [&'a str; 4] {
        ["diff", "--find-renames", base, head]
    }
}

#[async_trait]
impl DiffCommand for GitDiffCommand {
    async fn diff_find_renames(&self, base: &str, head: &str) -> Result<Vec<u8>> {
        let mut cmd = Command::new(&self.program);
        cmd.args(Self::args(base, head))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .await
            .with_context(|| format!("failed to spawn '{}'", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            bail!(
                "git diff {base}..{head} failed ({}): {}",
                output.status,
                if stderr.is_empty() {
                    "no stderr output"
                } else {
                    stderr.as_str()
                }
            );
        }

        // diff 바이트는 코멘트 위치 계산에 그대로 쓰이므로 손대지 않는다.
        Ok(output.stdout)
    }
}
