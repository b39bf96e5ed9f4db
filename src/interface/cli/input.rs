//! JSON Lines 형식 분석 결과 입력 파서.

use std::io::BufRead;

use anyhow::{Context, Result};

use crate::domain::comment::Comment;

/// 한 줄에 코멘트 하나. 빈 줄은 무시한다.
pub fn read_comments(reader: impl BufRead) -> Result<Vec<Comment>> {
    let mut comments = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("failed to read findings input")?;
        if line.trim().is_empty() {
            continue;
        }
        let comment: Comment = serde_json::from_str(&line)
            .with_context(|| format!("invalid finding on line {}", idx + 1))?;
        comments.push(comment);
    }
    Ok(comments)
}
