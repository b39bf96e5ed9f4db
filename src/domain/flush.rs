//! flush 결과 집계 모델.

use std::sync::Arc;

use crate::domain::comment::Comment;

/// 게시 요청 하나의 결과.
#[derive(Debug)]
pub struct CommentOutcome {
    pub comment: Arc<Comment>,
    pub result: anyhow::Result<()>,
}

/// 한 번의 flush에서 일어난 일.
/// `outcomes`는 요청이 끝난 순서대로 쌓인다.
#[derive(Debug, Default)]
pub struct FlushReport {
    pub skipped: Vec<Arc<Comment>>,
    pub outcomes: Vec<CommentOutcome>,
}

impl FlushReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn dispatched_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn posted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// 실패한 요청만 모은다. 선택적 재시도용.
    pub fn failed(&self) -> impl Iterator<Item = &CommentOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    /// 가장 먼저 관측된 실패를 꺼낸다. 나머지 실패는 버려진다.
    pub fn into_first_error(self) -> Option<anyhow::Error> {
        self.outcomes.into_iter().find_map(|o| o.result.err())
    }
}
