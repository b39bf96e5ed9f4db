//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::error::{DiffError, FlushError};
use crate::domain::comment::Comment;
use crate::domain::posted::RemoteReviewComment;
use crate::domain::target::{PullRequestIdentity, PullRequestTarget};
use crate::infrastructure::config::{Config, HostConfig};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// URL 입력값을 도메인 대상 식별자로 변환하는 포트.
pub trait TargetResolver: Send + Sync {
    fn parse(&self, input: &str) -> Result<PullRequestTarget>;
}

/// 리뷰 코멘트 생성 요청 본문.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReviewComment {
    pub commit_id: String,
    pub body: String,
    pub path: String,
    pub position: u64,
}

/// 호스팅 서비스 PR API 포트.
#[async_trait]
pub trait PullRequestApi: Send + Sync {
    /// PR의 base 커밋 SHA 조회
    async fn fetch_base_sha(&self, pr: &PullRequestIdentity) -> Result<String>;
    /// PR의 리뷰 코멘트 전체 조회(페이지를 모두 읽는다)
    async fn list_review_comments(
        &self,
        pr: &PullRequestIdentity,
    ) -> Result<Vec<RemoteReviewComment>>;
    /// diff 위치에 리뷰 코멘트 하나 생성
    async fn create_review_comment(
        &self,
        pr: &PullRequestIdentity,
        comment: &NewReviewComment,
    ) -> Result<()>;
}

/// rename 감지 diff를 만드는 로컬 명령 포트.
#[async_trait]
pub trait DiffCommand: Send + Sync {
    async fn diff_find_renames(&self, base: &str, head: &str) -> Result<Vec<u8>>;
}

/// 대상/호스트 설정에 맞는 외부 연동 구현체를 만드는 팩토리 포트.
pub trait GatewayFactory: Send + Sync {
    fn pull_request_api(
        &self,
        target: &PullRequestTarget,
        host_cfg: Option<&HostConfig>,
        token: Option<String>,
    ) -> Arc<dyn PullRequestApi>;
    fn diff_command(&self, config: &Config) -> Arc<dyn DiffCommand>;
}

/// 코멘트 적재/게시 서비스.
#[async_trait]
pub trait CommentService: Send + Sync {
    /// 코멘트를 쌓아 둔다. I/O 없음.
    fn post(&mut self, comment: Arc<Comment>);
    /// 쌓인 코멘트를 적재 순서대로 돌려준다.
    fn list_post_comments(&self) -> &[Arc<Comment>];
    /// 아직 게시되지 않은 코멘트만 병렬로 게시한다.
    async fn flush(&self) -> Result<(), FlushError>;
}

/// 코멘트 위치 해석에 쓰는 diff 서비스.
#[async_trait]
pub trait DiffService: Send + Sync {
    async fn diff(&self) -> Result<Vec<u8>, DiffError>;
    /// hunk 헤더 경로에서 떼어낼 앞 경로 수
    fn strip(&self) -> usize;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn raw(&self, line: &str);
}
