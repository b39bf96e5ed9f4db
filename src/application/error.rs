//! 코멘트 게시/diff 생성 오류 분류.
//! 원격/프로세스 오류는 메시지를 바꾸지 않고 그대로 감싼다.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlushError {
    /// 기존 코멘트 조회 실패. 게시 요청은 하나도 보내지 않았다.
    #[error(transparent)]
    RemoteRead(anyhow::Error),
    /// 게시 요청 실패 중 가장 먼저 관측된 것.
    #[error(transparent)]
    Write(anyhow::Error),
}

#[derive(Debug, Error)]
pub enum DiffError {
    /// PR base SHA 조회 실패
    #[error(transparent)]
    BaseSha(anyhow::Error),
    /// 로컬 diff 명령 실패
    #[error(transparent)]
    Command(anyhow::Error),
}
