//! linthound library root.
//! 정적 분석 결과를 PR diff 코멘트로 중복 없이 게시한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use application::error::{DiffError, FlushError};
pub use application::ports::{CommentService, DiffService};
pub use application::usecases::pull_request::PullRequestCommenter;
pub use domain::comment::Comment;
