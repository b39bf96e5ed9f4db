//! Domain layer
//! 코멘트/중복 판정/PR 식별 규칙을 외부 의존성 없이 표현한다.

pub mod comment;
pub mod flush;
pub mod posted;
pub mod target;
