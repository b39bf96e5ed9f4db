//! 애플리케이션 유스케이스 모음.

mod context;
pub mod inspect_config;
pub mod post_findings;
pub mod pull_request;
pub mod show_diff;
