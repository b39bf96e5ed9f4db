//! CLI 인터페이스 모듈 묶음.

pub mod command;
pub mod input;

pub use command::{Cli, CliAction};
