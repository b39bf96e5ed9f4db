//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// stderr 전용 리포터. stdout은 diff/JSON 출력용으로 비워 둔다.
pub struct ConsoleReporter {
    interactive: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// stderr가 TTY일 때만 색상을 쓴다.
    pub fn new() -> Self {
        Self {
            interactive: io::stderr().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        eprintln!();
        eprintln!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        eprintln!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        eprintln!(
            "[{:<12}] {}",
            scope,
            colorize_scope(self.interactive, scope, message)
        );
    }

    fn raw(&self, line: &str) {
        eprintln!("{}", line);
    }
}

fn colorize_scope(color: bool, scope: &str, message: &str) -> String {
    match scope {
        "Failed" if color => format!("\x1b[31m{message}\x1b[0m"),
        _ => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_when_not_a_terminal() {
        assert_eq!(colorize_scope(false, "Failed", "a.go:1: boom"), "a.go:1: boom");
        assert!(!colorize_scope(false, "Failed", "x").contains('\x1b'));
    }

    #[test]
    fn failures_are_red_on_a_terminal() {
        assert_eq!(
            colorize_scope(true, "Failed", "boom"),
            "\x1b[31mboom\x1b[0m"
        );
        assert_eq!(colorize_scope(true, "VCS", "computing diff"), "computing diff");
    }
}
