//! 정적 분석 결과 코멘트 엔티티와 본문 렌더링 규칙.

use serde::Deserialize;

/// 모든 게시 본문에 붙는 출처 표기.
/// 원격에 저장되는 본문의 일부이므로 값이 바뀌면 이전 실행 코멘트와 중복 판정이 깨진다.
pub const BODY_PREFIX: &str = "<sub>reported by linthound</sub>";

/// diff 위치에 달릴 단일 분석 결과.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comment {
    /// 저장소 기준 상대 경로
    pub path: String,
    /// diff hunk 안에서의 위치(파일 줄 번호가 아님)
    pub lnum_diff: u64,
    pub body: String,
    /// 결과를 만든 도구 이름(선택)
    #[serde(default)]
    pub tool_name: Option<String>,
}

impl Comment {
    pub fn new(path: impl Into<String>, lnum_diff: u64, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            lnum_diff,
            body: body.into(),
            tool_name: None,
        }
    }

    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = Some(tool_name.into());
        self
    }

    /// 실제로 게시/비교되는 본문.
    pub fn rendered_body(&self) -> String {
        render_body(self.tool_name.as_deref(), &self.body)
    }
}

/// `(tool_name, body)`만으로 결정되는 게시 본문을 만든다.
/// 경로/위치는 API 필드로 따로 전달되므로 본문에 넣지 않는다.
pub fn render_body(tool_name: Option<&str>, body: &str) -> String {
    let tool = match tool_name {
        Some(name) if !name.is_empty() => format!("**[{name}]** "),
        _ => String::new(),
    };
    format!("{tool}{BODY_PREFIX}\n{body}")
}
