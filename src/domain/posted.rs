//! 이미 게시된 리뷰 코멘트 인덱스(중복 방지 규칙).

use std::collections::HashMap;

use crate::domain::comment::Comment;

/// PR에 존재하는 리뷰 코멘트의 원격 표현.
/// 해결/outdated 코멘트는 position이 비어 있을 수 있다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteReviewComment {
    pub path: Option<String>,
    pub position: Option<u64>,
    pub body: Option<String>,
}

/// `path -> position -> 본문 목록` 형태의 게시 완료 인덱스.
#[derive(Debug, Clone, Default)]
pub struct PostedComments {
    by_path: HashMap<String, HashMap<u64, Vec<String>>>,
}

impl PostedComments {
    /// 원격 코멘트 목록으로 인덱스를 구성한다.
    /// path/position/body 중 하나라도 없으면 비교 대상이 될 수 없으므로 버린다.
    pub fn from_remote(comments: impl IntoIterator<Item = RemoteReviewComment>) -> Self {
        let mut index = Self::default();
        for c in comments {
            let (Some(path), Some(position), Some(body)) = (c.path, c.position, c.body) else {
                continue;
            };
            index.insert(path, position, body);
        }
        index
    }

    pub fn insert(&mut self, path: String, position: u64, body: String) {
        self.by_path
            .entry(path)
            .or_default()
            .entry(position)
            .or_default()
            .push(body);
    }

    /// 같은 path, 같은 position에 렌더링 본문이 정확히 같은 코멘트가 있으면 true.
    pub fn is_posted(&self, comment: &Comment) -> bool {
        self.contains(&comment.path, comment.lnum_diff, &comment.rendered_body())
    }

    pub fn contains(&self, path: &str, position: u64, rendered_body: &str) -> bool {
        self.by_path
            .get(path)
            .and_then(|positions| positions.get(&position))
            .is_some_and(|bodies| bodies.iter().any(|b| b == rendered_body))
    }

    /// 인덱스에 들어간 본문 수.
    pub fn len(&self) -> usize {
        self.by_path
            .values()
            .flat_map(|positions| positions.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
