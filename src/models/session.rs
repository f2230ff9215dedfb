use serde::{Deserialize, Serialize};

/// 登录会话凭证
///
/// 由外层程序获取一次，之后显式传入各个请求
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub email: Option<String>,
}

impl Session {
    pub fn new(token: Option<String>, email: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            email: email.filter(|e| !e.is_empty()),
        }
    }

    /// 未登录会话
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `Authorization` 头的值，没有 token 时为空字符串
    pub fn bearer_header(&self) -> String {
        match &self.token {
            Some(token) => format!("Bearer {}", token),
            None => String::new(),
        }
    }
}
