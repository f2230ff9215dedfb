/// AI 接口客户端
///
/// 封装对后端 `ai` 接口的调用
use crate::config::Config;
use crate::error::{ApiError, AppResult};
use crate::infrastructure::HttpExecutor;
use crate::models::{AiMode, Session};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct AiRequest<'a> {
    question: &'a str,
    mode: AiMode,
}

/// AI 客户端
pub struct AiClient {
    executor: Arc<HttpExecutor>,
    path: String,
}

impl AiClient {
    /// 创建新的 AI 客户端
    pub fn new(executor: Arc<HttpExecutor>, config: &Config) -> Self {
        Self {
            executor,
            path: config.ai_path.clone(),
        }
    }

    /// 发送提示词，返回响应中的 `answer` 文本
    ///
    /// 响应体不是 JSON 时整个原文视为答案；缺少 `answer` 字段时返回空字符串
    pub async fn ask(&self, prompt: &str, mode: AiMode, session: &Session) -> AppResult<String> {
        debug!("调用 AI 接口 {}，模式: {:?}", self.path, mode);

        let request = AiRequest {
            question: prompt,
            mode,
        };
        let response = self
            .executor
            .post_json(&self.path, &request, Some(session))
            .await?;

        if !response.is_success() {
            let body = response.json_or_wrap("message");
            return Err(ApiError::BadStatus {
                endpoint: self.path.clone(),
                status: response.status,
                message: body.get("message").and_then(|m| m.as_str()).map(String::from),
            }
            .into());
        }

        let body = response.json_or_wrap("answer");
        let answer = extract_answer(&body);
        if answer.is_empty() {
            warn!("AI 响应中没有 answer 字段或内容为空");
        }

        Ok(answer)
    }
}

/// 提取 `answer` 字段，数组形式的答案按行拼接
fn extract_answer(body: &JsonValue) -> String {
    match body.get("answer") {
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Array(items)) => items
            .iter()
            .map(|item| match item {
                JsonValue::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Some(JsonValue::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
