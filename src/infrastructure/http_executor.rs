//! HTTP 执行器 - 基础设施层
//!
//! 持有唯一的 reqwest 客户端，只暴露"发请求"的能力

use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::models::Session;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::debug;

/// 原始响应：状态码 + 响应文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub text: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 按 JSON 解析响应体，失败时把原文包装为 `{ fallback_key: text }`
    pub fn json_or_wrap(&self, fallback_key: &str) -> JsonValue {
        serde_json::from_str(&self.text).unwrap_or_else(|_| {
            let mut wrapped = serde_json::Map::new();
            wrapped.insert(fallback_key.to_string(), JsonValue::String(self.text.clone()));
            JsonValue::Object(wrapped)
        })
    }
}

/// HTTP 执行器
///
/// 职责：
/// - 持有唯一的 reqwest Client
/// - 拼接后端地址、附加凭证头
/// - 不认识题目 / 文件工作集
pub struct HttpExecutor {
    client: Client,
    base_url: String,
}

impl HttpExecutor {
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(ApiError::ClientBuildFailed)?;

        Ok(Self::with_client(client, &config.api_base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// 发送 JSON POST 请求
    ///
    /// `session` 为 `None` 时不附加 `Authorization` 头
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        session: Option<&Session>,
    ) -> AppResult<RawResponse> {
        let request = self.client.post(self.url(path)).json(body);
        self.send(path, request, session).await
    }

    /// 发送 multipart POST 请求
    pub async fn post_multipart(
        &self,
        path: &str,
        form: Form,
        session: Option<&Session>,
    ) -> AppResult<RawResponse> {
        let request = self.client.post(self.url(path)).multipart(form);
        self.send(path, request, session).await
    }

    async fn send(
        &self,
        path: &str,
        mut request: RequestBuilder,
        session: Option<&Session>,
    ) -> AppResult<RawResponse> {
        if let Some(session) = session {
            request = request.header(AUTHORIZATION, session.bearer_header());
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;

        debug!("POST {} -> {} ({} 字节)", path, status, text.len());

        Ok(RawResponse { status, text })
    }
}
