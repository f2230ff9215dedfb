/// 文件上传客户端
///
/// 每次调用只上传一个文件，不关心批次和状态
use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::HttpExecutor;
use crate::models::{FileHandle, Session};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::debug;

/// 单个文件的上传响应
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResponse {
    pub status: u16,
    /// 解析后的响应体，非 JSON 时为 `{"message": <原文>}`
    pub body: JsonValue,
}

impl UploadResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 上传传输层
///
/// 返回 `Err` 表示传输失败（连接、读取响应等），HTTP 错误状态通过 `Ok` 返回
#[async_trait]
pub trait UploadTransport: Send + Sync {
    async fn upload(&self, file: &FileHandle, session: &Session) -> AppResult<UploadResponse>;
}

/// 基于 HTTP multipart 的上传客户端
pub struct UploadClient {
    executor: Arc<HttpExecutor>,
    path: String,
    field_name: String,
}

impl UploadClient {
    pub fn new(executor: Arc<HttpExecutor>, config: &Config) -> Self {
        Self {
            executor,
            path: config.upload_path.clone(),
            field_name: config.upload_field_name.clone(),
        }
    }

    fn build_form(&self, file: &FileHandle) -> Form {
        let part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        Form::new().part(self.field_name.clone(), part)
    }
}

#[async_trait]
impl UploadTransport for UploadClient {
    async fn upload(&self, file: &FileHandle, session: &Session) -> AppResult<UploadResponse> {
        debug!("上传文件 {} ({} 字节) -> {}", file.name, file.size(), self.path);

        let response = self
            .executor
            .post_multipart(&self.path, self.build_form(file), Some(session))
            .await?;

        let body = response.json_or_wrap("message");
        debug!("上传响应 {}: {}", response.status, body);

        Ok(UploadResponse {
            status: response.status,
            body,
        })
    }
}
