/// 登录 / 注册客户端
///
/// 只负责换取会话凭证，凭证由调用方显式保存和传递
use crate::config::Config;
use crate::error::{ApiError, AppResult, InputError};
use crate::infrastructure::{HttpExecutor, RawResponse};
use crate::models::Session;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignupRequest<'a> {
    email: &'a str,
    password: &'a str,
    access_code: &'a str,
}

pub struct AuthClient {
    executor: Arc<HttpExecutor>,
    login_path: String,
    signup_path: String,
}

impl AuthClient {
    pub fn new(executor: Arc<HttpExecutor>, config: &Config) -> Self {
        Self {
            executor,
            login_path: config.login_path.clone(),
            signup_path: config.signup_path.clone(),
        }
    }

    /// 登录，成功后返回会话
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Session> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(InputError::EmptyCredentials.into());
        }

        let response = self
            .executor
            .post_json(&self.login_path, &LoginRequest { email, password }, None)
            .await?;

        let session = self.session_from(&self.login_path, &response, email)?;
        info!("✓ 登录成功: {}", email);
        Ok(session)
    }

    /// 注册新账号，成功后返回会话
    pub async fn signup(&self, email: &str, password: &str, access_code: &str) -> AppResult<Session> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(InputError::EmptyCredentials.into());
        }

        let request = SignupRequest {
            email,
            password,
            access_code,
        };
        let response = self
            .executor
            .post_json(&self.signup_path, &request, None)
            .await?;

        let session = self.session_from(&self.signup_path, &response, email)?;
        info!("✓ 注册成功: {}", email);
        Ok(session)
    }

    fn session_from(&self, endpoint: &str, response: &RawResponse, email: &str) -> AppResult<Session> {
        let body = response.json_or_wrap("message");

        if !response.is_success() {
            let message = body
                .get("message")
                .or_else(|| body.get("error"))
                .and_then(|m| m.as_str())
                .map(String::from);
            warn!("认证失败 ({}): {:?}", endpoint, message);
            return Err(ApiError::BadStatus {
                endpoint: endpoint.to_string(),
                status: response.status,
                message,
            }
            .into());
        }

        let token = body
            .get("token")
            .and_then(|t| t.as_str())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::MissingField {
                endpoint: endpoint.to_string(),
                field: "token".to_string(),
            })?;
        let email = body
            .get("email")
            .and_then(|e| e.as_str())
            .unwrap_or(email);

        Ok(Session::new(Some(token.to_string()), Some(email.to_string())))
    }
}
