use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;

/// 程序配置
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    // --- 后端 API 配置 ---
    /// 后端基础URL
    pub api_base_url: String,
    /// 文件上传接口路径
    pub upload_path: String,
    /// AI 接口路径
    pub ai_path: String,
    /// 登录接口路径
    pub login_path: String,
    /// 注册接口路径
    pub signup_path: String,
    /// 上传表单中的文件字段名
    pub upload_field_name: String,
    /// 两次上传之间的间隔（毫秒）
    pub upload_delay_ms: u64,
    /// 请求超时（秒），为空时使用传输层默认值
    pub request_timeout_secs: Option<u64>,
    // --- 运行配置 ---
    /// 待上传文件所在目录
    pub upload_folder: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    // --- 会话配置 ---
    pub auth_token: Option<String>,
    pub auth_email: Option<String>,
    pub login_email: Option<String>,
    pub login_password: Option<String>,
    // --- 出题配置 ---
    pub qa_topic: Option<String>,
    pub qa_num_questions: u32,
    pub qa_difficulty: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:6000".to_string(),
            upload_path: "/api/datasets/upload".to_string(),
            ai_path: "/ai".to_string(),
            login_path: "/login".to_string(),
            signup_path: "/auth/signup".to_string(),
            upload_field_name: "dataset".to_string(),
            upload_delay_ms: 300,
            request_timeout_secs: None,
            upload_folder: "datasets".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            auth_token: None,
            auth_email: None,
            login_email: None,
            login_password: None,
            qa_topic: None,
            qa_num_questions: 5,
            qa_difficulty: "medium".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载配置，文件不存在时使用默认值，随后应用环境变量覆盖
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::from_env());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Self::from_toml_str(&content, path)?.with_env_overrides())
    }

    fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    fn with_env_overrides(self) -> Self {
        Self {
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(self.api_base_url),
            upload_path: std::env::var("UPLOAD_PATH").unwrap_or(self.upload_path),
            ai_path: std::env::var("AI_PATH").unwrap_or(self.ai_path),
            login_path: std::env::var("LOGIN_PATH").unwrap_or(self.login_path),
            signup_path: std::env::var("SIGNUP_PATH").unwrap_or(self.signup_path),
            upload_field_name: std::env::var("UPLOAD_FIELD_NAME").unwrap_or(self.upload_field_name),
            upload_delay_ms: std::env::var("UPLOAD_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.upload_delay_ms),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).or(self.request_timeout_secs),
            upload_folder: std::env::var("UPLOAD_FOLDER").unwrap_or(self.upload_folder),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
            auth_token: std::env::var("AUTH_TOKEN").ok().or(self.auth_token),
            auth_email: std::env::var("AUTH_EMAIL").ok().or(self.auth_email),
            login_email: std::env::var("LOGIN_EMAIL").ok().or(self.login_email),
            login_password: std::env::var("LOGIN_PASSWORD").ok().or(self.login_password),
            qa_topic: std::env::var("QA_TOPIC").ok().or(self.qa_topic),
            qa_num_questions: std::env::var("QA_NUM_QUESTIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.qa_num_questions),
            qa_difficulty: std::env::var("QA_DIFFICULTY").unwrap_or(self.qa_difficulty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let content = r#"
            api_base_url = "http://backend:8080"
            upload_delay_ms = 0
        "#;
        let config = Config::from_toml_str(content, Path::new("app.toml")).unwrap();

        assert_eq!(config.api_base_url, "http://backend:8080");
        assert_eq!(config.upload_delay_ms, 0);
        assert_eq!(config.upload_field_name, "dataset");
        assert_eq!(config.upload_path, "/api/datasets/upload");
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let err = Config::from_toml_str("upload_delay_ms = \"soon\"", Path::new("bad.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
