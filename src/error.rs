use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 后端 API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 用户输入错误（不会发起任何网络请求）
    #[error("{0}")]
    Input(#[from] InputError),
    /// 上传流程错误
    #[error("{0}")]
    Upload(#[from] UploadError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败（连接、传输层错误）
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 返回非 2xx 状态码
    #[error("API返回错误响应 ({endpoint}): status={status}, message={message:?}")]
    BadStatus {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },
    /// 响应中缺少预期字段
    #[error("API响应缺少字段 ({endpoint}): {field}")]
    MissingField { endpoint: String, field: String },
    /// HTTP 客户端构建失败
    #[error("HTTP客户端构建失败: {0}")]
    ClientBuildFailed(#[source] reqwest::Error),
}

/// 用户输入错误
///
/// Display 文本直接面向用户
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a topic to generate questions.")]
    EmptyTopic,
    #[error("Please enter a question to transform.")]
    EmptyVariantQuestion,
    #[error("Please enter your email and password.")]
    EmptyCredentials,
}

/// 上传流程错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// 待上传列表为空
    #[error("Please select at least one file first.")]
    NoFiles,
    /// 已有一批上传正在进行
    #[error("An upload is already in progress.")]
    AlreadyRunning,
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件读取失败
    #[error("无法读取配置文件 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 是否为用户输入类错误（应直接提示用户，而非记录为故障）
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::Input(_) | AppError::Upload(UploadError::NoFiles)
        )
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
