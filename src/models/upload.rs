use crate::error::{AppError, AppResult};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// 待上传的文件内容
#[derive(Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// 从磁盘读取文件
    pub async fn from_path(path: &Path) -> AppResult<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self { name, bytes })
    }

    /// 字节长度
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("name", &self.name)
            .field("size", &self.size())
            .finish()
    }
}

/// 会话内的文件标识
///
/// 由毫秒时间戳和进程内序号拼接而成，只用于内存中区分条目，不保证全局唯一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FileId(u64);

impl FileId {
    pub fn generate() -> Self {
        static SEQ: AtomicU64 = AtomicU64::new(0);
        let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let seq = SEQ.fetch_add(1, Ordering::Relaxed) & 0xF_FFFF;
        FileId((millis << 20) | seq)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/// 单个文件的上传状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    #[default]
    Pending,
    Uploading,
    Success,
    Error,
}

impl UploadStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, UploadStatus::Success | UploadStatus::Error)
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UploadStatus::Pending => "pending",
            UploadStatus::Uploading => "uploading",
            UploadStatus::Success => "success",
            UploadStatus::Error => "error",
        };
        f.write_str(s)
    }
}

/// 工作集中的一个文件
#[derive(Debug, Clone)]
pub struct UploadableFile {
    pub handle: FileHandle,
    pub id: FileId,
    pub status: UploadStatus,
}

impl UploadableFile {
    pub fn new(handle: FileHandle) -> Self {
        Self {
            handle,
            id: FileId::generate(),
            status: UploadStatus::Pending,
        }
    }

    pub fn name(&self) -> &str {
        &self.handle.name
    }

    /// 是否与另一文件同名同大小
    pub fn same_file(&self, other: &FileHandle) -> bool {
        self.handle.name == other.name && self.handle.size() == other.size()
    }
}

/// 整批上传的汇总状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Success,
    Error,
    Partial,
}

/// 一次上传的汇总结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UploadSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub status: BatchStatus,
}

impl UploadSummary {
    pub fn from_counts(succeeded: usize, failed: usize) -> Self {
        let status = if failed == 0 {
            BatchStatus::Success
        } else if succeeded == 0 {
            BatchStatus::Error
        } else {
            BatchStatus::Partial
        };

        Self {
            succeeded,
            failed,
            status,
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// 面向用户的统计文本
    pub fn message(&self) -> String {
        format!(
            "{} file(s) uploaded successfully, {} failed.",
            self.succeeded, self.failed
        )
    }
}

/// 格式化文件大小，例如 `1.5 KB`
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exp = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exp = exp.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);

    let formatted = format!("{:.2}", value);
    let formatted = formatted.trim_end_matches('0').trim_end_matches('.');

    format!("{} {}", formatted, UNITS[exp])
}
