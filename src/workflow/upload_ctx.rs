//! 文件上传上下文
//!
//! 封装"我正在上传这一批中的第几个文件"这一信息

use crate::models::FileId;
use std::fmt::Display;

#[derive(Debug, Clone)]
pub struct UploadCtx {
    pub file_id: FileId,
    pub file_name: String,
    /// 在本批中的序号（从1开始）
    pub index: usize,
    pub total: usize,
}

impl UploadCtx {
    pub fn new(file_id: FileId, file_name: impl Into<String>, index: usize, total: usize) -> Self {
        Self {
            file_id,
            file_name: file_name.into(),
            index,
            total,
        }
    }
}

impl Display for UploadCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文件 {}/{} {} #{}]",
            self.index, self.total, self.file_name, self.file_id
        )
    }
}
