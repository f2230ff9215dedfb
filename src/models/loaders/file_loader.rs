use crate::error::{AppError, AppResult, FileError};
use crate::models::FileHandle;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从文件夹中加载所有普通文件（不递归），按文件名排序
///
/// 单个文件读取失败只记录警告并跳过
pub async fn load_folder(folder_path: &str) -> AppResult<Vec<FileHandle>> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        }
        .into());
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?
    {
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut handles = Vec::with_capacity(paths.len());
    for path in &paths {
        match load_file(path).await {
            Ok(handle) => {
                tracing::info!("正在加载: {} ({} 字节)", handle.name, handle.size());
                handles.push(handle);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(handles)
}

/// 加载单个文件
pub async fn load_file(path: &Path) -> AppResult<FileHandle> {
    FileHandle::from_path(path).await
}
