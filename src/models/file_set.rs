//! 待上传文件工作集
//!
//! 按插入顺序保存文件，插入时按（文件名，字节长度）去重

use super::upload::{FileHandle, FileId, UploadStatus, UploadableFile};
use tracing::debug;

/// 全部文件都已存在时给用户的提示
pub const DUPLICATE_NOTICE: &str = "Some files were already selected.";

/// 一次添加操作的结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// 新加入的文件ID（按插入顺序）
    pub added: Vec<FileId>,
    /// 被丢弃的重复文件数
    pub duplicates: usize,
}

impl AddOutcome {
    /// 提供了文件但全部重复时返回提示文本
    pub fn notice(&self) -> Option<&'static str> {
        if self.added.is_empty() && self.duplicates > 0 {
            Some(DUPLICATE_NOTICE)
        } else {
            None
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct FileSet {
    files: Vec<UploadableFile>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加文件，已存在的同名同大小文件会被静默丢弃
    ///
    /// 已有条目的状态不受影响
    pub fn add_files(&mut self, handles: impl IntoIterator<Item = FileHandle>) -> AddOutcome {
        let mut outcome = AddOutcome::default();

        for handle in handles {
            if self.files.iter().any(|f| f.same_file(&handle)) {
                debug!("忽略重复文件: {} ({} 字节)", handle.name, handle.size());
                outcome.duplicates += 1;
                continue;
            }

            let file = UploadableFile::new(handle);
            outcome.added.push(file.id);
            self.files.push(file);
        }

        outcome
    }

    /// 按ID移除文件，返回是否移除成功
    pub fn remove(&mut self, id: FileId) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        self.files.len() != before
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UploadableFile> {
        self.files.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut UploadableFile> {
        self.files.iter_mut()
    }

    pub fn get(&self, id: FileId) -> Option<&UploadableFile> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn status_of(&self, id: FileId) -> Option<UploadStatus> {
        self.get(id).map(|f| f.status)
    }

    /// 统计处于某一状态的文件数
    pub fn count_with_status(&self, status: UploadStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(name: &str, size: usize) -> FileHandle {
        FileHandle::new(name, vec![0u8; size])
    }

    #[test]
    fn test_duplicate_is_rejected() {
        let mut set = FileSet::new();
        let first = set.add_files([handle("a.csv", 10)]);
        assert_eq!(first.added.len(), 1);

        let second = set.add_files([handle("a.csv", 10)]);
        assert!(second.added.is_empty());
        assert_eq!(second.duplicates, 1);
        assert_eq!(second.notice(), Some(DUPLICATE_NOTICE));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_same_name_different_size_is_accepted() {
        let mut set = FileSet::new();
        set.add_files([handle("a.csv", 10)]);
        let outcome = set.add_files([handle("a.csv", 11), handle("b.csv", 10)]);

        assert_eq!(outcome.added.len(), 2);
        assert_eq!(outcome.notice(), None);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_duplicate_within_one_batch() {
        let mut set = FileSet::new();
        let outcome = set.add_files([handle("a.csv", 10), handle("a.csv", 10)]);

        assert_eq!(outcome.added.len(), 1);
        assert_eq!(outcome.duplicates, 1);
        // 部分新增时不提示
        assert_eq!(outcome.notice(), None);
    }

    #[test]
    fn test_duplicate_does_not_touch_existing_status() {
        let mut set = FileSet::new();
        let id = set.add_files([handle("a.csv", 10)]).added[0];
        for file in set.iter_mut() {
            file.status = UploadStatus::Success;
        }

        set.add_files([handle("a.csv", 10)]);
        assert_eq!(set.status_of(id), Some(UploadStatus::Success));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut set = FileSet::new();
        let ids = set.add_files([handle("a", 1), handle("b", 2), handle("c", 3)]).added;

        assert!(set.remove(ids[1]));
        assert!(!set.remove(ids[1]));
        let names: Vec<&str> = set.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["a", "c"]);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_new_entries_are_pending() {
        let mut set = FileSet::new();
        set.add_files([handle("a", 1), handle("b", 2)]);
        assert_eq!(set.count_with_status(UploadStatus::Pending), 2);
    }
}
