//! 单文件上传流程 - 流程层
//!
//! 流程顺序：
//! 1. 状态 → uploading（通知观察者）
//! 2. 调用传输层上传
//! 3. 状态 → success / error（通知观察者）
//!
//! 失败只体现在状态上，不向上返回错误，也不重试

use tokio::sync::mpsc::UnboundedSender;
use tracing::{error, info};

use crate::clients::UploadTransport;
use crate::models::{FileId, Session, UploadStatus, UploadSummary, UploadableFile};
use crate::workflow::upload_ctx::UploadCtx;

/// 上传过程中推送给观察者（例如界面）的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    StatusChanged { id: FileId, status: UploadStatus },
    Finished(UploadSummary),
}

/// 单文件上传流程
///
/// - 不持有任何资源，只借用传输层和会话
/// - 只处理单个文件
pub struct UploadFlow<'a, T: UploadTransport + ?Sized> {
    transport: &'a T,
    session: &'a Session,
    events: Option<&'a UnboundedSender<UploadEvent>>,
}

impl<'a, T: UploadTransport + ?Sized> UploadFlow<'a, T> {
    pub fn new(
        transport: &'a T,
        session: &'a Session,
        events: Option<&'a UnboundedSender<UploadEvent>>,
    ) -> Self {
        Self {
            transport,
            session,
            events,
        }
    }

    /// 上传一个文件，返回终态（Success 或 Error）
    pub async fn run(&self, file: &mut UploadableFile, ctx: &UploadCtx) -> UploadStatus {
        self.set_status(file, UploadStatus::Uploading);
        info!("{} ⬆️ 开始上传 ({} 字节)", ctx, file.handle.size());

        let status = match self.transport.upload(&file.handle, self.session).await {
            Ok(response) if response.is_success() => {
                info!("{} ✓ 上传成功", ctx);
                UploadStatus::Success
            }
            Ok(response) => {
                error!(
                    "{} ❌ 后端返回错误 (status {}): {}",
                    ctx, response.status, response.body
                );
                UploadStatus::Error
            }
            Err(e) => {
                error!("{} ❌ 上传失败: {}", ctx, e);
                UploadStatus::Error
            }
        };

        self.set_status(file, status);
        status
    }

    fn set_status(&self, file: &mut UploadableFile, status: UploadStatus) {
        file.status = status;
        self.emit(UploadEvent::StatusChanged {
            id: file.id,
            status,
        });
    }

    pub(crate) fn emit(&self, event: UploadEvent) {
        if let Some(events) = self.events {
            // 观察者已退出时忽略
            let _ = events.send(event);
        }
    }
}
