//! 顺序上传管线 - 编排层
//!
//! ## 职责
//!
//! 1. **前置检查**：工作集为空时直接返回错误，不发起任何请求
//! 2. **串行上传**：按插入顺序逐个交给 `UploadFlow`，并发度固定为 1
//! 3. **节流**：每个文件结束后等待固定间隔，与成败无关
//! 4. **统计**：汇总成功/失败数量并推送 `Finished` 事件
//!
//! 单个文件失败不会中断整批；没有重试，也没有取消。

use crate::clients::UploadTransport;
use crate::error::{AppResult, UploadError};
use crate::models::{FileSet, Session, UploadStatus, UploadSummary};
use crate::orchestrator::throttle::UploadThrottle;
use crate::workflow::{UploadCtx, UploadEvent, UploadFlow};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

pub struct UploadPipeline<T: UploadTransport> {
    transport: T,
    throttle: UploadThrottle,
}

impl<T: UploadTransport> UploadPipeline<T> {
    pub fn new(transport: T, throttle: UploadThrottle) -> Self {
        Self {
            transport,
            throttle,
        }
    }

    pub fn throttle(&self) -> &UploadThrottle {
        &self.throttle
    }

    /// 上传工作集中的全部文件
    pub async fn run(&self, files: &mut FileSet, session: &Session) -> AppResult<UploadSummary> {
        self.run_with_events(files, session, None).await
    }

    /// 上传工作集中的全部文件，并把状态变化推送给观察者
    ///
    /// 不论文件之前的状态如何都会重新上传
    pub async fn run_with_events(
        &self,
        files: &mut FileSet,
        session: &Session,
        events: Option<&UnboundedSender<UploadEvent>>,
    ) -> AppResult<UploadSummary> {
        if files.is_empty() {
            warn!("⚠️ 没有待上传的文件");
            return Err(UploadError::NoFiles.into());
        }

        let _batch = self.throttle.begin_batch().inspect_err(|_| {
            warn!("⚠️ 已有一批上传正在进行，本次请求被拒绝");
        })?;

        let total = files.len();
        info!("📦 开始上传 {} 个文件", total);
        if !session.is_authenticated() {
            warn!("未携带登录凭证，请求仍会发出");
        }

        let flow = UploadFlow::new(&self.transport, session, events);
        let mut succeeded = 0;
        let mut failed = 0;

        for (idx, file) in files.iter_mut().enumerate() {
            let ctx = UploadCtx::new(file.id, file.name(), idx + 1, total);

            match flow.run(file, &ctx).await {
                UploadStatus::Success => succeeded += 1,
                _ => failed += 1,
            }

            self.throttle.pace().await;
        }

        let summary = UploadSummary::from_counts(succeeded, failed);
        info!("✓ 上传结束: {}", summary.message());
        flow.emit(UploadEvent::Finished(summary));

        Ok(summary)
    }
}
