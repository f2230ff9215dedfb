//! 上传节流策略
//!
//! 两条规则：
//! - 同一时刻最多一批上传在进行（单许可信号量，拿不到许可立即失败）
//! - 每个文件尝试结束后固定等待一段时间再开始下一个

use crate::error::UploadError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::time::sleep;
use tracing::debug;

/// 持有期间表示一批上传正在进行
#[derive(Debug)]
pub struct BatchPermit {
    _permit: OwnedSemaphorePermit,
}

#[derive(Debug, Clone)]
pub struct UploadThrottle {
    delay: Duration,
    batch_slot: Arc<Semaphore>,
}

impl UploadThrottle {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            batch_slot: Arc::new(Semaphore::new(1)),
        }
    }

    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 占用批次槽位，已有批次在进行时返回 `AlreadyRunning`
    pub fn begin_batch(&self) -> Result<BatchPermit, UploadError> {
        let permit = self
            .batch_slot
            .clone()
            .try_acquire_owned()
            .map_err(|_| UploadError::AlreadyRunning)?;
        Ok(BatchPermit { _permit: permit })
    }

    /// 是否有批次正在进行
    pub fn is_busy(&self) -> bool {
        self.batch_slot.available_permits() == 0
    }

    /// 两次上传之间的固定等待
    pub async fn pace(&self) {
        if self.delay.is_zero() {
            return;
        }
        debug!("等待 {:?} 后继续", self.delay);
        sleep(self.delay).await;
    }
}

impl Default for UploadThrottle {
    fn default() -> Self {
        Self::from_millis(300)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_single_batch_slot() {
        let throttle = UploadThrottle::from_millis(0);
        let permit = throttle.begin_batch().unwrap();
        assert!(throttle.is_busy());
        assert_eq!(throttle.begin_batch().unwrap_err(), UploadError::AlreadyRunning);

        drop(permit);
        assert!(!throttle.is_busy());
        assert!(throttle.begin_batch().is_ok());
    }

    #[test]
    fn test_clones_share_slot() {
        let throttle = UploadThrottle::from_millis(0);
        let other = throttle.clone();
        let _permit = throttle.begin_batch().unwrap();
        assert!(other.begin_batch().is_err());
    }

    #[tokio::test]
    async fn test_pace_waits_for_delay() {
        let throttle = UploadThrottle::from_millis(30);
        let start = Instant::now();
        throttle.pace().await;
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
