//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 管理应用生命周期（初始化、运行）
//! - 获取会话并向下传递
//! - 输出全局统计信息
//!
//! ### `upload_pipeline` - 顺序上传管线
//! - 遍历文件工作集（FileSet）
//! - 通过 `throttle` 保证同一时刻只有一批、每批内逐个上传
//!
//! ## 层次关系
//!
//! ```text
//! app
//!     ↓
//! upload_pipeline (处理 FileSet)
//!     ↓
//! workflow::UploadFlow (处理单个文件)
//!     ↓
//! clients (能力层：upload / ai / auth)
//!     ↓
//! infrastructure (基础设施：HttpExecutor)
//! ```

pub mod app;
pub mod throttle;
pub mod upload_pipeline;

pub use app::App;
pub use throttle::{BatchPermit, UploadThrottle};
pub use upload_pipeline::UploadPipeline;
