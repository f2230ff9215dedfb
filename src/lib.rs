//! # Edu Bank Client
//!
//! 教育题库后端的 Rust 客户端：解析 AI 生成的题目文本，逐个上传数据集文件
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP 客户端），只暴露能力
//! - `HttpExecutor` - 唯一的 client owner，提供 JSON / multipart POST 能力
//!
//! ### ② 能力层（Clients / Services）
//! - `clients/` - 与后端接口一一对应：`AiClient`、`AuthClient`、`UploadClient`
//! - `services/` - `response_parser` 解析 AI 回复，`QuestionService` 负责出题
//!
//! ### ③ 流程层（Workflow）
//! - `UploadFlow` - 单个文件的上传流程（uploading → success / error）
//!
//! ### ④ 编排层（Orchestration）
//! - `UploadPipeline` - 串行上传整个工作集并汇总
//! - `App` - 命令行程序入口
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{AiClient, AuthClient, UploadClient, UploadResponse, UploadTransport};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::HttpExecutor;
pub use models::{
    BatchStatus, FileHandle, FileId, FileSet, QuestionAnswer, Session, UploadStatus, UploadSummary,
};
pub use orchestrator::{App, UploadPipeline, UploadThrottle};
pub use services::{parse_questions, GenerateRequest, QuestionService};
pub use workflow::{UploadEvent, UploadFlow};
