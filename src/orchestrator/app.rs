//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：写运行日志文件头、创建 HTTP 执行器和各客户端
//! 2. **获取会话**：优先使用配置中的 token，否则按配置的账号登录一次
//! 3. **批量上传**：扫描上传目录，加入工作集后交给 `UploadPipeline`
//! 4. **出题**：配置了主题时生成题目并输出
//!
//! 会话在这里获取一次，之后显式传给每个请求。

use crate::clients::{AiClient, AuthClient, UploadClient};
use crate::config::Config;
use crate::infrastructure::HttpExecutor;
use crate::models::{self, format_file_size, Difficulty, FileSet, Session, UploadSummary};
use crate::orchestrator::throttle::UploadThrottle;
use crate::orchestrator::upload_pipeline::UploadPipeline;
use crate::services::{GenerateRequest, QuestionService};
use crate::utils::logging;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    session: Session,
    pipeline: UploadPipeline<UploadClient>,
    question_service: QuestionService,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::init_log_file(&config.output_log_file)
            .with_context(|| format!("无法写入日志文件: {}", config.output_log_file))?;

        logging::log_startup(&config.api_base_url, config.upload_delay_ms);

        let executor = Arc::new(HttpExecutor::new(&config)?);
        let session = acquire_session(&config, AuthClient::new(executor.clone(), &config)).await?;

        let pipeline = UploadPipeline::new(
            UploadClient::new(executor.clone(), &config),
            UploadThrottle::from_millis(config.upload_delay_ms),
        );
        let question_service = QuestionService::new(AiClient::new(executor, &config));

        Ok(Self {
            config,
            session,
            pipeline,
            question_service,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        if Path::new(&self.config.upload_folder).is_dir() {
            let mut files = self.load_files().await?;

            if files.is_empty() {
                warn!("⚠️ 上传目录中没有文件，跳过上传");
            } else {
                let summary = self.pipeline.run(&mut files, &self.session).await?;
                self.report_upload(&files, &summary);
            }
        } else {
            info!("上传目录 {} 不存在，跳过上传", self.config.upload_folder);
        }

        if let Some(topic) = self.config.qa_topic.as_deref() {
            self.generate_questions(topic).await?;
        }

        Ok(())
    }

    /// 加载待上传文件并放入工作集
    async fn load_files(&self) -> Result<FileSet> {
        info!("\n📁 正在扫描待上传的文件...");
        let handles = models::load_folder(&self.config.upload_folder).await?;

        let mut files = FileSet::new();
        let outcome = files.add_files(handles);
        if outcome.duplicates > 0 {
            warn!("忽略 {} 个重复文件", outcome.duplicates);
        }
        if let Some(notice) = outcome.notice() {
            warn!("{}", notice);
        }

        logging::log_files_loaded(files.len(), &self.config.upload_folder);
        Ok(files)
    }

    fn report_upload(&self, files: &FileSet, summary: &UploadSummary) {
        for file in files.iter() {
            info!(
                "  {} {} ({}): {}",
                status_icon(file.status),
                file.name(),
                format_file_size(file.handle.size()),
                file.status
            );
        }
        logging::print_final_stats(summary, &self.config.output_log_file);
    }

    async fn generate_questions(&self, topic: &str) -> Result<()> {
        let difficulty = self
            .config
            .qa_difficulty
            .parse::<Difficulty>()
            .unwrap_or_else(|e| {
                warn!("{}，使用默认难度", e);
                Difficulty::default()
            });
        let request = GenerateRequest::new(topic, self.config.qa_num_questions, difficulty);

        match self
            .question_service
            .generate_questions(&request, &self.session)
            .await
        {
            Ok(questions) => {
                info!("\n{}", "=".repeat(60));
                info!("📝 生成题目 {} 道", questions.len());
                for qa in &questions {
                    info!("{}\n", qa);
                }
                info!("{}", "=".repeat(60));
                Ok(())
            }
            Err(e) if e.is_user_facing() => {
                warn!("{}", e);
                Ok(())
            }
            Err(e) => {
                error!("Failed to generate questions. Please try again. ({})", e);
                Err(e.into())
            }
        }
    }
}

/// 获取会话：已配置 token 时直接使用，否则尝试登录，都没有时匿名
async fn acquire_session(config: &Config, auth: AuthClient) -> Result<Session> {
    if let Some(token) = config.auth_token.clone() {
        return Ok(Session::new(Some(token), config.auth_email.clone()));
    }

    match (&config.login_email, &config.login_password) {
        (Some(email), Some(password)) => {
            let session = auth.login(email, password).await.context("登录失败")?;
            Ok(session)
        }
        _ => {
            warn!("⚠️ 未配置登录凭证，将以匿名方式请求");
            Ok(Session::anonymous())
        }
    }
}

fn status_icon(status: models::UploadStatus) -> &'static str {
    match status {
        models::UploadStatus::Success => "✅",
        models::UploadStatus::Error => "❌",
        models::UploadStatus::Uploading => "⏳",
        models::UploadStatus::Pending => "•",
    }
}
