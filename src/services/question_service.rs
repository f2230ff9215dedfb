/// 出题服务
///
/// 负责校验输入、构建提示词、调用 AI 接口并解析结果
use crate::clients::AiClient;
use crate::error::{AppResult, InputError};
use crate::models::{AiMode, Difficulty, QuestionAnswer, Session};
use crate::services::prompt_builder::{build_generate_prompt, build_variant_prompt};
use crate::services::response_parser::parse_questions;
use crate::utils::truncate_text;
use tracing::{debug, info, warn};

/// 出题请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub topic: String,
    pub num_questions: u32,
    pub difficulty: Difficulty,
}

impl GenerateRequest {
    pub fn new(topic: impl Into<String>, num_questions: u32, difficulty: Difficulty) -> Self {
        Self {
            topic: topic.into(),
            num_questions,
            difficulty,
        }
    }
}

/// 出题服务
pub struct QuestionService {
    ai_client: AiClient,
}

impl QuestionService {
    pub fn new(ai_client: AiClient) -> Self {
        Self { ai_client }
    }

    /// 按主题生成题目
    ///
    /// 主题为空时直接返回输入错误，不发起请求。
    /// AI 回复无法识别时返回空列表。
    pub async fn generate_questions(
        &self,
        request: &GenerateRequest,
        session: &Session,
    ) -> AppResult<Vec<QuestionAnswer>> {
        if request.topic.trim().is_empty() {
            return Err(InputError::EmptyTopic.into());
        }

        info!(
            "🤖 正在生成 {} 道 {} 难度的题目，主题: {}",
            request.num_questions, request.difficulty, request.topic
        );

        let prompt = build_generate_prompt(&request.topic, request.num_questions, request.difficulty);
        let answer = self.ai_client.ask(&prompt, AiMode::Generate, session).await?;
        debug!("AI 原始回复: {}", truncate_text(&answer, 200));

        let questions = parse_questions(&answer);
        if questions.is_empty() {
            warn!("⚠️ AI 回复中没有可识别的题目格式");
        } else {
            info!("✓ 成功解析 {} 道题目", questions.len());
        }

        Ok(questions)
    }

    /// 生成题目变体（只改数值），原样返回 AI 文本
    pub async fn generate_variant(&self, question: &str, session: &Session) -> AppResult<String> {
        if question.trim().is_empty() {
            return Err(InputError::EmptyVariantQuestion.into());
        }

        info!("🔁 正在生成题目变体: {}", truncate_text(question, 50));

        let prompt = build_variant_prompt(question);
        let answer = self.ai_client.ask(&prompt, AiMode::Variant, session).await?;

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::AppError;
    use crate::infrastructure::HttpExecutor;
    use std::sync::Arc;

    fn offline_service() -> QuestionService {
        // 端口 9 (discard) 不会有服务，若发生请求测试会拿到 Api 错误而非 Input 错误
        let executor = Arc::new(HttpExecutor::with_client(reqwest::Client::new(), "http://127.0.0.1:9"));
        QuestionService::new(AiClient::new(executor, &Config::default()))
    }

    #[tokio::test]
    async fn test_empty_topic_is_rejected() {
        let request = GenerateRequest::new("   ", 5, Difficulty::Medium);
        let err = offline_service()
            .generate_questions(&request, &Session::anonymous())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Input(InputError::EmptyTopic)));
    }

    #[tokio::test]
    async fn test_empty_variant_question_is_rejected() {
        let err = offline_service()
            .generate_variant("", &Session::anonymous())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Input(InputError::EmptyVariantQuestion)));
    }
}
