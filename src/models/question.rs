use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 答案缺失时的占位文本
pub const NO_ANSWER_PLACEHOLDER: &str = "No answer provided";

/// 从 AI 回复中解析出的一道题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    /// 题号（来自原文，不做校验，可能重复或乱序）
    pub id: u64,
    pub question: String,
    pub answer: String,
}

impl QuestionAnswer {
    /// 创建题目，答案为空时使用占位文本
    pub fn new(id: u64, question: impl Into<String>, answer: impl Into<String>) -> Self {
        let answer = answer.into();
        Self {
            id,
            question: question.into(),
            answer: if answer.is_empty() {
                NO_ANSWER_PLACEHOLDER.to_string()
            } else {
                answer
            },
        }
    }

    pub fn has_answer(&self) -> bool {
        self.answer != NO_ANSWER_PLACEHOLDER
    }
}

impl fmt::Display for QuestionAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question {}: {}\nAnswer: {}", self.id, self.question, self.answer)
    }
}

/// 题目难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("未知难度: {}", other)),
        }
    }
}

/// AI 请求模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiMode {
    /// 按主题批量出题
    Generate,
    /// 改写单道题的数值
    Variant,
}
