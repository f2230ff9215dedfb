//! 提示词构建 - 业务能力层

use crate::models::Difficulty;

/// 单次最多生成的题目数
pub const MAX_QUESTIONS: u32 = 20;

/// 构建出题提示词
///
/// 题目数量限制在 `1..=MAX_QUESTIONS`；输出格式与 `response_parser` 约定的标记一致
pub fn build_generate_prompt(topic: &str, num_questions: u32, difficulty: Difficulty) -> String {
    let num_questions = num_questions.clamp(1, MAX_QUESTIONS);

    format!(
        r#"You are an exam question generator.
Using the data provided, generate {num} unique questions on the topic {topic} at {difficulty} difficulty level.

For each question:

Make sure it is relevant to the topic and difficulty specified.
Provide a clear, correct answer immediately after the question.
Do not include any additional explanation or commentary.

Format:
**Question <question number>:**
<Question Text>
**Answer <answer number>:**
<Answer Text>"#,
        num = num_questions,
        topic = topic.trim(),
        difficulty = difficulty,
    )
}

/// 构建"改写题目数值"的提示词
pub fn build_variant_prompt(question: &str) -> String {
    format!(
        r#"You are a word problem transformer.
1. Take the given problem described in {question}.
2. Generate a new version of the question by only changing the numeric values (slightly).
3. Preserve the logical structure of the question.
4. Then, compute and display the correct answer to the new question.
5. Only output the transformed question and its answer.

Format:
Question:
<your transformed version of the question>
Answer:
<correct answer to the transformed question>"#,
        question = question.trim(),
    )
}
