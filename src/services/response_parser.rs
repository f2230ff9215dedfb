//! AI 回复解析 - 业务能力层
//!
//! 把一段松散格式的 AI 文本拆成有序的题目列表：
//!
//! ```text
//! **Question 1:**
//! <题干>
//! **Answer 1:**
//! <答案>
//! ```
//!
//! 题号原样透传，不校验是否连续或唯一。

use crate::models::QuestionAnswer;
use regex::Regex;
use std::sync::LazyLock;

static QUESTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Question ([0-9]+):\*\*").expect("question marker pattern"));

static ANSWER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Answer(?: [0-9]+)?:\*\*").expect("answer marker pattern"));

/// 题目标记在原文中的位置
struct Marker {
    start: usize,
    end: usize,
    number: Option<u64>,
}

/// 解析 AI 回复
///
/// 找不到任何 `**Question N:**` 标记时返回空列表；不会因格式问题报错
pub fn parse_questions(response: &str) -> Vec<QuestionAnswer> {
    if response.is_empty() {
        return Vec::new();
    }

    let markers: Vec<Marker> = QUESTION_MARKER
        .captures_iter(response)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Marker {
                start: whole.start(),
                end: whole.end(),
                // 溢出等解析失败时回退为序号
                number: caps.get(1).and_then(|n| n.as_str().parse().ok()),
            })
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let section_end = markers.get(i + 1).map_or(response.len(), |next| next.start);
            let section = response[marker.end..section_end].trim();
            let (question, answer) = split_section(section);
            let id = marker.number.unwrap_or(i as u64 + 1);

            QuestionAnswer::new(id, question, answer)
        })
        .collect()
}

/// 拆分单个题目段落为（题干，答案）
fn split_section(section: &str) -> (String, String) {
    if let Some(found) = ANSWER_MARKER.find(section) {
        let question = section[..found.start()].trim();
        let answer = section[found.end()..].trim();
        return (question.to_string(), answer.to_string());
    }

    // 没有答案标记：第一行非空行是题干，其余非空行是答案
    let mut lines = section.split('\n').filter(|line| !line.trim().is_empty());
    let question = lines.next().unwrap_or_default().to_string();
    let answer = lines.collect::<Vec<_>>().join("\n").trim().to_string();

    (question, answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NO_ANSWER_PLACEHOLDER;

    #[test]
    fn test_empty_input() {
        assert!(parse_questions("").is_empty());
    }

    #[test]
    fn test_no_markers() {
        assert!(parse_questions("Here are some questions:\n1. What?\n2. Why?").is_empty());
        // 缺少加粗标记不算
        assert!(parse_questions("Question 1:\nWhat is 2+2?").is_empty());
    }

    #[test]
    fn test_single_question_with_answer_marker() {
        let parsed = parse_questions("**Question 1:**\nWhat is 2+2?\n**Answer:**\n4");
        assert_eq!(parsed, vec![QuestionAnswer::new(1, "What is 2+2?", "4")]);
    }

    #[test]
    fn test_numbered_answer_marker_need_not_match() {
        let parsed = parse_questions("**Question 2:**\nCapital of France?\n**Answer 7:**\nParis");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, 2);
        assert_eq!(parsed[0].question, "Capital of France?");
        assert_eq!(parsed[0].answer, "Paris");
    }

    #[test]
    fn test_line_fallback_without_answer_markers() {
        let parsed = parse_questions("**Question 1:**\nQ1 line1\nextra\n**Question 2:**\nQ2 only");
        assert_eq!(parsed.len(), 2);

        assert_eq!(parsed[0].id, 1);
        assert_eq!(parsed[0].question, "Q1 line1");
        assert_eq!(parsed[0].answer, "extra");

        assert_eq!(parsed[1].id, 2);
        assert_eq!(parsed[1].question, "Q2 only");
        assert_eq!(parsed[1].answer, NO_ANSWER_PLACEHOLDER);
    }

    #[test]
    fn test_line_fallback_skips_blank_lines() {
        let parsed = parse_questions("**Question 1:**\n\nFirst\n\n  \nsecond\nthird\n");
        assert_eq!(parsed[0].question, "First");
        assert_eq!(parsed[0].answer, "second\nthird");
    }

    #[test]
    fn test_bare_marker() {
        let parsed = parse_questions("**Question 5:**");
        assert_eq!(parsed, vec![QuestionAnswer::new(5, "", NO_ANSWER_PLACEHOLDER)]);
    }

    #[test]
    fn test_consecutive_markers() {
        let parsed = parse_questions("**Question 1:****Question 2:**\nHow?\n**Answer:** So.");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].question, "");
        assert_eq!(parsed[0].answer, NO_ANSWER_PLACEHOLDER);
        assert_eq!(parsed[1].question, "How?");
        assert_eq!(parsed[1].answer, "So.");
    }

    #[test]
    fn test_empty_answer_after_marker_uses_placeholder() {
        let parsed = parse_questions("**Question 1:**\nWhy?\n**Answer 1:**\n   ");
        assert_eq!(parsed[0].question, "Why?");
        assert_eq!(parsed[0].answer, NO_ANSWER_PLACEHOLDER);
    }

    #[test]
    fn test_overflowing_number_falls_back_to_ordinal() {
        let text = "**Question 1:**\nA\n**Question 99999999999999999999999:**\nB";
        let parsed = parse_questions(text);
        assert_eq!(parsed[0].id, 1);
        assert_eq!(parsed[1].id, 2);
    }

    #[test]
    fn test_non_ascii_digits_are_not_markers() {
        // 阿拉伯-印度数字和全角数字都不算题号
        assert!(parse_questions("**Question \u{0661}:**\nWhat?\n**Answer:**\nX").is_empty());
        assert!(parse_questions("**Question \u{FF13}:**\nWhat?").is_empty());

        let parsed = parse_questions("**Question 1:**\nWhat?\n**Answer \u{0663}:**\nX");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].question, "What?");
        assert_eq!(parsed[0].answer, "**Answer \u{0663}:**\nX");
    }

    #[test]
    fn test_out_of_order_and_duplicate_ids_pass_through() {
        let text = "**Question 3:**\nA\n**Question 1:**\nB\n**Question 1:**\nC";
        let ids: Vec<u64> = parse_questions(text).iter().map(|qa| qa.id).collect();
        assert_eq!(ids, vec![3, 1, 1]);
    }

    #[test]
    fn test_preamble_before_first_marker_is_ignored() {
        let text = "Sure! Here you go.\n\n**Question 1:**\nWhat?\n**Answer 1:**\nThat.";
        let parsed = parse_questions(text);
        assert_eq!(parsed, vec![QuestionAnswer::new(1, "What?", "That.")]);
    }

    #[test]
    fn test_multiline_answer_is_kept() {
        let text = "**Question 1:**\nSolve x+1=3\n**Answer 1:**\nx = 2\nbecause 3 - 1 = 2";
        let parsed = parse_questions(text);
        assert_eq!(parsed[0].answer, "x = 2\nbecause 3 - 1 = 2");
    }

    #[test]
    fn test_parse_is_repeatable() {
        let text = "**Question 1:**\nA\n**Answer:**\nB\n**Question 2:**\nC";
        assert_eq!(parse_questions(text), parse_questions(text));
    }
}
