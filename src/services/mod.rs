pub mod prompt_builder;
pub mod question_service;
pub mod response_parser;

pub use question_service::{GenerateRequest, QuestionService};
pub use response_parser::parse_questions;
