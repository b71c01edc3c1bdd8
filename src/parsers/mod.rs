//! 解析层
//!
//! 把页面提取出的非结构化文本变成结构化记录：
//! - `question_parser` - 题目文本 → 有序题目记录
//! - `answer_parser` - 答案文本 → id → 答案记录映射

pub mod answer_parser;
pub mod question_parser;

pub use answer_parser::AnswerParser;
pub use question_parser::QuestionParser;
