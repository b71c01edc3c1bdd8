//! # Quiz Extract
//!
//! 一个将固定版式的试卷 PDF 转换为结构化测验 JSON 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用简单的四层流水线架构：
//!
//! ### ① 提取层（Extraction）
//! - `extractor` - 从指定起始页开始提取 PDF 文本（lopdf）
//!
//! ### ② 解析层（Parsing）
//! - `parsers/question_parser` - 扫描题目文本，产出有序的题目记录
//! - `parsers/answer_parser` - 扫描答案文本，产出 id → 答案记录的映射
//!
//! ### ③ 组装层（Assembly）
//! - `assembler` - 按题目 id 合并题目与答案，产出最终测验文档
//! - `diagnostics` - 收集非致命问题（缺失答案、无法解析的 id 等）供人工复查
//!
//! ### ④ 输出层（Output）
//! - `writer` - 将测验文档序列化为 JSON 文件
//!
//! ## 数据流
//!
//! ```text
//! 题目 PDF ─→ extractor ─→ question_parser ─→ Vec<QuestionRecord> ─┐
//!                                                                  ├─→ assembler ─→ writer
//! 答案 PDF ─→ extractor ─→ answer_parser ──→ HashMap<id, Answer> ──┘
//! ```

pub mod app;
pub mod assembler;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extractor;
pub mod logger;
pub mod models;
pub mod parsers;
pub mod utils;
pub mod writer;

// 重新导出常用类型
pub use app::App;
pub use assembler::QuizAssembler;
pub use config::Config;
pub use diagnostics::{Diagnostic, Diagnostics, Stage};
pub use error::{AppError, AppResult};
pub use models::{AnswerRecord, QuestionRecord, QuizDocument, QuizEntry, QuizMeta};
pub use parsers::{AnswerParser, QuestionParser};
