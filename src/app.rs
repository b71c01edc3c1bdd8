//! 应用编排
//!
//! 单线程、同步的批处理流程：读入两份 PDF 文本 → 顺序运行两个解析器
//! → 组装 → 一次性写出。两份提取都成功时输出文档一定会被写出，
//! 非致命问题以诊断形式在最后统一报告。

use crate::assembler::QuizAssembler;
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::extractor;
use crate::models::QuizMeta;
use crate::parsers::{AnswerParser, QuestionParser};
use crate::utils::logging::{init_log_file, log_startup, print_final_stats, truncate_text};
use crate::writer;
use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config.questions_pdf_path, &config.answers_pdf_path);

        Ok(Self { config })
    }

    /// 运行应用主逻辑
    pub fn run(&self) -> Result<()> {
        // 1. 提取两份 PDF 的文本（失败即中止）
        info!("\n📁 正在提取题目 PDF 文本...");
        let questions_text = extractor::extract_text_from_page(
            Path::new(&self.config.questions_pdf_path),
            self.config.start_page_questions,
        )?;

        info!("📁 正在提取答案 PDF 文本...");
        let answers_text = extractor::extract_text_from_page(
            Path::new(&self.config.answers_pdf_path),
            self.config.start_page_answers,
        )?;

        let mut diagnostics = Diagnostics::new();

        // 2. 解析题目
        let question_parser = QuestionParser::new()?;
        let questions = question_parser.parse(&questions_text, &mut diagnostics);
        info!("✓ 解析到 {} 道题目", questions.len());

        if self.config.verbose_logging {
            for question in &questions {
                debug!(
                    "题干: {} | 选项数: {}",
                    truncate_text(&question.question, 80),
                    question.options.len()
                );
            }
        }

        // 3. 解析答案
        let answer_parser = AnswerParser::new()?;
        let answers = answer_parser.parse(&answers_text, &mut diagnostics);
        info!("✓ 解析到 {} 条答案记录", answers.len());

        // 4. 组装并写出
        let assembler = QuizAssembler::new(QuizMeta::from(&self.config))?;
        let quiz = assembler.assemble(&questions, &answers, &mut diagnostics);

        writer::write_quiz_document(Path::new(&self.config.output_json_path), &quiz)?;

        // 5. 报告诊断和统计
        diagnostics.report();

        print_final_stats(
            questions.len(),
            answers.len(),
            quiz.question_list.len(),
            diagnostics.len(),
            &self.config.output_json_path,
        );

        Ok(())
    }
}
