//! 组装层
//!
//! 按归一化的题目 id 把题目记录与答案记录合并为最终测验文档。
//! 缺失答案、无法解析的 id 都记为诊断，不中止运行。

use crate::diagnostics::Diagnostics;
use crate::models::{AnswerRecord, QuestionRecord, QuizDocument, QuizEntry, QuizMeta};
use anyhow::Result;
use regex::Regex;
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::debug;

/// 测验组装器
pub struct QuizAssembler {
    /// 从标题锚点提取归一化 id："Domanda" 标记后的字母前缀 + 数字
    id_re: Regex,
    meta: QuizMeta,
}

impl QuizAssembler {
    pub fn new(meta: QuizMeta) -> Result<Self> {
        Ok(Self {
            id_re: Regex::new(r"Domanda\s+([A-Z]?\d+)")?,
            meta,
        })
    }

    /// 合并题目与答案，产出最终测验文档
    ///
    /// # 参数
    /// - `questions`: 按源文本顺序排列的题目记录
    /// - `answers`: 题目 id → 答案记录的映射
    /// - `diagnostics`: 诊断收集器
    ///
    /// # 返回
    /// questionList 保持题目在源文本中的出现顺序。id 可解析的题目
    /// 永远不会被丢弃；没有匹配答案时 correct 为 []、explanation 为 {}
    pub fn assemble(
        &self,
        questions: &[QuestionRecord],
        answers: &HashMap<String, AnswerRecord>,
        diagnostics: &mut Diagnostics,
    ) -> QuizDocument {
        let mut question_list = Vec::with_capacity(questions.len());

        for record in questions {
            // 归一化题目 id：去掉 "Domanda" 标记，保留字母前缀 + 数字
            let Some(caps) = self.id_re.captures(&record.title) else {
                diagnostics.unparsable_question_id(&record.title);
                continue;
            };
            let question_id = caps[1].to_string();

            let (correct, explanation) = match answers.get(&question_id) {
                Some(answer) => {
                    debug!(
                        "题目 {} 匹配成功: 正确答案 {}",
                        question_id, answer.correct
                    );
                    (
                        Value::String(answer.correct.clone()),
                        json!({ "full": answer.explanation }),
                    )
                }
                None => {
                    diagnostics.unmatched_answer(&question_id);
                    (json!([]), json!({}))
                }
            };

            question_list.push(QuizEntry {
                question: record.question.clone(),
                options: record.options.clone(),
                correct,
                explanation,
            });
        }

        QuizDocument {
            id: self.meta.id.clone(),
            title: self.meta.title.clone(),
            time: self.meta.time.clone(),
            question_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionRecord;

    fn test_meta() -> QuizMeta {
        QuizMeta {
            id: "1".to_string(),
            title: "ISTQB Sample Exam".to_string(),
            time: "60 minutes".to_string(),
        }
    }

    fn question(title: &str, options: Vec<&str>) -> QuestionRecord {
        QuestionRecord::new(
            title,
            format!("{} testo della domanda", title),
            options.into_iter().map(String::from).collect(),
        )
    }

    fn answer(correct: &str, explanation: &str) -> AnswerRecord {
        AnswerRecord {
            correct: correct.to_string(),
            explanation: explanation.to_string(),
        }
    }

    #[test]
    fn test_matched_question_copies_answer_fields() {
        let assembler = QuizAssembler::new(test_meta()).expect("正则编译失败");
        let questions = vec![question("Domanda 1", vec!["a) A", "b) B", "c) C", "d) D"])];
        let mut answers = HashMap::new();
        answers.insert("1".to_string(), answer("a,c", "Explanation text"));
        let mut diagnostics = Diagnostics::new();

        let quiz = assembler.assemble(&questions, &answers, &mut diagnostics);

        assert_eq!(quiz.question_list.len(), 1);
        assert_eq!(quiz.question_list[0].correct, json!("a,c"));
        assert_eq!(
            quiz.question_list[0].explanation,
            json!({ "full": "Explanation text" })
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unmatched_question_is_kept_with_empty_fields() {
        let assembler = QuizAssembler::new(test_meta()).expect("正则编译失败");
        let questions = vec![question("Domanda 5", vec!["a) A", "b) B", "c) C", "d) D"])];
        let answers = HashMap::new();
        let mut diagnostics = Diagnostics::new();

        let quiz = assembler.assemble(&questions, &answers, &mut diagnostics);

        // id 可解析的题目永远不会被丢弃
        assert_eq!(quiz.question_list.len(), 1);
        assert_eq!(quiz.question_list[0].correct, json!([]));
        assert_eq!(quiz.question_list[0].explanation, json!({}));

        assert_eq!(diagnostics.len(), 1);
        let diag = diagnostics.iter().next().unwrap();
        assert_eq!(diag.question_id.as_deref(), Some("5"));
    }

    #[test]
    fn test_unparsable_title_is_skipped_with_diagnostic() {
        let assembler = QuizAssembler::new(test_meta()).expect("正则编译失败");
        // 标题缺少 id 的畸形记录
        let questions = vec![
            question("Domanda", vec!["a) A", "b) B", "c) C", "d) D"]),
            question("Domanda 2", vec!["a) A", "b) B", "c) C", "d) D"]),
        ];
        let answers = HashMap::new();
        let mut diagnostics = Diagnostics::new();

        let quiz = assembler.assemble(&questions, &answers, &mut diagnostics);

        assert_eq!(quiz.question_list.len(), 1);
        assert_eq!(
            quiz.question_list[0].question,
            "Domanda 2 testo della domanda"
        );
        // 一条 id 无法解析 + 一条答案缺失
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_output_preserves_source_order() {
        let assembler = QuizAssembler::new(test_meta()).expect("正则编译失败");
        let questions = vec![
            question("Domanda 2", vec!["a) A", "b) B", "c) C", "d) D"]),
            question("Domanda 1", vec!["a) A", "b) B", "c) C", "d) D"]),
            question("Domanda A3", vec!["a) A", "b) B", "c) C", "d) D"]),
        ];
        let mut answers = HashMap::new();
        answers.insert("2".to_string(), answer("a", "x"));
        answers.insert("1".to_string(), answer("b", "y"));
        answers.insert("A3".to_string(), answer("c", "z"));
        let mut diagnostics = Diagnostics::new();

        let quiz = assembler.assemble(&questions, &answers, &mut diagnostics);

        let corrects: Vec<_> = quiz
            .question_list
            .iter()
            .map(|e| e.correct.clone())
            .collect();
        assert_eq!(corrects, vec![json!("a"), json!("b"), json!("c")]);
    }

    #[test]
    fn test_metadata_is_copied_into_document() {
        let assembler = QuizAssembler::new(test_meta()).expect("正则编译失败");
        let mut diagnostics = Diagnostics::new();

        let quiz = assembler.assemble(&[], &HashMap::new(), &mut diagnostics);

        assert_eq!(quiz.id, "1");
        assert_eq!(quiz.title, "ISTQB Sample Exam");
        assert_eq!(quiz.time, "60 minutes");
        assert!(quiz.question_list.is_empty());
    }
}
