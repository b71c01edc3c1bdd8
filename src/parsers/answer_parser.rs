//! 答案解析器
//!
//! 扫描答案文本中形如 "<id> <letters> <解析正文>" 的记录，
//! 记录以行首的 "FL" 标记结束。正确答案与解析在同一遍扫描中产出。

use crate::diagnostics::Diagnostics;
use crate::models::AnswerRecord;
use anyhow::Result;
use regex::Regex;
use std::collections::HashMap;

/// 答案解析器
pub struct AnswerParser {
    /// 答案记录：行首 id（纯数字或 A 前缀数字）+ 正确选项字母 + 解析，
    /// 至下一个 "FL" 标记为止
    record_re: Regex,
}

impl AnswerParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            record_re: Regex::new(r"(?s)\n(\d+|A\d+)[ \t]+([a-e, ]+)(.*?)\nFL")?,
        })
    }

    /// 解析答案文本
    ///
    /// # 参数
    /// - `text`: 页面提取得到的答案文本
    /// - `diagnostics`: 诊断收集器，重复出现的 id 在此记录
    ///
    /// # 返回
    /// 题目 id → 答案记录的映射。同一 id 多次出现时保留最后一次，
    /// 对相同输入重复解析的结果完全一致（幂等）
    pub fn parse(&self, text: &str, diagnostics: &mut Diagnostics) -> HashMap<String, AnswerRecord> {
        let mut answers = HashMap::new();

        for caps in self.record_re.captures_iter(text) {
            let id = caps[1].trim().to_string();
            let record = AnswerRecord {
                correct: caps[2].trim().to_string(),
                explanation: caps[3].trim().to_string(),
            };

            if answers.insert(id.clone(), record).is_some() {
                diagnostics.duplicate_answer(&id);
            }
        }

        answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> (HashMap<String, AnswerRecord>, Diagnostics) {
        let parser = AnswerParser::new().expect("正则编译失败");
        let mut diagnostics = Diagnostics::new();
        let answers = parser.parse(text, &mut diagnostics);
        (answers, diagnostics)
    }

    #[test]
    fn test_single_record() {
        let (answers, diagnostics) = parse("\n1 a,c Explanation text\nFL");

        assert_eq!(answers.len(), 1);
        let record = &answers["1"];
        assert_eq!(record.correct, "a,c");
        assert_eq!(record.explanation, "Explanation text");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_multiple_records() {
        let text = "\n1 a Prima spiegazione\nFL-2.1.1\n2 b,d Seconda spiegazione\nFL-2.3.4\n";
        let (answers, _) = parse(text);

        assert_eq!(answers.len(), 2);
        assert_eq!(answers["1"].correct, "a");
        assert_eq!(answers["2"].correct, "b,d");
        assert_eq!(answers["2"].explanation, "Seconda spiegazione");
    }

    #[test]
    fn test_letter_prefixed_id() {
        let (answers, _) = parse("\nA12 e Spiegazione extra\nFL");

        assert_eq!(answers["A12"].correct, "e");
    }

    #[test]
    fn test_explanation_spans_lines_until_marker() {
        let text = "\n3 c Non è corretta perché:\na) prima riga\nb) seconda riga\nFL";
        let (answers, _) = parse(text);

        assert_eq!(
            answers["3"].explanation,
            "Non è corretta perché:\na) prima riga\nb) seconda riga"
        );
    }

    #[test]
    fn test_record_without_terminator_is_ignored() {
        let (answers, _) = parse("\n1 a spiegazione senza marcatore finale");

        assert!(answers.is_empty());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "\n1 a Prima\nFL\n2 b Seconda\nFL";
        let parser = AnswerParser::new().expect("正则编译失败");

        let mut diag_a = Diagnostics::new();
        let mut diag_b = Diagnostics::new();
        let first = parser.parse(text, &mut diag_a);
        let second = parser.parse(text, &mut diag_b);

        assert_eq!(first, second);
        assert_eq!(diag_a.len(), diag_b.len());
    }

    #[test]
    fn test_duplicate_id_keeps_last_and_records_diagnostic() {
        let text = "\n1 a Vecchia spiegazione\nFL\n1 b Nuova spiegazione\nFL";
        let (answers, diagnostics) = parse(text);

        assert_eq!(answers.len(), 1);
        assert_eq!(answers["1"].correct, "b");
        assert_eq!(answers["1"].explanation, "Nuova spiegazione");
        assert_eq!(diagnostics.len(), 1);
    }
}
