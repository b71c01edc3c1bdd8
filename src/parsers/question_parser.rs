//! 题目解析器
//!
//! 以 "Domanda N" 为题目起始锚点扫描题目文本，产出有序的题目记录。
//! 选项收集沿剩余全文向前扫描（与原始版式处理保持一致，不在下一个
//! 锚点处截断），畸形锚点可能导致后续题目的选项泄漏进前一题，
//! 这是已知限制，由回归测试固定其行为。

use crate::diagnostics::Diagnostics;
use crate::models::QuestionRecord;
use anyhow::Result;
use regex::Regex;

/// 预定位的选项行（相对整篇文本的位置）
struct OptionLine {
    start: usize,
    letter: String,
    body: String,
}

/// 题目解析器
pub struct QuestionParser {
    /// 题目起始锚点："Domanda" + 可选字母前缀 + 数字
    anchor_re: Regex,
    /// 选项行："<letter>) <text>"，letter ∈ a-e，占满一行
    option_re: Regex,
}

impl QuestionParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            anchor_re: Regex::new(r"Domanda\s+(A?\d+)")?,
            option_re: Regex::new(r"(?m)^([a-e])\)[ \t]*(.*)$")?,
        })
    }

    /// 解析题目文本
    ///
    /// # 参数
    /// - `text`: 页面提取得到的题目文本
    /// - `diagnostics`: 诊断收集器，选项不足 4 个的题目在此记录
    ///
    /// # 返回
    /// 按出现顺序排列的题目记录。选项不足的题目仍会产出记录（不硬失败）
    pub fn parse(&self, text: &str, diagnostics: &mut Diagnostics) -> Vec<QuestionRecord> {
        // 预先定位全部选项行，锚点和选项都按全文位置对齐
        let option_lines: Vec<OptionLine> = self
            .option_re
            .captures_iter(text)
            .map(|caps| {
                let m = caps.get(0).expect("捕获组 0 必然存在");
                OptionLine {
                    start: m.start(),
                    letter: caps[1].to_string(),
                    body: caps[2].trim().to_string(),
                }
            })
            .collect();

        let mut questions = Vec::new();

        for caps in self.anchor_re.captures_iter(text) {
            let anchor = caps.get(0).expect("捕获组 0 必然存在");
            let title = anchor.as_str().trim().to_string();
            let question_id = caps[1].to_string();

            // 题干 = 锚点标题 + 锚点之后到第一个选项行之前的正文
            let first_option = option_lines.iter().position(|o| o.start >= anchor.end());
            let prompt_end = first_option
                .map(|i| option_lines[i].start)
                .unwrap_or(text.len());
            let body = text[anchor.end()..prompt_end].trim();
            let question = format!("{} {}", title, body).trim_end().to_string();

            let options = collect_options(&option_lines, first_option);

            if options.len() < 4 {
                diagnostics.malformed_option_run(&question_id, options.len());
            }

            questions.push(QuestionRecord::new(title, question, options));
        }

        questions
    }
}

/// 从第一条选项行开始收集最多 5 个选项
///
/// 第 5 个选项仅在其字母为 "e" 时保留，否则截断为前 4 个。
/// 这处理了源版式中第 4 个选项之后偶尔跟随噪声行的问题。
fn collect_options(option_lines: &[OptionLine], start: Option<usize>) -> Vec<String> {
    let Some(start) = start else {
        return Vec::new();
    };

    let mut options = Vec::new();
    for line in option_lines[start..].iter().take(5) {
        options.push(format!("{}) {}", line.letter, line.body));

        if options.len() == 5 && line.letter != "e" {
            options.truncate(4);
        }
    }
    options
}
