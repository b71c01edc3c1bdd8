//! 诊断收集器
//!
//! 原型实现通过全局 debug 打印暴露非致命问题，这里改为显式的诊断收集器：
//! 解析与组装阶段把问题记录下来，运行结束后统一输出供人工复查，
//! 不中断输出文档的生成。

use tracing::warn;

/// 产生诊断的处理阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    QuestionParse,
    AnswerParse,
    Assemble,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::QuestionParse => write!(f, "题目解析"),
            Stage::AnswerParse => write!(f, "答案解析"),
            Stage::Assemble => write!(f, "组装"),
        }
    }
}

/// 单条诊断记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub stage: Stage,
    /// 相关题目 id（如果能确定）
    pub question_id: Option<String>,
    pub message: String,
}

/// 诊断收集器
///
/// 职责：
/// - 收集整个运行过程中的非致命问题
/// - 运行结束后统一报告
/// - 不影响输出文档的生成
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stage: Stage, question_id: Option<String>, message: impl Into<String>) {
        self.items.push(Diagnostic {
            stage,
            question_id,
            message: message.into(),
        });
    }

    /// 题目检测到的选项少于 4 个
    pub fn malformed_option_run(&mut self, question_id: &str, found: usize) {
        self.push(
            Stage::QuestionParse,
            Some(question_id.to_string()),
            format!("选项不足 4 个，仅检测到 {} 个", found),
        );
    }

    /// 同一答案 id 出现多次
    pub fn duplicate_answer(&mut self, question_id: &str) {
        self.push(
            Stage::AnswerParse,
            Some(question_id.to_string()),
            "答案 id 重复出现，保留最后一次",
        );
    }

    /// 题目标题无法解析出 id
    pub fn unparsable_question_id(&mut self, title: &str) {
        self.push(
            Stage::Assemble,
            None,
            format!("无法从题目标题提取 id: {}", title),
        );
    }

    /// 题目 id 没有对应的答案记录
    pub fn unmatched_answer(&mut self, question_id: &str) {
        self.push(
            Stage::Assemble,
            Some(question_id.to_string()),
            "未找到对应的答案记录，correct/explanation 置空",
        );
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// 将全部诊断输出到日志，供人工复查
    pub fn report(&self) {
        if self.items.is_empty() {
            return;
        }
        warn!("⚠️ 共收集到 {} 条诊断信息:", self.items.len());
        for diag in &self.items {
            match &diag.question_id {
                Some(id) => warn!("  [{}] 题目 {}: {}", diag.stage, id, diag.message),
                None => warn!("  [{}] {}", diag.stage, diag.message),
            }
        }
    }
}
