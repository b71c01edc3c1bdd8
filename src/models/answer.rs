/// 答案记录
///
/// 由 AnswerParser 从答案文本产出，以题目 id 为键
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    /// 正确选项字母，可以是多个（如 "a" 或 "a,c"）
    pub correct: String,
    /// 答案解析全文
    pub explanation: String,
}
