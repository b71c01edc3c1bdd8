/// 题目记录
///
/// 由 QuestionParser 从题目文本产出，按在源文本中出现的顺序排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    /// 题目锚点文本（如 "Domanda 12"）
    pub title: String,
    /// 完整题干（锚点 + 题目正文）
    pub question: String,
    /// 选项列表，每项形如 "a) 选项文本"，最多 5 个
    ///
    /// 不变式：第 5 个选项仅在其字母为 "e" 时保留，否则截断为前 4 个
    pub options: Vec<String>,
}

impl QuestionRecord {
    pub fn new(title: impl Into<String>, question: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            title: title.into(),
            question: question.into(),
            options,
        }
    }
}
