use crate::config::Config;
use serde::Serialize;
use serde_json::Value;

/// 测验文档元数据
///
/// 来自配置，原样写入输出文档
#[derive(Debug, Clone)]
pub struct QuizMeta {
    pub id: String,
    pub title: String,
    pub time: String,
}

impl From<&Config> for QuizMeta {
    fn from(config: &Config) -> Self {
        Self {
            id: config.quiz_id.clone(),
            title: config.quiz_title.clone(),
            time: config.quiz_time.clone(),
        }
    }
}

/// 输出文档中的单个条目（题目 + 答案合并结果）
///
/// `correct` 与 `explanation` 使用 `serde_json::Value`：
/// 匹配到答案时分别为字符串和 `{"full": …}`，未匹配时为 `[]` 和 `{}`。
/// 两个字段永远存在，不会缺失。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizEntry {
    pub question: String,
    pub options: Vec<String>,
    pub correct: Value,
    pub explanation: Value,
}

/// 最终测验文档
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizDocument {
    pub id: String,
    pub title: String,
    pub time: String,
    #[serde(rename = "questionList")]
    pub question_list: Vec<QuizEntry>,
}
