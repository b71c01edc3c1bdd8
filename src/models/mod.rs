//! 数据模型
//!
//! 所有记录都是运行期派生数据，只在单次运行的内存中存在，
//! 输出文档写出后即被丢弃。

pub mod answer;
pub mod question;
pub mod quiz;

pub use answer::AnswerRecord;
pub use question::QuestionRecord;
pub use quiz::{QuizDocument, QuizEntry, QuizMeta};
