//! 输出层
//!
//! 将组装好的测验文档序列化为 JSON 文件。
//! 输出为仅含一个文档的数组，保持下游消费端的既有约定。

use crate::error::{AppError, AppResult};
use crate::models::QuizDocument;
use std::fs;
use std::path::Path;
use tracing::info;

/// 将测验文档写入目标路径
pub fn write_quiz_document(path: &Path, document: &QuizDocument) -> AppResult<()> {
    let json = serde_json::to_string_pretty(std::slice::from_ref(document))?;

    fs::write(path, json)
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

    info!("✓ 测验 JSON 已保存至: {}", path.display());

    Ok(())
}
