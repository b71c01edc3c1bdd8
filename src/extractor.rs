//! PDF 文本提取模块
//!
//! 外部协作者：给定 PDF 路径和起始页，返回从该页到文末的拼接文本。
//! 这里的错误都是致命的（见 error 模块），提取失败即中止运行。

use crate::error::{AppError, AppResult};
use lopdf::Document;
use std::path::Path;
use tracing::info;

/// 从 PDF 的指定起始页（1 起始）提取到文末的全部文本
///
/// # 参数
/// - `path`: PDF 文件路径
/// - `start_page`: 起始扫描页，用于跳过封面和说明页
///
/// # 返回
/// 返回各页文本按页序拼接的结果，页与页之间以换行分隔
pub fn extract_text_from_page(path: &Path, start_page: u32) -> AppResult<String> {
    let path_str = path.display().to_string();

    let doc = Document::load(path).map_err(|e| AppError::pdf_open_failed(&path_str, e))?;

    let pages = doc.get_pages();
    let page_count = pages.len() as u32;

    if start_page == 0 || start_page > page_count {
        return Err(AppError::page_out_of_range(&path_str, start_page, page_count));
    }

    let mut text = String::new();
    for page_num in pages.keys().filter(|n| **n >= start_page) {
        let content = doc
            .extract_text(&[*page_num])
            .map_err(|e| AppError::text_extract_failed(&path_str, *page_num, e))?;
        text.push_str(&content);
        text.push('\n');
    }

    info!(
        "✓ 提取完成: {} (第 {}-{} 页, {} 字符)",
        path_str,
        start_page,
        page_count,
        text.chars().count()
    );

    Ok(text)
}
