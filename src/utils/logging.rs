use anyhow::Result;
/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use std::fs;
use tracing::info;

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
///
/// # 返回
/// 返回是否成功初始化
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n试卷转换日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(questions_pdf: &str, answers_pdf: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试卷 PDF 转换模式");
    info!("📄 题目 PDF: {}", questions_pdf);
    info!("📄 答案 PDF: {}", answers_pdf);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `questions`: 解析到的题目数
/// - `answers`: 解析到的答案数
/// - `entries`: 写入输出的条目数
/// - `diagnostics`: 诊断条数
/// - `output_path`: 输出文件路径
pub fn print_final_stats(
    questions: usize,
    answers: usize,
    entries: usize,
    diagnostics: usize,
    output_path: &str,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 转换完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 题目: {} / 答案: {} / 输出条目: {}", questions, answers, entries);
    info!("⚠️ 诊断: {}", diagnostics);
    info!("{}", "=".repeat(60));
    info!("\n输出已保存至: {}", output_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
