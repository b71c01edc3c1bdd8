use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// PDF 提取相关错误（致命，中止运行）
    Extraction(ExtractionError),
    /// 文件操作错误
    File(FileError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Extraction(e) => write!(f, "提取错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Extraction(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// PDF 提取相关错误
#[derive(Debug)]
pub enum ExtractionError {
    /// 打开 PDF 失败
    OpenFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 起始页超出文档范围
    PageOutOfRange {
        path: String,
        start_page: u32,
        page_count: u32,
    },
    /// 提取页面文本失败
    TextExtractFailed {
        path: String,
        page: u32,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::OpenFailed { path, source } => {
                write!(f, "无法打开 PDF ({}): {}", path, source)
            }
            ExtractionError::PageOutOfRange {
                path,
                start_page,
                page_count,
            } => {
                write!(
                    f,
                    "起始页 {} 超出文档范围 ({}): 共 {} 页",
                    start_page, path, page_count
                )
            }
            ExtractionError::TextExtractFailed { path, page, source } => {
                write!(f, "提取第 {} 页文本失败 ({}): {}", page, path, source)
            }
        }
    }
}

impl std::error::Error for ExtractionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractionError::OpenFailed { source, .. }
            | ExtractionError::TextExtractFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// JSON 序列化失败
    JsonSerializeFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            FileError::JsonSerializeFailed { source } => {
                write!(f, "JSON序列化失败: {}", source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::WriteFailed { source, .. } | FileError::JsonSerializeFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::File(FileError::JsonSerializeFailed {
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建 PDF 打开失败错误
    pub fn pdf_open_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Extraction(ExtractionError::OpenFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建起始页越界错误
    pub fn page_out_of_range(path: impl Into<String>, start_page: u32, page_count: u32) -> Self {
        AppError::Extraction(ExtractionError::PageOutOfRange {
            path: path.into(),
            start_page,
            page_count,
        })
    }

    /// 创建页面文本提取失败错误
    pub fn text_extract_failed(
        path: impl Into<String>,
        page: u32,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Extraction(ExtractionError::TextExtractFailed {
            path: path.into(),
            page,
            source: Box::new(source),
        })
    }

    /// 创建文件写入失败错误
    pub fn file_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
