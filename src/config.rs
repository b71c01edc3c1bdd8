/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 题目 PDF 路径
    pub questions_pdf_path: String,
    /// 答案 PDF 路径
    pub answers_pdf_path: String,
    /// 输出 JSON 路径
    pub output_json_path: String,
    /// 题目 PDF 的起始扫描页（1 起始，跳过封面和说明页）
    pub start_page_questions: u32,
    /// 答案 PDF 的起始扫描页（1 起始）
    pub start_page_answers: u32,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    // --- 测验元数据 ---
    pub quiz_id: String,
    pub quiz_title: String,
    pub quiz_time: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_pdf_path: "ITASTQB-QTEST-FL-2023-A.pdf".to_string(),
            answers_pdf_path: "ITASTQB-QTEST-FL-2023-A-SOL.pdf".to_string(),
            output_json_path: "ITASTQB-QTEST-FL-2023-A.json".to_string(),
            start_page_questions: 8,
            start_page_answers: 6,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            quiz_id: "1".to_string(),
            quiz_title: "ISTQB Sample Exam".to_string(),
            quiz_time: "60 minutes".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            questions_pdf_path: std::env::var("QUESTIONS_PDF_PATH").unwrap_or(default.questions_pdf_path),
            answers_pdf_path: std::env::var("ANSWERS_PDF_PATH").unwrap_or(default.answers_pdf_path),
            output_json_path: std::env::var("OUTPUT_JSON_PATH").unwrap_or(default.output_json_path),
            start_page_questions: std::env::var("START_PAGE_QUESTIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.start_page_questions),
            start_page_answers: std::env::var("START_PAGE_ANSWERS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.start_page_answers),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            quiz_id: std::env::var("QUIZ_ID").unwrap_or(default.quiz_id),
            quiz_title: std::env::var("QUIZ_TITLE").unwrap_or(default.quiz_title),
            quiz_time: std::env::var("QUIZ_TIME").unwrap_or(default.quiz_time),
        }
    }
}
