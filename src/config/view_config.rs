//! 뷰 템플릿 설정

use std::env;

/// 템플릿 디렉터리 설정
pub struct ViewConfig;

impl ViewConfig {
    /// 템플릿 파일을 읽어올 디렉터리. 기본값: `templates`
    ///
    /// # Environment Variables
    ///
    /// - `TEMPLATE_DIR`: 커스텀 템플릿 경로
    pub fn template_dir() -> String {
        env::var("TEMPLATE_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "templates".to_string())
    }
}
