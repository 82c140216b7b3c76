//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use validator::ValidationError;

/// 문자열이 유효한지 확인 (빈 문자열이나 공백만 있는 경우 false)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert!(is_valid_string("Hello"));
/// assert!(!is_valid_string("   "));
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `validator`용 필수 입력 검증 함수
///
/// 빈 문자열이나 공백만 있는 경우 `required` 에러를 반환합니다.
///
/// ```rust,ignore
/// #[derive(Validate)]
/// struct Form {
///     #[validate(custom(function = "validate_not_blank"))]
///     name: String,
/// }
/// ```
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("required")
            .with_message("필수 입력 항목입니다".into()));
    }
    Ok(())
}

/// 로그 출력을 위해 이메일 로컬 파트를 가립니다.
///
/// 첫 글자만 남기고 나머지를 `*`로 바꿉니다. `@`가 없으면 전체를 가립니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(mask_email("jane@shop.io"), "j***@shop.io");
/// ```
pub fn mask_email(email: &str) -> String {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            let hidden = local.chars().count().saturating_sub(1);
            format!("{}{}@{}", first, "*".repeat(hidden), domain)
        }
        None => "*".repeat(email.chars().count()),
    }
}
