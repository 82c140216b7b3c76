//! 회원가입 흐름 에러 분류
//!
//! 업스트림 인증 API 호출 결과를 사용자에게 보여줄 메시지로 변환합니다.
//! 모든 실패는 요청 단위로 격리되며, 회원가입 폼을 다시 렌더링하는 데 사용됩니다.
//!
//! # 분류 (검사 순서)
//!
//! | 변형 | 원인 | 사용자 메시지 |
//! |------|------|---------------|
//! | `Rejected` | 업스트림 4xx 응답 | 응답 본문의 `error` → `message` → 원문 |
//! | `Unavailable` | 연결 실패, 전송 오류, 업스트림 5xx | 고정된 "연결 불가" 메시지 |
//! | `Unexpected` | 그 외 (응답 파싱 실패 등) | 일반 메시지 + 원인 |

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// 로컬 폼 검증 실패 시 표시되는 메시지
pub const VALIDATION_FAILED_MESSAGE: &str = "Please fill in all fields correctly";

/// 인증 서버에 연결할 수 없을 때 표시되는 메시지
pub const AUTH_SERVER_UNAVAILABLE_MESSAGE: &str =
    "Unable to connect to authentication server. Please try again later.";

/// 분류되지 않은 실패 메시지의 접두어
pub const UNEXPECTED_ERROR_PREFIX: &str = "An unexpected error occurred: ";

/// 회원가입 요청 실패 유형
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// 업스트림이 클라이언트 에러(4xx)로 요청을 거절함
    #[error("{status}: {body}")]
    Rejected {
        /// 업스트림 응답 상태 코드
        status: StatusCode,
        /// 업스트림 응답 본문 원문
        body: String,
    },

    /// 업스트림에 도달할 수 없거나 업스트림 서버 에러
    #[error("Authentication server unavailable: {0}")]
    Unavailable(String),

    /// 그 외 예상하지 못한 실패
    #[error("Unexpected registration failure: {0}")]
    Unexpected(String),
}

impl RegistrationError {
    /// 전송 계층에서 발생한 reqwest 에러를 분류합니다.
    ///
    /// 요청 구성 단계의 에러(잘못된 URL 등)는 연결 문제가 아니므로 `Unexpected`로 분류합니다.
    pub fn from_transport(error: reqwest::Error) -> Self {
        if error.is_builder() {
            RegistrationError::Unexpected(error.to_string())
        } else {
            RegistrationError::Unavailable(error.to_string())
        }
    }

    /// 회원가입 폼에 표시할 메시지를 반환합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let error = RegistrationError::Rejected {
    ///     status: StatusCode::BAD_REQUEST,
    ///     body: r#"{"error":"Email already exists"}"#.to_string(),
    /// };
    /// assert_eq!(error.user_message(), "Email already exists");
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            RegistrationError::Rejected { status, body } => {
                extract_error_message(body).unwrap_or_else(|| status.to_string())
            }
            RegistrationError::Unavailable(_) => AUTH_SERVER_UNAVAILABLE_MESSAGE.to_string(),
            RegistrationError::Unexpected(cause) => format!("{}{}", UNEXPECTED_ERROR_PREFIX, cause),
        }
    }
}

/// 업스트림 에러 본문에서 사람이 읽을 수 있는 메시지를 추출합니다.
///
/// 순서대로 시도합니다:
///
/// 1. JSON 객체의 `error` 필드
/// 2. JSON 객체의 `message` 필드
/// 3. 본문 원문 (필드가 없거나, 객체가 아니거나, JSON이 아닌 경우)
///
/// `null` 값은 필드가 없는 것으로 취급합니다. 본문이 비어 있으면 `None`을 반환합니다.
pub fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(_) => return Some(body.to_string()),
    };

    let Value::Object(fields) = parsed else {
        return Some(body.to_string());
    };

    ["error", "message"]
        .iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| !value.is_null())
        .map(value_as_text)
        .or_else(|| Some(body.to_string()))
}

/// JSON 값을 표시용 문자열로 변환합니다. 문자열은 따옴표 없이 그대로 사용합니다.
fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_prefers_error_field() {
        let body = r#"{"error":"Email already exists","message":"Bad Request"}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some("Email already exists"));
    }

    #[test]
    fn test_extract_falls_back_to_message_field() {
        let body = r#"{"message":"Invalid input"}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some("Invalid input"));
    }

    #[test]
    fn test_extract_uses_raw_body_without_known_fields() {
        let body = r#"{"detail":"nope"}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some(body));
    }

    #[test]
    fn test_extract_uses_raw_body_for_invalid_json() {
        let body = "Bad things happened <b>here</b>";
        assert_eq!(extract_error_message(body).as_deref(), Some(body));
    }

    #[test]
    fn test_extract_uses_raw_body_for_non_object_json() {
        assert_eq!(extract_error_message(r#"["a","b"]"#).as_deref(), Some(r#"["a","b"]"#));
        assert_eq!(extract_error_message(r#""plain""#).as_deref(), Some(r#""plain""#));
    }

    #[test]
    fn test_extract_treats_null_as_absent() {
        let body = r#"{"error":null,"message":"Weak password"}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some("Weak password"));
    }

    #[test]
    fn test_extract_renders_non_string_values() {
        let body = r#"{"error":409}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some("409"));
    }

    #[test]
    fn test_extract_blank_body_is_none() {
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message("  \n"), None);
    }

    #[test]
    fn test_rejected_user_message() {
        let error = RegistrationError::Rejected {
            status: StatusCode::BAD_REQUEST,
            body: r#"{"error":"Email already exists"}"#.to_string(),
        };
        assert_eq!(error.user_message(), "Email already exists");
    }

    #[test]
    fn test_rejected_with_empty_body_uses_status_line() {
        let error = RegistrationError::Rejected {
            status: StatusCode::CONFLICT,
            body: String::new(),
        };
        assert_eq!(error.user_message(), "409 Conflict");
    }

    #[test]
    fn test_unavailable_message_ignores_cause() {
        let error = RegistrationError::Unavailable("connection refused (os error 111)".to_string());
        assert_eq!(error.user_message(), AUTH_SERVER_UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn test_unexpected_message_embeds_cause() {
        let error = RegistrationError::Unexpected("missing field `token`".to_string());
        assert_eq!(
            error.user_message(),
            "An unexpected error occurred: missing field `token`"
        );
    }
}
