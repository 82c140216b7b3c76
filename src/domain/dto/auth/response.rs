//! 업스트림 인증 API 응답 DTO
use serde::Deserialize;

/// 회원가입 성공 응답
///
/// 토큰은 `token` 쿠키 값으로, 메시지는 다음 페이지의 일회성 플래시 메시지로
/// 한 번 사용된 뒤 버려집니다.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// 업스트림이 발급한 Bearer 토큰
    #[serde(alias = "accessToken")]
    pub token: String,

    /// 사용자에게 보여줄 성공 메시지
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_token_and_message() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"token":"abc123","message":"Welcome"}"#).unwrap();

        assert_eq!(response.token, "abc123");
        assert_eq!(response.message, "Welcome");
    }

    #[test]
    fn test_accepts_access_token_alias_and_missing_message() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"accessToken":"xyz","user":{"email":"a@b.c"}}"#).unwrap();

        assert_eq!(response.token, "xyz");
        assert!(response.message.is_empty());
    }

    #[test]
    fn test_missing_token_is_rejected() {
        assert!(serde_json::from_str::<AuthResponse>(r#"{"message":"Welcome"}"#).is_err());
    }
}
