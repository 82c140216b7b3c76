//! 회원가입 요청 DTO
//!
//! 브라우저에서 제출된 회원가입 폼을 매핑하고, 같은 구조를 JSON으로
//! 업스트림 인증 API에 전달합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::validate_not_blank;

/// 회원가입 요청 구조체
///
/// 폼 필드와 업스트림 JSON 필드 모두 camelCase 이름(`fullName`, `email`,
/// `password`, `phone`)을 사용합니다. 누락된 폼 필드는 빈 문자열로 채워지므로
/// 추출 단계가 아닌 검증 단계에서 실패합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// 사용자 이름
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub full_name: String,

    /// 로그인에 사용할 이메일
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub email: String,

    /// 계정 비밀번호
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,

    /// 연락처
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub phone: String,
}

impl RegisterRequest {
    /// 폼을 다시 렌더링할 때 사용할 복사본 (비밀번호 제거)
    pub fn without_password(&self) -> Self {
        Self {
            password: String::new(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> RegisterRequest {
        RegisterRequest {
            full_name: "Jane Doe".to_string(),
            email: "jane@shop.io".to_string(),
            password: "s3cret!".to_string(),
            phone: "0901234567".to_string(),
        }
    }

    #[test]
    fn test_complete_request_is_valid() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn test_each_missing_field_fails_validation() {
        let blanks: [fn(&mut RegisterRequest); 4] = [
            |r: &mut RegisterRequest| r.full_name.clear(),
            |r: &mut RegisterRequest| r.email = "   ".to_string(),
            |r: &mut RegisterRequest| r.password.clear(),
            |r: &mut RegisterRequest| r.phone = "\t".to_string(),
        ];

        for blank in blanks {
            let mut request = complete();
            blank(&mut request);
            assert!(request.validate().is_err(), "{:?} should be invalid", request);
        }
    }

    #[test]
    fn test_form_decoding_fills_missing_fields() {
        let request: RegisterRequest =
            serde_json::from_str(r#"{"fullName":"Jane Doe","email":"jane@shop.io"}"#).unwrap();

        assert_eq!(request.full_name, "Jane Doe");
        assert!(request.password.is_empty());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_serializes_camel_case_for_upstream() {
        let json = serde_json::to_value(complete()).unwrap();

        assert_eq!(json["fullName"], "Jane Doe");
        assert_eq!(json["email"], "jane@shop.io");
        assert_eq!(json["password"], "s3cret!");
        assert_eq!(json["phone"], "0901234567");
    }

    #[test]
    fn test_without_password() {
        let echoed = complete().without_password();

        assert!(echoed.password.is_empty());
        assert_eq!(echoed.email, "jane@shop.io");
    }
}
