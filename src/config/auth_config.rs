//! # Authentication Configuration Module
//!
//! 업스트림 인증 API 위치와 세션 쿠키 정책을 관리하는 모듈입니다.
//! 이 프론트엔드는 인증을 직접 구현하지 않고, 회원가입 요청을 별도의
//! 인증 API로 전달한 뒤 발급된 토큰을 쿠키에 저장하는 역할만 수행합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### 업스트림 인증 API
//! ```bash
//! export API_BASE_URL="http://localhost:8000"
//! ```
//!
//! ### 세션 쿠키
//! ```bash
//! # HTTPS 배포 환경에서는 반드시 true
//! export COOKIE_SECURE="true"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AuthApiConfig, SessionCookieConfig};
//!
//! let base_url = AuthApiConfig::base_url();
//! let cookie_config = SessionCookieConfig::from_env();
//! ```

use std::env;

use crate::config::Environment;

/// 업스트림 인증 API 설정
///
/// 사용자 계정과 토큰 발급을 담당하는 백엔드 서비스의 주소를 관리합니다.
pub struct AuthApiConfig;

impl AuthApiConfig {
    /// 인증 API 기본 주소 (설정되지 않은 경우)
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";

    /// 회원가입 엔드포인트 경로
    pub const REGISTER_PATH: &'static str = "/api/auth/register";

    /// 인증 API 기본 주소를 반환합니다.
    ///
    /// 끝에 붙은 `/`는 제거되어 경로와 결합할 때 `//`가 생기지 않습니다.
    ///
    /// # 환경 변수
    ///
    /// ```bash
    /// export API_BASE_URL="https://auth.example.com"
    /// ```
    pub fn base_url() -> String {
        let raw = env::var("API_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        normalize_base_url(&raw)
    }
}

/// 기본 주소의 공백과 마지막 `/`를 정리합니다.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// 세션 쿠키 정책
///
/// `token` 쿠키의 `Secure` 플래그를 결정합니다. HTTP로 동작하는 로컬 개발 환경에서는
/// 꺼져 있어야 하고, HTTPS 프로덕션에서는 켜져 있어야 합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionCookieConfig {
    /// `Secure` 쿠키 속성 사용 여부
    pub secure: bool,
}

impl SessionCookieConfig {
    /// 환경 변수에서 쿠키 정책을 로드합니다.
    ///
    /// `COOKIE_SECURE`가 설정되어 있으면 그 값을 따르고,
    /// 없거나 해석할 수 없으면 현재 실행 환경이 프로덕션인지로 결정합니다.
    pub fn from_env() -> Self {
        let cookie_secure = env::var("COOKIE_SECURE").ok();
        Self::from_values(cookie_secure.as_deref(), Environment::current())
    }

    /// `COOKIE_SECURE` 값과 실행 환경으로 쿠키 정책을 결정합니다.
    pub fn from_values(cookie_secure: Option<&str>, environment: Environment) -> Self {
        let fallback = environment.is_production();

        let secure = match cookie_secure {
            Some(raw) => parse_flag(raw).unwrap_or_else(|| {
                log::error!("COOKIE_SECURE 파싱 실패: {}. 기본값 {} 사용", raw, fallback);
                fallback
            }),
            None => fallback,
        };

        Self { secure }
    }
}

/// `true/false/1/0/yes/no/on/off` 형태의 불리언 문자열을 해석합니다.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base_url(" http://api.shop.io// "), "http://api.shop.io");
        assert_eq!(normalize_base_url("http://api.shop.io"), "http://api.shop.io");
    }

    #[test]
    fn test_cookie_secure_overrides_environment() {
        let local = SessionCookieConfig::from_values(Some("true"), Environment::Development);
        assert!(local.secure);

        let behind_proxy = SessionCookieConfig::from_values(Some("off"), Environment::Production);
        assert!(!behind_proxy.secure);
    }

    #[test]
    fn test_cookie_secure_defaults_to_production_only() {
        assert!(SessionCookieConfig::from_values(None, Environment::Production).secure);

        for env in [Environment::Development, Environment::Test, Environment::Staging] {
            assert!(!SessionCookieConfig::from_values(None, env).secure, "{:?}", env);
        }
    }

    #[test]
    fn test_unparsable_cookie_secure_falls_back_to_environment() {
        assert!(SessionCookieConfig::from_values(Some("maybe"), Environment::Production).secure);
        assert!(!SessionCookieConfig::from_values(Some("maybe"), Environment::Development).secure);
        assert!(!SessionCookieConfig::from_values(Some(""), Environment::Test).secure);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }
}
