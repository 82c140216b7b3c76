//! # 업스트림 인증 API 클라이언트
//!
//! 회원가입 요청을 별도의 인증 백엔드로 전달하는 서비스입니다.
//! 이 프론트엔드는 계정이나 토큰을 직접 관리하지 않으며,
//! 요청을 전달하고 결과를 그대로 중계하는 역할만 수행합니다.
//!
//! ## 요청 형식
//!
//! ```text
//! POST {API_BASE_URL}/api/auth/register
//! Content-Type: application/json
//!
//! {"fullName":"Jane Doe","email":"jane@shop.io","password":"...","phone":"0901234567"}
//! ```
//!
//! ## 응답 처리
//!
//! | 업스트림 응답 | 결과 |
//! |---------------|------|
//! | 2xx + `{token, message}` | `Ok(AuthResponse)` |
//! | 4xx | `RegistrationError::Rejected` (본문 원문 보존) |
//! | 5xx, 연결 실패, 전송 오류 | `RegistrationError::Unavailable` |
//! | 2xx 이지만 본문 파싱 실패, 그 외 상태 | `RegistrationError::Unexpected` |
//!
//! 재시도는 하지 않으며, 타임아웃은 HTTP 클라이언트 기본값을 따릅니다.

use reqwest::header::ACCEPT;

use crate::config::{AuthApiConfig, normalize_base_url};
use crate::domain::{AuthResponse, RegisterRequest};
use crate::errors::RegistrationError;
use crate::utils::string_utils::mask_email;

/// 업스트림 인증 API 서비스
///
/// 프로세스 시작 시 한 번 생성되어 `web::Data`로 모든 워커에 공유됩니다.
/// 내부 상태는 변경되지 않으므로 동시 요청 간 잠금이 필요 없습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let auth_service = AuthService::from_env();
///
/// match auth_service.register(&request).await {
///     Ok(auth) => { /* token 쿠키 설정 후 리다이렉트 */ }
///     Err(e) => { /* e.user_message()로 폼 재렌더링 */ }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthService {
    /// 커넥션 풀을 공유하는 HTTP 클라이언트
    client: reqwest::Client,
    /// 인증 API 기본 주소 (마지막 `/` 제거됨)
    base_url: String,
}

impl AuthService {
    /// 주어진 클라이언트와 기본 주소로 서비스를 생성합니다.
    pub fn new(client: reqwest::Client, base_url: impl AsRef<str>) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url.as_ref()),
        }
    }

    /// `API_BASE_URL` 환경 변수를 사용하여 서비스를 생성합니다.
    pub fn from_env() -> Self {
        Self::new(reqwest::Client::new(), AuthApiConfig::base_url())
    }

    /// 인증 API 기본 주소
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 회원가입 엔드포인트 전체 URL
    pub fn register_url(&self) -> String {
        format!("{}{}", self.base_url, AuthApiConfig::REGISTER_PATH)
    }

    /// 회원가입 요청을 업스트림 인증 API로 전달합니다.
    ///
    /// # 인자
    ///
    /// * `request` - 검증을 통과한 회원가입 요청
    ///
    /// # 반환값
    ///
    /// * `Ok(AuthResponse)` - 발급된 토큰과 성공 메시지
    /// * `Err(RegistrationError)` - 분류된 실패 (모듈 문서의 표 참고)
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, RegistrationError> {
        let url = self.register_url();
        let masked = mask_email(&request.email);

        log::info!("회원가입 요청 전달 - 사용자: {}, 대상: {}", masked, url);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::warn!("인증 서버 요청 실패 - 사용자: {}, 에러: {}", masked, e);
                RegistrationError::from_transport(e)
            })?;

        let status = response.status();

        if status.is_client_error() {
            let body = response
                .text()
                .await
                .map_err(|e| RegistrationError::Unavailable(format!("에러 응답 본문 읽기 실패: {}", e)))?;

            log::warn!("회원가입 거절 - 사용자: {}, 상태: {}", masked, status);
            log::debug!("회원가입 거절 응답 본문: {}", body);
            return Err(RegistrationError::Rejected { status, body });
        }

        if status.is_server_error() {
            log::error!("인증 서버 에러 - 사용자: {}, 상태: {}", masked, status);
            return Err(RegistrationError::Unavailable(format!(
                "인증 서버가 {} 상태를 반환했습니다",
                status
            )));
        }

        if !status.is_success() {
            return Err(RegistrationError::Unexpected(format!(
                "unexpected response status {}",
                status
            )));
        }

        let auth = response.json::<AuthResponse>().await.map_err(|e| {
            log::error!("회원가입 응답 파싱 실패 - 사용자: {}, 에러: {}", masked, e);
            RegistrationError::Unexpected(format!("invalid registration response: {}", e))
        })?;

        log::info!("회원가입 성공 - 사용자: {}", masked);
        Ok(auth)
    }
}
