//! # Data Transfer Objects
//!
//! 브라우저 폼, 업스트림 인증 API와 주고받는 데이터 구조를 정의합니다.
//! Spring Boot의 `@ModelAttribute` 폼 바인딩과 `RestClient` 응답 매핑에
//! 해당하는 역할을 합니다.
//!
//! ## 흐름
//!
//! ```text
//! 브라우저 폼 (x-www-form-urlencoded)
//!         │  web::Form<RegisterRequest>
//!         ▼
//!   RegisterRequest ── validate() ──► 실패 시 폼 재렌더링
//!         │  JSON
//!         ▼
//! POST {API_BASE_URL}/api/auth/register
//!         │  JSON
//!         ▼
//!    AuthResponse { token, message }
//! ```

pub mod auth;

pub use auth::*;
