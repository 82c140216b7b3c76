//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring MVC의 `@Controller` 레이어와 같은 역할을 수행하며,
//! 응답은 JSON이 아닌 서버 렌더링 HTML 페이지입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (HTML form / 링크)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 경로 → 뷰 매핑            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Views - 템플릿 렌더링, 쿠키                     ← View Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 인증 API 클라이언트                  ← Service Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - [`pages`]: 입력이 없는 정적 페이지 (홈, 쇼핑, 사용자 페이지, 404)
//! - [`auth`]: 로그인/회원가입 페이지와 회원가입 제출
//!
//! ## 에러 처리
//!
//! 핸들러는 [`crate::errors::AppResult`]를 반환합니다. 템플릿 누락 같은
//! 내부 오류만 `AppError`로 전파되며, 업스트림 인증 실패는 에러가 아닌
//! 정상 페이지(폼 재렌더링)로 변환됩니다.

pub mod auth;
pub mod pages;
