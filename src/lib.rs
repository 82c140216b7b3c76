//! 패션 쇼핑몰 프론트엔드
//!
//! 서버 렌더링 방식의 쇼핑몰 웹 프론트엔드입니다. 정적 페이지 라우트를
//! 뷰 템플릿으로 렌더링하고, 회원가입 폼을 외부 인증 API로 전달합니다.
//! 자체 저장소나 비즈니스 데이터는 없습니다.
//!
//! # Features
//!
//! - **페이지 라우팅**: 20여 개의 정적 페이지와 404 페이지
//! - **회원가입 프록시**: 폼 검증 후 `{API_BASE_URL}/api/auth/register`로 전달
//! - **세션 쿠키**: 발급받은 토큰을 HTTP-only `token` 쿠키에 저장
//! - **플래시 메시지**: 리다이렉트 후 한 번만 표시되는 성공 메시지
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │     Routes      │ ← 경로 등록, 404
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 페이지/회원가입 처리
//! └─────────────────┘
//!          │
//!     ┌────┴─────┐
//!     ▼          ▼
//! ┌────────┐ ┌──────────┐
//! │ Views  │ │ Services │ ← 템플릿 렌더링 / 인증 API 클라이언트
//! └────────┘ └──────────┘
//!                 │
//!                 ▼
//!        ┌─────────────────┐
//!        │  Auth API (외부) │
//!        └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use fashion_shop_frontend::routes::configure_all_routes;
//! use fashion_shop_frontend::services::auth::AuthService;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(AuthService::from_env()))
//!     .configure(configure_all_routes);
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;
pub mod views;
