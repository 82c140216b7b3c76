//! 인증 연동 서비스 모듈
//!
//! 업스트림 인증 API로 회원가입 요청을 전달하는 서비스를 제공합니다.
//! 인증 자체(계정 저장, 토큰 발급, 토큰 검증)는 업스트림의 책임입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let auth_service = AuthService::from_env();
//! let auth = auth_service.register(&request).await?;
//! ```

pub mod auth_service;

pub use auth_service::*;
