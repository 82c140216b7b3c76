//! 외부 연동 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 프로세스 시작 시 한 번 생성되어 `web::Data`로 핸들러에 주입됩니다.
//! Spring의 `@Service` + 생성자 주입과 같은 역할이며, 요청 간 공유되는
//! 변경 가능한 상태는 없습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::services::auth::AuthService;
//!
//! let auth_service = web::Data::new(AuthService::from_env());
//! App::new().app_data(auth_service.clone());
//! ```

pub mod auth;
