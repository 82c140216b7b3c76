//! 에러 타입 모듈
//!
//! - [`errors`] - 페이지 처리 에러 (`AppError`)
//! - [`registration`] - 회원가입 흐름 에러 분류 (`RegistrationError`)

pub mod errors;
pub mod registration;

pub use errors::{AppError, AppResult, ErrorContext};
pub use registration::*;
