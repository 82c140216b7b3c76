//! 인증 관련 DTO
//!
//! - [`request`] - 브라우저 폼 → 업스트림 요청 (`RegisterRequest`)
//! - [`response`] - 업스트림 응답 (`AuthResponse`)

pub mod request;
pub mod response;

pub use request::RegisterRequest;
pub use response::AuthResponse;
