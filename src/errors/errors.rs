//! 페이지 렌더링 에러
//!
//! 핸들러가 `?`로 전파하는 에러 타입입니다. 템플릿 누락이나 렌더링 실패처럼
//! 사용자가 고칠 수 없는 문제만 여기에 속하며, 모두 500 페이지로 응답합니다.
//!
//! 회원가입 흐름의 실패는 이 타입으로 전파되지 않습니다. 업스트림 호출 실패는
//! [`RegistrationError`](super::registration::RegistrationError)로 분류되어
//! 회원가입 폼에 메시지로 다시 표시됩니다.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 500 응답 본문. 에러 상세는 로그에만 남습니다.
const ERROR_PAGE: &str = "<!DOCTYPE html>\
<html><head><meta charset=\"utf-8\"><title>Error | Fashion Shop</title></head>\
<body><h1>Something went wrong</h1><p>Please try again later.</p><a href=\"/\">Go Home</a></body></html>";

/// 페이지 처리 에러
#[derive(Error, Debug)]
pub enum AppError {
    /// 뷰에 해당하는 템플릿을 찾거나 파싱할 수 없음
    #[error("Template error: {0}")]
    TemplateError(String),

    /// 템플릿 렌더링 등 그 밖의 내부 실패
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("페이지 처리 실패: {}", self);

        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(ERROR_PAGE)
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러에 설명을 붙여 [`AppError::InternalError`]로 변환합니다.
///
/// ```rust,ignore
/// template.render(&context).with_context(|| format!("템플릿 렌더링 실패 ({})", view))?;
/// ```
pub trait ErrorContext<T> {
    /// 설명 문자열은 에러가 발생한 경우에만 만들어집니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
