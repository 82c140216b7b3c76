//! Authentication HTTP Handlers
//!
//! 로그인/회원가입/비밀번호 찾기 페이지와 회원가입 제출을 처리합니다.
//! 인증 자체는 업스트림 인증 API가 담당하며, 이 핸들러는 요청을 전달하고
//! 결과를 페이지로 변환하는 역할만 합니다.
//!
//! # Endpoints
//!
//! - `GET /auth/login` - 로그인 폼
//! - `GET /auth/register` - 회원가입 폼
//! - `POST /auth/register` - 회원가입 제출
//! - `GET /auth/forget-password` - 비밀번호 찾기 폼
use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::config::SessionCookieConfig;
use crate::domain::RegisterRequest;
use crate::errors::{AppResult, VALIDATION_FAILED_MESSAGE};
use crate::handlers::pages::DASHBOARD_PATH;
use crate::services::auth::AuthService;
use crate::utils::string_utils::mask_email;
use crate::views::cookies::{flash_cookie, session_cookie};
use crate::views::{PageContext, ViewRenderer};

/// 회원가입 폼 뷰 이름
pub const SIGNIN_VIEW: &str = "signin";

/// 인증 라우트가 렌더링하는 모든 뷰
pub const AUTH_VIEWS: &[&str] = &["login", SIGNIN_VIEW, "forget-password"];

/// 로그인 페이지
///
/// # Endpoint
/// `GET /auth/login`
#[get("/login")]
pub async fn login_page(
    req: HttpRequest,
    views: web::Data<ViewRenderer>,
) -> AppResult<HttpResponse> {
    views.page(&req, "login")
}

/// 회원가입 페이지
///
/// 빈 폼 모델과 함께 회원가입 폼을 렌더링합니다.
///
/// # Endpoint
/// `GET /auth/register`
#[get("/register")]
pub async fn register_page(
    req: HttpRequest,
    views: web::Data<ViewRenderer>,
) -> AppResult<HttpResponse> {
    let context = PageContext::new(SIGNIN_VIEW).with_register_request(RegisterRequest::default());
    views.page_with(&req, StatusCode::OK, context)
}

/// 회원가입 제출 핸들러
///
/// 폼 검증 → 업스트림 전달 → 결과 변환의 단일 흐름입니다.
///
/// 1. 폼을 해석할 수 없거나(`Content-Type` 누락 등) 필수 항목이 비어 있으면
///    업스트림 호출 없이 폼을 다시 렌더링합니다.
/// 2. 성공하면 `token` 쿠키와 플래시 메시지를 설정하고 대시보드로 리다이렉트합니다.
/// 3. 실패하면 분류된 에러 메시지와 입력값(비밀번호 제외)으로 폼을 다시 렌더링합니다.
///
/// # Endpoint
/// `POST /auth/register` (`application/x-www-form-urlencoded`)
#[post("/register")]
pub async fn register(
    req: HttpRequest,
    form: Result<web::Form<RegisterRequest>, actix_web::Error>,
    auth_service: web::Data<AuthService>,
    cookie_config: web::Data<SessionCookieConfig>,
    views: web::Data<ViewRenderer>,
) -> AppResult<HttpResponse> {
    let request = match form {
        Ok(form) => form.into_inner(),
        Err(e) => {
            log::info!("회원가입 폼 해석 실패: {}", e);
            return render_signin_error(
                &req,
                &views,
                &RegisterRequest::default(),
                VALIDATION_FAILED_MESSAGE,
            );
        }
    };

    // 유효성 검사
    if let Err(e) = request.validate() {
        log::info!(
            "회원가입 폼 검증 실패 - 사용자: {}, 필드: {:?}",
            mask_email(&request.email),
            e.field_errors().keys().collect::<Vec<_>>()
        );
        return render_signin_error(&req, &views, &request, VALIDATION_FAILED_MESSAGE);
    }

    match auth_service.register(&request).await {
        Ok(auth) => {
            let mut response = HttpResponse::Found();
            response
                .insert_header((LOCATION, DASHBOARD_PATH))
                .cookie(session_cookie(&auth.token, cookie_config.secure));

            if !auth.message.trim().is_empty() {
                response.cookie(flash_cookie(&auth.message));
            }

            Ok(response.finish())
        }
        Err(e) => {
            log::warn!("회원가입 실패 - 사용자: {}, 원인: {}", mask_email(&request.email), e);
            render_signin_error(&req, &views, &request, &e.user_message())
        }
    }
}

/// 비밀번호 찾기 페이지
///
/// # Endpoint
/// `GET /auth/forget-password`
#[get("/forget-password")]
pub async fn forget_password_page(
    req: HttpRequest,
    views: web::Data<ViewRenderer>,
) -> AppResult<HttpResponse> {
    views.page(&req, "forget-password")
}

/// 에러 메시지와 입력값으로 회원가입 폼을 다시 렌더링합니다.
fn render_signin_error(
    req: &HttpRequest,
    views: &ViewRenderer,
    request: &RegisterRequest,
    message: &str,
) -> AppResult<HttpResponse> {
    let context = PageContext::new(SIGNIN_VIEW)
        .with_error(message)
        .with_register_request(request.without_password());

    views.page_with(req, StatusCode::OK, context)
}
