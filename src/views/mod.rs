//! # View Rendering Module
//!
//! 뷰 이름을 HTML 응답으로 변환합니다. Spring MVC의 `ViewResolver` + Thymeleaf
//! 역할에 해당하며, 템플릿 엔진으로 `minijinja`를 사용합니다.
//!
//! 뷰 `shop-sidebar`는 템플릿 디렉터리의 `shop-sidebar.html`로 해석됩니다.
//! 모든 템플릿은 같은 모델([`PageContext`])을 받습니다.
//!
//! ## 플래시 메시지
//!
//! 페이지를 렌더링할 때마다 `flash_success` 쿠키를 읽어 `success`로 전달하고,
//! 응답에서 쿠키를 제거합니다. 따라서 메시지는 리다이렉트 직후의 한 페이지에만 표시됩니다.

pub mod cookies;

use std::path::PathBuf;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse};
use minijinja::Environment;
use serde::Serialize;

use crate::domain::RegisterRequest;
use crate::errors::{AppError, AppResult, ErrorContext};
use cookies::{flash_removal_cookie, read_flash};

/// 모든 템플릿에 전달되는 모델
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageContext {
    /// 렌더링할 뷰 이름
    pub view: String,
    /// 일회성 성공 메시지
    pub success: Option<String>,
    /// 폼 에러 메시지
    pub error: Option<String>,
    /// 회원가입 폼 입력값 (비밀번호 제외)
    pub register_request: Option<RegisterRequest>,
}

impl PageContext {
    pub fn new(view: &str) -> Self {
        Self {
            view: view.to_string(),
            ..Default::default()
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_register_request(mut self, request: RegisterRequest) -> Self {
        self.register_request = Some(request);
        self
    }
}

/// 템플릿 렌더러
///
/// 프로세스 시작 시 한 번 생성되어 `web::Data`로 공유됩니다.
/// 템플릿은 처음 사용될 때 디스크에서 읽혀 캐시됩니다.
pub struct ViewRenderer {
    env: Environment<'static>,
    template_dir: PathBuf,
}

impl ViewRenderer {
    /// 템플릿 디렉터리를 지정하여 렌더러를 생성합니다.
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        let template_dir = template_dir.into();
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(template_dir.clone()));

        Self { env, template_dir }
    }

    pub fn template_dir(&self) -> &PathBuf {
        &self.template_dir
    }

    /// 뷰 이름에 해당하는 템플릿 파일 이름
    pub fn template_name(view: &str) -> String {
        format!("{}.html", view)
    }

    /// 주어진 뷰들이 모두 로드 가능한지 확인합니다.
    ///
    /// 서버 시작 시 호출하여 누락된 템플릿을 첫 요청 전에 발견합니다.
    pub fn verify(&self, views: &[&str]) -> AppResult<()> {
        for view in views {
            self.env
                .get_template(&Self::template_name(view))
                .map_err(|e| AppError::TemplateError(format!("{}: {}", view, e)))?;
        }
        Ok(())
    }

    /// 모델을 사용해 뷰를 HTML 문자열로 렌더링합니다.
    pub fn render(&self, context: &PageContext) -> AppResult<String> {
        let template = self
            .env
            .get_template(&Self::template_name(&context.view))
            .map_err(|e| AppError::TemplateError(format!("{}: {}", context.view, e)))?;

        template
            .render(context)
            .with_context(|| format!("템플릿 렌더링 실패 ({})", context.view))
    }

    /// 기본 모델로 페이지를 렌더링합니다 (200 OK).
    pub fn page(&self, req: &HttpRequest, view: &str) -> AppResult<HttpResponse> {
        self.page_with(req, StatusCode::OK, PageContext::new(view))
    }

    /// 상태 코드와 모델을 지정하여 페이지를 렌더링합니다.
    ///
    /// 요청에 플래시 메시지가 있으면 모델에 담고 응답에서 쿠키를 제거합니다.
    pub fn page_with(
        &self,
        req: &HttpRequest,
        status: StatusCode,
        mut context: PageContext,
    ) -> AppResult<HttpResponse> {
        let flash = read_flash(req);
        if context.success.is_none() {
            context.success = flash.clone();
        }

        let html = self.render(&context)?;

        let mut builder = HttpResponse::build(status);
        builder.content_type(ContentType::html());
        if flash.is_some() {
            builder.cookie(flash_removal_cookie());
        }

        Ok(builder.body(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::cookies::FLASH_COOKIE_NAME;
    use actix_web::body::to_bytes;
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;

    fn renderer() -> ViewRenderer {
        ViewRenderer::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
    }

    #[test]
    fn test_render_exposes_view_name() {
        let html = renderer().render(&PageContext::new("about")).unwrap();
        assert!(html.contains(r#"data-view="about""#));
    }

    #[test]
    fn test_render_escapes_error_message() {
        let context = PageContext::new("signin").with_error("<script>alert(1)</script>");
        let html = renderer().render(&context).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_unknown_view_is_template_error() {
        let result = renderer().render(&PageContext::new("does-not-exist"));
        assert!(matches!(result, Err(AppError::TemplateError(_))));
    }

    #[test]
    fn test_verify_reports_missing_template() {
        let renderer = renderer();
        assert!(renderer.verify(&["index", "signin"]).is_ok());
        assert!(renderer.verify(&["index", "missing-view"]).is_err());
    }

    #[actix_web::test]
    async fn test_page_consumes_flash_message() {
        let req = TestRequest::default()
            .cookie(Cookie::new(FLASH_COOKIE_NAME, "Welcome"))
            .to_http_request();

        let response = renderer().page(&req, "dashboard").unwrap();

        let removal = response
            .cookies()
            .find(|cookie| cookie.name() == FLASH_COOKIE_NAME)
            .expect("flash cookie should be removed");
        assert_eq!(removal.value(), "");

        let body = to_bytes(response.into_body()).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Welcome"));
    }

    #[actix_web::test]
    async fn test_page_without_flash_sets_no_cookie() {
        let req = TestRequest::default().to_http_request();
        let response = renderer().page(&req, "index").unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.cookies().count(), 0);
    }
}
