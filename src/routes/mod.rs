//! 라우트 설정 모듈
//!
//! 페이지 라우트, 인증 라우트, 헬스체크 엔드포인트를 애플리케이션에 등록합니다.
//! 등록되지 않은 경로는 404 페이지로 처리됩니다.
//!
//! # Route Groups
//!
//! - `GET /health` - 헬스체크 (JSON)
//! - 페이지 라우트 - [`handlers::pages::PAGES`] 참고
//! - `/auth/*` - 로그인/회원가입/비밀번호 찾기
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(auth_service.clone())
//!     .app_data(cookie_config.clone())
//!     .app_data(views.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 핸들러가 사용하는 `web::Data` 값(`AuthService`, `SessionCookieConfig`,
/// `ViewRenderer`)은 호출하는 쪽에서 등록해야 합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    handlers::pages::configure_page_routes(cfg);
    configure_auth_routes(cfg);

    // 나머지 모든 요청은 404 페이지
    cfg.default_service(web::to(handlers::pages::not_found));
}

/// 등록된 라우트가 렌더링할 수 있는 모든 뷰 이름
///
/// 서버 시작 시 템플릿 누락 여부를 확인하는 데 사용됩니다.
pub fn registered_views() -> Vec<&'static str> {
    handlers::pages::PAGES
        .iter()
        .map(|page| page.view)
        .chain(handlers::auth::AUTH_VIEWS.iter().copied())
        .chain(std::iter::once(handlers::pages::NOT_FOUND_VIEW))
        .collect()
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /auth/login` - 로그인 폼
/// - `GET /auth/register` - 회원가입 폼
/// - `POST /auth/register` - 회원가입 제출 (업스트림 인증 API로 전달)
/// - `GET /auth/forget-password` - 비밀번호 찾기 폼
///
/// # Examples
///
/// ```bash
/// curl -i -X POST http://localhost:8080/auth/register \
///   -d 'fullName=Jane+Doe&email=jane%40shop.io&password=secret&phone=0901234567'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::login_page)
            .service(handlers::auth::register_page)
            .service(handlers::auth::register)
            .service(handlers::auth::forget_password_page)
            .default_service(web::to(handlers::pages::not_found)),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "fashion_shop_frontend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 테스트용 애플리케이션 구성
#[cfg(test)]
pub(crate) mod test_support {
    use super::configure_all_routes;
    use crate::config::SessionCookieConfig;
    use crate::services::auth::AuthService;
    use crate::views::ViewRenderer;
    use actix_web::web;

    /// 주어진 인증 API 주소와 저장소의 `templates/`로 전체 라우트를 구성합니다.
    pub fn configure_for_test(base_url: &str) -> impl FnOnce(&mut web::ServiceConfig) {
        let base_url = base_url.to_string();
        move |cfg: &mut web::ServiceConfig| {
            cfg.app_data(web::Data::new(AuthService::new(reqwest::Client::new(), base_url)))
                .app_data(web::Data::new(SessionCookieConfig { secure: false }))
                .app_data(web::Data::new(ViewRenderer::new(concat!(
                    env!("CARGO_MANIFEST_DIR"),
                    "/templates"
                ))));
            configure_all_routes(cfg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::configure_for_test;
    use actix_web::http::StatusCode;
    use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
    use actix_web::App;

    #[actix_web::test]
    async fn test_health_check() {
        let app = init_service(
            App::new().configure(configure_for_test("http://127.0.0.1:1")),
        )
        .await;

        let req = TestRequest::get().uri("/health").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "fashion_shop_frontend");
    }

    #[test]
    fn test_registered_views_have_templates() {
        let views = crate::views::ViewRenderer::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"));
        let registered = super::registered_views();

        assert_eq!(registered.len(), 24);
        assert!(views.verify(&registered).is_ok());
    }

    #[actix_web::test]
    async fn test_unknown_auth_path_renders_not_found() {
        let app = init_service(
            App::new().configure(configure_for_test("http://127.0.0.1:1")),
        )
        .await;

        let req = TestRequest::get().uri("/auth/unknown").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
