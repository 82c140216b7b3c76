//! 패션 쇼핑몰 프론트엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. 템플릿과 인증 API 클라이언트를
//! 초기화한 뒤 페이지 라우트를 제공합니다.

use std::io;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use fashion_shop_frontend::config::{
    Environment, RateLimitConfig, ServerConfig, SessionCookieConfig, ViewConfig,
};
use fashion_shop_frontend::routes::{configure_all_routes, registered_views};
use fashion_shop_frontend::services::auth::AuthService;
use fashion_shop_frontend::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};
use fashion_shop_frontend::views::ViewRenderer;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("Fashion Shop Frontend");
    info!("🚀 패션 쇼핑몰 프론트엔드 시작중... ({:?})", Environment::current());

    // 1. 인증 API 클라이언트
    print_step_start(1, "Auth API client");
    let auth_service = web::Data::new(AuthService::from_env());
    let cookie_config = web::Data::new(SessionCookieConfig::from_env());
    print_sub_task("API_BASE_URL", auth_service.base_url());
    print_sub_task("register", &auth_service.register_url());
    print_sub_task("secure cookie", &cookie_config.secure.to_string());
    print_step_complete(1, "Auth API client ready", 1);

    // 2. 템플릿
    print_step_start(2, "View templates");
    let views = web::Data::new(ViewRenderer::new(ViewConfig::template_dir()));
    let view_names = registered_views();
    views.verify(&view_names).map_err(|e| {
        error!("템플릿 확인 실패 ({}): {}", views.template_dir().display(), e);
        io::Error::new(io::ErrorKind::NotFound, e.to_string())
    })?;
    print_step_complete(2, "View templates verified", view_names.len());

    info!("✅ 모든 구성요소가 성공적으로 초기화되었습니다!");

    start_http_server(auth_service, cookie_config, views, view_names.len()).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    auth_service: web::Data<AuthService>,
    cookie_config: web::Data<SessionCookieConfig>,
    views: web::Data<ViewRenderer>,
    page_count: usize,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    // Rate Limiting 설정
    let per_second = RateLimitConfig::per_second();
    let burst_size = RateLimitConfig::burst_size();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "Rate Limiting 설정 값은 0보다 커야 합니다",
            )
        })?;

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    print_final_summary(&bind_address, page_count);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(auth_service.clone())
            .app_data(cookie_config.clone())
            .app_data(views.clone())
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 표준 출력으로 남깁니다
    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match result {
        Ok(file) => println!("Current profile: {} ({} 파일 로드 됨)", profile, file),
        Err(e) => println!("Current profile: {} (.env 파일 로드 실패: {})", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// # Examples
///
/// ```bash
/// # 인증 API 호출 로그까지 보기
/// RUST_LOG=info,fashion_shop_frontend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
