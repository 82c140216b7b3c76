//! # Configuration Module
//!
//! 프론트엔드 서버의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Value("${api.base.url:...}")` 주입과 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, Rate Limiting 설정
//! - [`auth_config`] - 업스트림 인증 API, 세션 쿠키 설정
//! - [`view_config`] - 템플릿 디렉터리 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="development"
//!
//! # 업스트림 인증 API
//! export API_BASE_URL="http://localhost:8000"
//!
//! # 세션 쿠키 (미설정 시 production 에서만 true)
//! export COOKIE_SECURE="false"
//!
//! # 템플릿
//! export TEMPLATE_DIR="templates"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Value("${api.base.url:http://localhost:8000}")` | `AuthApiConfig::base_url()` |
//! | `server.port` | `ServerConfig::port()` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |

pub mod data_config;
pub mod auth_config;
pub mod view_config;

pub use data_config::*;
pub use auth_config::*;
pub use view_config::*;
