//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 실행 프로필, HTTP 리스너, 요청 빈도 제한 값을 환경 변수에서 읽습니다.
//! 값이 없거나 파싱할 수 없으면 기본값을 사용하며, 서버 시작을 막지 않습니다.
//!
//! | 변수 | 기본값 |
//! |------|--------|
//! | `ENVIRONMENT` / `NODE_ENV` | `production` |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8080` |
//! | `WORKERS` | `4` |
//! | `RATE_LIMIT_PER_SECOND` | `100` |
//! | `RATE_LIMIT_BURST_SIZE` | `200` |

use std::env;
use std::str::FromStr;

/// 배포 프로필
///
/// 쿠키의 `Secure` 속성 기본값을 결정하는 데 사용됩니다
/// ([`SessionCookieConfig`](super::SessionCookieConfig) 참고).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 로컬 개발 (HTTP)
    Development,
    /// 자동화 테스트
    Test,
    /// 운영 전 검증
    Staging,
    /// 운영 (HTTPS)
    Production,
}

impl Environment {
    /// 프로세스의 배포 프로필을 반환합니다.
    ///
    /// `ENVIRONMENT`가 우선이며, 없으면 `NODE_ENV`를 확인합니다.
    /// 둘 다 없으면 가장 보수적인 `Production`으로 간주합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .map(|name| Self::from_name(&name))
            .unwrap_or(Environment::Production)
    }

    /// 프로필 이름(별칭 포함, 대소문자 무관)을 해석합니다.
    ///
    /// 알 수 없는 이름은 `Production`으로 처리됩니다.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// HTTP 리스너 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 리스닝 포트 (`PORT`)
    pub fn port() -> u16 {
        parse_or_default("PORT", 8080)
    }

    /// 리스닝 주소 (`HOST`). 기본값은 모든 인터페이스입니다.
    pub fn host() -> String {
        env::var("HOST")
            .ok()
            .map(|host| host.trim().to_string())
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수 (`WORKERS`). 0은 기본값으로 대체됩니다.
    pub fn workers() -> usize {
        match parse_or_default("WORKERS", 4usize) {
            0 => 4,
            workers => workers,
        }
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
///
/// 회원가입 폼을 포함한 모든 요청에 클라이언트 IP 단위로 적용됩니다.
///
/// ```bash
/// # 개발 환경에서는 낮게
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
/// ```
pub struct RateLimitConfig;

impl RateLimitConfig {
    /// 초당 허용 요청 수 (`RATE_LIMIT_PER_SECOND`)
    pub fn per_second() -> u64 {
        parse_or_default("RATE_LIMIT_PER_SECOND", 100)
    }

    /// 버스트 허용량 (`RATE_LIMIT_BURST_SIZE`)
    pub fn burst_size() -> u32 {
        parse_or_default("RATE_LIMIT_BURST_SIZE", 200)
    }
}

/// 환경 변수를 파싱하고, 값이 없거나 잘못된 경우 기본값을 사용합니다.
fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}
