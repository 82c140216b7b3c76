//! 세션/플래시 쿠키
//!
//! - `token`: 업스트림이 발급한 Bearer 토큰. 회원가입 성공 시에만 생성됩니다.
//! - `flash_success`: 리다이렉트 후 다음 페이지에 한 번만 표시되는 성공 메시지.

use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, SameSite, time::Duration};

/// 세션 토큰 쿠키 이름
pub const SESSION_COOKIE_NAME: &str = "token";

/// 세션 토큰 쿠키 수명 (24시간)
pub const SESSION_COOKIE_MAX_AGE_SECS: i64 = 24 * 60 * 60;

/// 플래시 메시지 쿠키 이름
pub const FLASH_COOKIE_NAME: &str = "flash_success";

/// 플래시 메시지가 소비되지 않았을 때의 최대 수명
const FLASH_COOKIE_MAX_AGE_SECS: i64 = 60;

/// 세션 토큰 쿠키를 생성합니다.
///
/// HTTP-only, 경로 `/`, 수명 24시간이며 `Secure` 속성은 설정을 따릅니다.
///
/// ```rust,ignore
/// let cookie = session_cookie("abc123", cookie_config.secure);
/// HttpResponse::Found().cookie(cookie);
/// ```
pub fn session_cookie(token: &str, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE_NAME, token.to_string())
        .http_only(true)
        .secure(secure)
        .path("/")
        .max_age(Duration::seconds(SESSION_COOKIE_MAX_AGE_SECS))
        .finish()
}

/// 다음 페이지에 표시할 성공 메시지 쿠키를 생성합니다.
///
/// 응답 헤더에는 값이 그대로 기록되고 요청 쿠키는 디코딩되어 읽히므로,
/// 메시지를 퍼센트 인코딩해 저장합니다. `;`나 `%`가 포함되어도 [`read_flash`]는
/// 원래 메시지를 돌려받습니다.
pub fn flash_cookie(message: &str) -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE_NAME, urlencoding::encode(message).into_owned())
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(FLASH_COOKIE_MAX_AGE_SECS))
        .finish()
}

/// 요청에 담긴 플래시 메시지를 읽습니다. 빈 값은 무시합니다.
pub fn read_flash(req: &HttpRequest) -> Option<String> {
    req.cookie(FLASH_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|message| !message.trim().is_empty())
}

/// 플래시 메시지 쿠키를 제거하는 쿠키
pub fn flash_removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE_NAME, "").path("/").finish();
    cookie.make_removal();
    cookie
}
