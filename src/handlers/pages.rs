//! Page HTTP Handlers
//!
//! 정적 페이지 라우트를 처리합니다. 각 라우트는 경로 하나를 뷰 이름 하나에
//! 대응시키는 순수한 매핑이며, 입력이나 부수효과가 없습니다.
//!
//! # Page Groups
//!
//! - **일반 페이지**: 홈, 소개, 연락처, FAQ, 준비중, UI 요소 데모
//! - **쇼핑**: 상품 목록, 상품 상세, 장바구니, 주문/결제, 주문 완료
//! - **사용자**: 대시보드, 프로필, 배송지, 주문 내역
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::AppResult;
use crate::views::{PageContext, ViewRenderer};

/// 경로 → 뷰 매핑 한 건
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRoute {
    /// 요청 경로 (`GET`)
    pub path: &'static str,
    /// 렌더링할 뷰 이름
    pub view: &'static str,
}

const fn page(path: &'static str, view: &'static str) -> PageRoute {
    PageRoute { path, view }
}

/// 사용자 대시보드 경로 (회원가입 성공 후 리다이렉트 대상)
pub const DASHBOARD_PATH: &str = "/user/dashboard";

/// 404 뷰 이름
pub const NOT_FOUND_VIEW: &str = "404";

/// 모든 정적 페이지 라우트
pub const PAGES: &[PageRoute] = &[
    page("/", "index"),
    // 소개 & 연락처
    page("/about", "about"),
    page("/contact", "contact"),
    page("/faq", "faq"),
    page("/coming-soon", "coming-soon"),
    // UI 요소
    page("/typography", "typography"),
    page("/buttons", "buttons"),
    page("/alerts", "alerts"),
    // 쇼핑
    page("/shop", "shop"),
    page("/shop/sidebar", "shop-sidebar"),
    page("/shop/product", "product-single"),
    page("/shop/cart", "cart"),
    page("/shop/empty-cart", "empty-cart"),
    page("/shop/checkout", "checkout"),
    page("/shop/confirmation", "confirmation"),
    page("/shop/purchase-confirmation", "purchase-confirmation"),
    // 사용자
    page(DASHBOARD_PATH, "dashboard"),
    page("/user/profile", "profile-details"),
    page("/user/address", "address"),
    page("/user/orders", "order"),
];

/// 페이지 라우트를 등록합니다.
///
/// [`PAGES`]의 각 항목을 `GET` 라우트로 등록하며, 모든 라우트는
/// 같은 렌더링 경로([`ViewRenderer::page`])를 사용합니다.
pub fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    for page in PAGES {
        let view = page.view;
        cfg.route(
            page.path,
            web::get().to(move |req: HttpRequest, views: web::Data<ViewRenderer>| async move {
                views.page(&req, view)
            }),
        );
    }
}

/// 등록되지 않은 경로에 대한 404 페이지
pub async fn not_found(
    req: HttpRequest,
    views: web::Data<ViewRenderer>,
) -> AppResult<HttpResponse> {
    log::debug!("등록되지 않은 경로 요청: {} {}", req.method(), req.path());
    views.page_with(&req, StatusCode::NOT_FOUND, PageContext::new(NOT_FOUND_VIEW))
}
