//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 문자열 처리, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 로그 마스킹 유틸리티
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::mask_email;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! log::info!("회원가입 요청: {}", mask_email("jane@shop.io"));
//! print_boxed_title("Fashion Shop Started");
//! ```

pub mod string_utils;
pub mod display_terminal;
