//! # Domain Module
//!
//! 이 프론트엔드가 다루는 데이터는 회원가입 요청과 업스트림 인증 응답뿐입니다.
//! 영속화되는 엔티티는 없으며, 모든 값은 요청 하나의 수명 안에서 생성되고 버려집니다.

pub mod dto;

pub use dto::*;
