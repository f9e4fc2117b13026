//! # 창 함수 모듈
//!
//! Slepian 기저가 사용하는 DPSS 창 생성

pub mod dpss;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use dpss::{DpssWindow, TaperNorm, TaperSymmetry, TaperWindow};
