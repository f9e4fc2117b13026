//! # 제어 기저 핵심 모듈
//!
//! 사인파, Slepian, 가우시안 트레인 기저 생성기와 이를 받치는 수치 구성 요소들

pub mod config;
pub mod error;
pub mod generator;
pub mod math;
pub mod window;

// 주요 타입들 재수출
pub use config::*;
pub use error::*;
pub use generator::*;
pub use window::*;
