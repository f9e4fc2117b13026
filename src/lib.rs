//! 제어 펄스용 시간 영역 기저 생성 라이브러리
//!
//! 각 생성기는 `[basis_index, time_sample]` 형태의 행렬을 반환하며,
//! 행들의 선형 결합으로 대역 제한 또는 지지 제한 제어 파형을 합성한다.

pub mod core;

// 핵심 모듈들 재수출
pub use core::{
    // 생성기
    gaussian_train_basis, sinusoidal_basis, slepian_basis, BasisGenerator, BasisSet,
    SlepianBasisGenerator,
    // 설정
    BasisConfig, GaussianTrainConfig, SinusoidalConfig, SlepianConfig, SlepianPruning,
    // 창 함수
    DpssWindow, TaperNorm, TaperSymmetry, TaperWindow,
    // 에러
    BasisError, BasisResult,
};
