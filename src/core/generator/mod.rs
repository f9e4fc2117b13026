//! # 제어 기저 생성기
//!
//! 모든 생성기는 `[basis_index, time_sample]` 형태의 행렬을 반환한다.
//! 행들의 선형 결합으로 임의의 제어 파형을 합성한다.

pub mod gaussian_train;
pub mod sinusoidal;
pub mod slepian;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

use ndarray::Array2;

use crate::core::error::BasisResult;

/// 기저 행렬 `[basis_count, n_time_slots]`
pub type BasisSet = Array2<f64>;

/// 기저 생성기 공통 인터페이스
///
/// 상태가 없으므로 같은 입력에 대해 항상 같은 행렬을 반환한다.
pub trait BasisGenerator {
    /// 파라미터에서 유도된 기저 수 (1 미만이면 `InvalidConfiguration`)
    fn basis_count(&self) -> BasisResult<usize>;

    /// 기저 행렬 생성
    fn generate(&self) -> BasisResult<BasisSet>;
}

// 재수출
pub use gaussian_train::{gaussian_train_basis, BOUNDARY_SIGMAS};
pub use sinusoidal::{sinusoidal_basis, EPSILON};
pub use slepian::{count_valid_rows, slepian_basis, SlepianBasisGenerator, EIGENBASIS_PER_NW};
