//! 이산 장구 회전 타원체 수열 (DPSS, Slepian 수열)
//!
//! 길이 `M`, 반대역폭 곱 `NW`에 대해 대역 `[-W, W]` (`W = NW / M`) 안에
//! 에너지가 가장 집중된 수열들을 계산한다.
//!
//! 대칭 삼중대각 연산자의 고유벡터가 곧 DPSS이며, 고유값이 큰 순서가
//! 스펙트럼 집중도가 큰 순서와 같다.
//!
//! ```text
//! diag[n]    = ((M - 1 - 2n) / 2)^2 * cos(2*pi*W)      n = 0..M
//! offdiag[n] = n * (M - n) / 2                          n = 1..M
//! ```

use log::debug;
use nalgebra::{DMatrix, SymmetricEigen};
use ndarray::{s, Array1, Array2, Axis};
use rayon::prelude::*;
use std::f64::consts::PI;

use crate::core::config::invalid_configuration;
use crate::core::error::{BasisError, BasisResult};
use crate::core::math::{autocorrelation, row_peak_magnitudes};

/// 창 함수 제공자 (DPSS 생성 인터페이스)
///
/// `count`개의 길이 `len` 수열을 행으로 반환하며, 행은 스펙트럼 집중도가
/// 감소하는 순서
pub trait TaperWindow {
    fn tapers(&self, len: usize, half_bandwidth: f64, count: usize) -> BasisResult<Array2<f64>>;
}

/// 대칭성
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaperSymmetry {
    /// 필터 설계용 대칭 창
    #[default]
    Symmetric,
    /// 스펙트럼 분석용 주기 창 (`len + 1`로 계산 후 마지막 샘플 제거)
    Periodic,
}

/// 정규화 방식
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaperNorm {
    /// 각 행 L2 노름 1
    #[default]
    UnitEnergy,
    /// 각 행 최댓값 1, 짝수 길이면 `M^2 / (M^2 + NW)` 보정
    Approximate,
}

/// 삼중대각 고유값 분해 기반 DPSS 생성기
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DpssWindow {
    pub symmetry: TaperSymmetry,
    pub norm: TaperNorm,
}

impl DpssWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symmetry(mut self, symmetry: TaperSymmetry) -> Self {
        self.symmetry = symmetry;
        self
    }

    pub fn with_norm(mut self, norm: TaperNorm) -> Self {
        self.norm = norm;
        self
    }

    /// 각 테이퍼의 대역 내 에너지 비율 (집중도)
    ///
    /// `ratio = sum_j rxx[j] * r[j] / rxx[0]`, `r[0] = 2W`, `r[j] = 4W sinc(2Wj)`
    pub fn concentration_ratios(
        &self,
        len: usize,
        half_bandwidth: f64,
        count: usize,
    ) -> BasisResult<Array1<f64>> {
        validate(len, half_bandwidth, count)?;
        let m = self.computed_len(len);
        let tapers = solve_tapers(m, half_bandwidth, count)?;

        let w = half_bandwidth / m as f64;
        let kernel: Vec<f64> = (0..m)
            .map(|j| {
                if j == 0 {
                    2.0 * w
                } else {
                    let x = PI * 2.0 * w * j as f64;
                    4.0 * w * x.sin() / x
                }
            })
            .collect();

        let ratios: Vec<f64> = tapers
            .axis_iter(Axis(0))
            .into_par_iter()
            .map(|row| {
                let rxx = autocorrelation(&row.to_vec());
                let in_band: f64 = rxx.iter().zip(kernel.iter()).map(|(a, b)| a * b).sum();
                in_band / rxx[0]
            })
            .collect();

        Ok(Array1::from(ratios))
    }

    fn computed_len(&self, len: usize) -> usize {
        match self.symmetry {
            TaperSymmetry::Symmetric => len,
            TaperSymmetry::Periodic => len + 1,
        }
    }
}

impl TaperWindow for DpssWindow {
    fn tapers(&self, len: usize, half_bandwidth: f64, count: usize) -> BasisResult<Array2<f64>> {
        validate(len, half_bandwidth, count)?;
        if len == 1 {
            return Ok(Array2::ones((count, 1)));
        }

        let m = self.computed_len(len);
        let mut tapers = solve_tapers(m, half_bandwidth, count)?;

        if self.norm == TaperNorm::Approximate {
            let peaks = row_peak_magnitudes(tapers.view())?;
            let correction = if m % 2 == 0 {
                let m_sq = (m * m) as f64;
                m_sq / (m_sq + half_bandwidth)
            } else {
                1.0
            };
            for (mut row, &peak) in tapers.axis_iter_mut(Axis(0)).zip(peaks.iter()) {
                row.mapv_inplace(|x| x / peak * correction);
            }
        }

        if m != len {
            tapers = tapers.slice(s![.., ..len]).to_owned();
        }
        Ok(tapers)
    }
}

fn validate(len: usize, half_bandwidth: f64, count: usize) -> BasisResult<()> {
    if len == 0 {
        return Err(invalid_configuration("DPSS length must be at least 1".to_string()));
    }
    if !half_bandwidth.is_finite() || half_bandwidth <= 0.0 {
        return Err(invalid_configuration(format!(
            "DPSS half-bandwidth product must be positive, got NW={}",
            half_bandwidth
        )));
    }
    if half_bandwidth >= len as f64 / 2.0 {
        return Err(invalid_configuration(format!(
            "DPSS half-bandwidth product must be less than len/2, got NW={} for len={}",
            half_bandwidth, len
        )));
    }
    if count == 0 || count > len {
        return Err(invalid_configuration(format!(
            "DPSS count must be in 1..={}, got {}",
            len, count
        )));
    }
    Ok(())
}

/// 길이 `m` 삼중대각 연산자의 상위 `count`개 고유벡터 (단위 노름, 부호 고정)
///
/// 연산자를 `m x m` 밀집 행렬로 만들어 분해하므로 메모리 O(m^2), 시간 O(m^3).
/// 수천 슬롯 이상에서는 눈에 띄게 느리다.
fn solve_tapers(m: usize, half_bandwidth: f64, count: usize) -> BasisResult<Array2<f64>> {
    let w = half_bandwidth / m as f64;
    let cos_term = (2.0 * PI * w).cos();
    let m_f = m as f64;

    let operator = DMatrix::from_fn(m, m, |r, c| {
        if r == c {
            let centered = (m_f - 1.0 - 2.0 * r as f64) / 2.0;
            centered * centered * cos_term
        } else if r + 1 == c || c + 1 == r {
            let k = r.max(c) as f64;
            k * (m_f - k) / 2.0
        } else {
            0.0
        }
    });

    let eigen = SymmetricEigen::try_new(operator, f64::EPSILON, 0).ok_or_else(|| {
        BasisError::Numerical(format!(
            "DPSS eigen-decomposition did not converge (len={}, NW={})",
            m, half_bandwidth
        ))
    })?;

    // 고유값 내림차순 = 집중도 내림차순
    let mut order: Vec<usize> = (0..m).collect();
    order.sort_by(|&a, &b| eigen.eigenvalues[b].total_cmp(&eigen.eigenvalues[a]));

    let mut tapers = Array2::from_shape_fn((count, m), |(k, n)| eigen.eigenvectors[(n, order[k])]);

    let threshold = (1.0 / m_f).max(1e-7);
    for (k, mut row) in tapers.axis_iter_mut(Axis(0)).enumerate() {
        let norm = row.dot(&row).sqrt();
        if !norm.is_finite() || norm == 0.0 {
            return Err(BasisError::Numerical(format!(
                "DPSS taper {} is degenerate (len={}, NW={})",
                k, m, half_bandwidth
            )));
        }
        row.mapv_inplace(|x| x / norm);

        // 짝수 차수: 합이 양수, 홀수 차수: 첫 유의미한 로브가 양수
        let flip = if k % 2 == 0 {
            row.sum() < 0.0
        } else {
            row.iter()
                .find(|&&x| x * x > threshold)
                .map_or(false, |&x| x < 0.0)
        };
        if flip {
            row.mapv_inplace(|x| -x);
        }
    }

    debug!(
        "DPSS: len={}, NW={}, count={}, top eigenvalue={}",
        m,
        half_bandwidth,
        count,
        eigen.eigenvalues[order[0]]
    );
    Ok(tapers)
}
