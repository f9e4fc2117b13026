//! 등간격 가우시안 펄스 트레인 기저

use log::debug;
use ndarray::{Array2, Zip};
use std::f64::consts::PI;

use super::{BasisGenerator, BasisSet};
use crate::core::config::{
    ensure_basis_shape, ensure_positive, ensure_time_slots, invalid_configuration, GaussianTrainConfig,
};
use crate::core::error::BasisResult;

/// 창 양 끝에 남겨두는 여유 (표준편차 배수)
pub const BOUNDARY_SIGMAS: f64 = 3.0;

impl GaussianTrainConfig {
    /// 첫 펄스 중심 = 양 끝 여유
    pub fn boundary(&self) -> f64 {
        BOUNDARY_SIGMAS * self.standard_deviation
    }

    /// 전체 창 길이 (초)
    pub fn window_duration(&self) -> f64 {
        self.n_time_slots as f64 * self.discretization_time
    }
}

impl BasisGenerator for GaussianTrainConfig {
    fn basis_count(&self) -> BasisResult<usize> {
        ensure_time_slots(self.n_time_slots)?;
        ensure_positive("discretization_time", self.discretization_time)?;
        ensure_positive("standard_deviation", self.standard_deviation)?;
        ensure_positive("delay", self.delay)?;

        let boundary = self.boundary();
        let window = self.window_duration();
        if window < 2.0 * boundary {
            return Err(invalid_configuration(format!(
                "standard deviation too high (standard_deviation={}, window={}s needs at least {}s)",
                self.standard_deviation,
                window,
                2.0 * boundary
            )));
        }

        let raw = (1.0 + (window - 2.0 * boundary) / self.delay).floor();
        ensure_basis_shape(raw, self.n_time_slots)
    }

    fn generate(&self) -> BasisResult<BasisSet> {
        let count = self.basis_count()?;
        let boundary = self.boundary();
        let dt = self.discretization_time;
        let sigma = self.standard_deviation;
        let delay = self.delay;
        // 단위 면적 가우시안의 최댓값
        let factor = 1.0 / (sigma * (2.0 * PI).sqrt());

        let mut basis = Array2::<f64>::zeros((count, self.n_time_slots));
        Zip::indexed(&mut basis).par_for_each(|(i, n), value| {
            let center = boundary + i as f64 * delay;
            let z = (n as f64 * dt - center) / sigma;
            *value = factor * (-0.5 * (z * z)).exp();
        });

        debug!(
            "gaussian train basis: {} pulses, boundary={}s, delay={}s",
            count, boundary, delay
        );
        Ok(basis)
    }
}

/// 가우시안 펄스 트레인 기저 생성
///
/// 중심은 `3 * standard_deviation`에서 시작해 `delay` 간격으로 배치
pub fn gaussian_train_basis(
    n_time_slots: usize,
    discretization_time: f64,
    standard_deviation: f64,
    delay: f64,
) -> BasisResult<BasisSet> {
    GaussianTrainConfig {
        n_time_slots,
        discretization_time,
        standard_deviation,
        delay,
    }
    .generate()
}
