//! 양 끝이 0에서 시작하고 끝나는 사인파 기저

use log::{debug, warn};
use ndarray::{Array2, Zip};
use std::f64::consts::PI;

use super::{BasisGenerator, BasisSet};
use crate::core::config::{
    ensure_basis_shape, ensure_positive, ensure_time_slots, invalid_configuration, SinusoidalConfig,
};
use crate::core::error::BasisResult;

/// 정수 경계에서의 부동소수점 반올림 오차 보정값
pub const EPSILON: f64 = 1e-8;

/// `floor(2 * dt * n * bandwidth + EPSILON)`
fn raw_basis_count(n_time_slots: usize, discretization_time: f64, bandwidth: f64) -> f64 {
    (2.0 * discretization_time * n_time_slots as f64 * bandwidth + EPSILON).floor()
}

impl BasisGenerator for SinusoidalConfig {
    fn basis_count(&self) -> BasisResult<usize> {
        ensure_time_slots(self.n_time_slots)?;
        ensure_positive("discretization_time", self.discretization_time)?;
        ensure_positive("bandwidth", self.bandwidth)?;

        let raw = raw_basis_count(self.n_time_slots, self.discretization_time, self.bandwidth);
        let count = ensure_basis_shape(raw, self.n_time_slots)?;
        if count < 1 {
            return Err(invalid_configuration(format!(
                "bandwidth too low or time too short (n_time_slots={}, discretization_time={}, bandwidth={})",
                self.n_time_slots, self.discretization_time, self.bandwidth
            )));
        }
        if count > self.n_time_slots {
            warn!(
                "{} sinusoidal basis rows exceed {} time slots; rows above Nyquist alias",
                count, self.n_time_slots
            );
        }
        Ok(count)
    }

    fn generate(&self) -> BasisResult<BasisSet> {
        let count = self.basis_count()?;
        let n_slots = self.n_time_slots as f64;
        // 행별 에너지가 아닌 전체 기저 수로 균일하게 나눔
        let scale = count as f64;

        let mut basis = Array2::<f64>::zeros((count, self.n_time_slots));
        Zip::indexed(&mut basis).par_for_each(|(i, n), value| {
            *value = (PI * n as f64 * (i + 1) as f64 / n_slots).sin() / scale;
        });

        debug!("sinusoidal basis: {} x {}", count, self.n_time_slots);
        Ok(basis)
    }
}

/// 사인파 기저 생성
///
/// 행 `i`, 샘플 `n`: `sin(pi * n * (i + 1) / n_time_slots) / basis_count`
pub fn sinusoidal_basis(
    n_time_slots: usize,
    discretization_time: f64,
    bandwidth: f64,
) -> BasisResult<BasisSet> {
    SinusoidalConfig {
        n_time_slots,
        discretization_time,
        bandwidth,
    }
    .generate()
}
