//! Slepian (DPSS) 기저
//!
//! 시간-대역폭 곱 `NW`에 대해 `floor(2 * NW)`개의 DPSS를 요청하고,
//! 시작 경계에서 디지털화 허용치를 넘는 첫 행부터 무효로 본다.

use log::debug;
use ndarray::{s, ArrayView1, ArrayView2};

use super::{BasisGenerator, BasisSet};
use crate::core::config::{
    ensure_positive, ensure_time_slots, invalid_configuration, SlepianConfig, SlepianPruning,
};
use crate::core::error::{BasisError, BasisResult};
use crate::core::math::row_peak_magnitudes;
use crate::core::window::{DpssWindow, TaperWindow};

/// 대역 집중도가 좋은 DPSS 수 = `NW`당 2개
pub const EIGENBASIS_PER_NW: f64 = 2.0;

/// 창 제공자를 주입할 수 있는 Slepian 생성기
#[derive(Debug, Clone)]
pub struct SlepianBasisGenerator<W: TaperWindow = DpssWindow> {
    config: SlepianConfig,
    window: W,
}

impl SlepianBasisGenerator<DpssWindow> {
    pub fn new(config: SlepianConfig) -> Self {
        Self::with_window(config, DpssWindow::new())
    }
}

impl<W: TaperWindow> SlepianBasisGenerator<W> {
    pub fn with_window(config: SlepianConfig, window: W) -> Self {
        Self { config, window }
    }

    pub fn config(&self) -> &SlepianConfig {
        &self.config
    }

    /// `NW = bandwidth * discretization_time * n_time_slots`
    pub fn time_bandwidth_product(&self) -> f64 {
        self.config.bandwidth * self.config.discretization_time * self.config.n_time_slots as f64
    }
}

impl<W: TaperWindow> BasisGenerator for SlepianBasisGenerator<W> {
    /// 요청할 DPSS 수 (가지치기 이전)
    fn basis_count(&self) -> BasisResult<usize> {
        let c = &self.config;
        ensure_time_slots(c.n_time_slots)?;
        ensure_positive("discretization_time", c.discretization_time)?;
        ensure_positive("bandwidth", c.bandwidth)?;
        ensure_positive("min_digitization", c.min_digitization)?;

        let nw = self.time_bandwidth_product();
        let n_eigenbasis = (nw * EIGENBASIS_PER_NW).floor() as usize;
        if n_eigenbasis < 1 {
            return Err(invalid_configuration(format!(
                "bandwidth too low or time too short (NW={}, n_time_slots={}, discretization_time={}, bandwidth={})",
                nw, c.n_time_slots, c.discretization_time, c.bandwidth
            )));
        }
        Ok(n_eigenbasis)
    }

    fn generate(&self) -> BasisResult<BasisSet> {
        let n_eigenbasis = self.basis_count()?;
        let n_time_slots = self.config.n_time_slots;
        let nw = self.time_bandwidth_product();

        let slepian = self.window.tapers(n_time_slots, nw, n_eigenbasis)?;
        if slepian.dim() != (n_eigenbasis, n_time_slots) {
            return Err(BasisError::Numerical(format!(
                "window returned {:?} tapers, expected {:?}",
                slepian.dim(),
                (n_eigenbasis, n_time_slots)
            )));
        }

        let basis_max = row_peak_magnitudes(slepian.view())?;
        let n_valid = count_valid_rows(slepian.view(), basis_max.view(), self.config.min_digitization);
        if n_valid < 1 {
            return Err(invalid_configuration(format!(
                "bandwidth too low or time too short: no Slepian row passes min_digitization={} (NW={})",
                self.config.min_digitization, nw
            )));
        }
        debug!(
            "slepian basis: NW={}, {} of {} rows valid, pruning={:?}",
            nw, n_valid, n_eigenbasis, self.config.pruning
        );

        match self.config.pruning {
            SlepianPruning::Truncate if n_valid < n_eigenbasis => {
                Ok(slepian.slice(s![..n_valid, ..]).to_owned())
            }
            _ => Ok(slepian),
        }
    }
}

impl BasisGenerator for SlepianConfig {
    fn basis_count(&self) -> BasisResult<usize> {
        SlepianBasisGenerator::new(self.clone()).basis_count()
    }

    fn generate(&self) -> BasisResult<BasisSet> {
        SlepianBasisGenerator::new(self.clone()).generate()
    }
}

/// 경계 불연속 판정으로 유효한 앞쪽 행 수 계산
///
/// 행 `i`는 `(basis[i][0] - (basis[last][1] - basis[last][0])) / basis_max[i]`가
/// `min_digitization * (i + 1)`을 넘으면 무효이며, 첫 무효 행의 인덱스를 반환한다.
/// 샘플이 하나뿐이면 마지막 행의 기울기 항은 0.
pub fn count_valid_rows(
    basis: ArrayView2<f64>,
    basis_max: ArrayView1<f64>,
    min_digitization: f64,
) -> usize {
    let n_rows = basis.nrows();
    if n_rows == 0 || basis.ncols() == 0 {
        return 0;
    }

    let last = basis.row(n_rows - 1);
    let edge_slope = if basis.ncols() > 1 { last[1] - last[0] } else { 0.0 };

    (0..n_rows)
        .find(|&i| (basis[[i, 0]] - edge_slope) / basis_max[i] > min_digitization * (i + 1) as f64)
        .unwrap_or(n_rows)
}

/// 기본 DPSS 창과 `Truncate` 가지치기로 Slepian 기저 생성
pub fn slepian_basis(
    n_time_slots: usize,
    discretization_time: f64,
    bandwidth: f64,
    min_digitization: f64,
) -> BasisResult<BasisSet> {
    SlepianConfig {
        n_time_slots,
        discretization_time,
        bandwidth,
        min_digitization,
        pruning: SlepianPruning::default(),
    }
    .generate()
}
