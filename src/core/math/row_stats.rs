//! 기저 행렬의 행 단위 통계

use ndarray::{Array1, ArrayView2, Axis};
use ndarray_stats::QuantileExt;

use crate::core::error::{BasisError, BasisResult};

/// 행별 최대 절댓값 `max_n |basis[i][n]|`
///
/// NaN이 포함된 행은 순서를 정할 수 없으므로 `Numerical` 에러
pub fn row_peak_magnitudes(basis: ArrayView2<f64>) -> BasisResult<Array1<f64>> {
    let mut peaks = Array1::zeros(basis.nrows());

    for (i, row) in basis.axis_iter(Axis(0)).enumerate() {
        let magnitudes = row.mapv(f64::abs);
        let peak = magnitudes.max().map_err(|e| {
            BasisError::Numerical(format!("row {} has no peak magnitude: {}", i, e))
        })?;
        peaks[i] = *peak;
    }

    Ok(peaks)
}

/// 행별 에너지 (제곱합)
pub fn row_energies(basis: ArrayView2<f64>) -> Array1<f64> {
    basis.map_axis(Axis(1), |row| row.dot(&row))
}
