//! # 기저 생성기 구성 설정
//!
//! 생성기별 스칼라 파라미터와 JSON 기반 통합 설정

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::error::{BasisError, BasisResult};
use crate::core::generator::{BasisGenerator, BasisSet};


/// 사인파 기저 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinusoidalConfig {
    /// 시간 슬롯 수
    pub n_time_slots: usize,
    /// 슬롯당 시간 (초)
    pub discretization_time: f64,
    /// 전체 대역폭 (Hz)
    pub bandwidth: f64,
}

impl Default for SinusoidalConfig {
    fn default() -> Self {
        Self {
            n_time_slots: 100,
            discretization_time: 0.01,
            bandwidth: 5.0,
        }
    }
}

/// Slepian 기저에서 유효하지 않은 행의 처리 방식
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlepianPruning {
    /// 첫 번째 무효 행부터 잘라냄
    #[default]
    Truncate,
    /// 무효 판정과 무관하게 모든 테이퍼 반환
    KeepAll,
}

/// Slepian (DPSS) 기저 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlepianConfig {
    pub n_time_slots: usize,
    pub discretization_time: f64,
    /// 전체 대역폭 (Hz)
    pub bandwidth: f64,
    /// 경계 불연속 허용치 (행 번호에 비례해 증가)
    pub min_digitization: f64,
    pub pruning: SlepianPruning,
}

impl Default for SlepianConfig {
    fn default() -> Self {
        Self {
            n_time_slots: 100,
            discretization_time: 0.01,
            bandwidth: 5.0,
            min_digitization: 0.01,
            pruning: SlepianPruning::Truncate,
        }
    }
}

/// 가우시안 펄스 트레인 기저 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussianTrainConfig {
    pub n_time_slots: usize,
    pub discretization_time: f64,
    /// 펄스 표준편차 (초)
    pub standard_deviation: f64,
    /// 펄스 중심 간격 (초)
    pub delay: f64,
}

impl Default for GaussianTrainConfig {
    fn default() -> Self {
        Self {
            n_time_slots: 1000,
            discretization_time: 0.01,
            standard_deviation: 0.5,
            delay: 2.0,
        }
    }
}

/// 통합 기저 설정
///
/// ```json
/// { "kind": "gaussian_train", "n_time_slots": 1000, "discretization_time": 0.01,
///   "standard_deviation": 0.5, "delay": 2.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BasisConfig {
    Sinusoidal(SinusoidalConfig),
    Slepian(SlepianConfig),
    GaussianTrain(GaussianTrainConfig),
}

impl BasisConfig {
    /// JSON 문자열에서 설정 로드
    pub fn from_json(json: &str) -> BasisResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn n_time_slots(&self) -> usize {
        match self {
            BasisConfig::Sinusoidal(c) => c.n_time_slots,
            BasisConfig::Slepian(c) => c.n_time_slots,
            BasisConfig::GaussianTrain(c) => c.n_time_slots,
        }
    }

    /// 설정된 생성기로 기저 계산
    pub fn generate(&self) -> BasisResult<BasisSet> {
        match self {
            BasisConfig::Sinusoidal(c) => c.generate(),
            BasisConfig::Slepian(c) => c.generate(),
            BasisConfig::GaussianTrain(c) => c.generate(),
        }
    }
}

impl From<SinusoidalConfig> for BasisConfig {
    fn from(config: SinusoidalConfig) -> Self {
        BasisConfig::Sinusoidal(config)
    }
}

impl From<SlepianConfig> for BasisConfig {
    fn from(config: SlepianConfig) -> Self {
        BasisConfig::Slepian(config)
    }
}

impl From<GaussianTrainConfig> for BasisConfig {
    fn from(config: GaussianTrainConfig) -> Self {
        BasisConfig::GaussianTrain(config)
    }
}

/// 진단 메시지를 남기고 설정 에러 생성
pub(crate) fn invalid_configuration(reason: String) -> BasisError {
    warn!("No valid basis: {}", reason);
    BasisError::InvalidConfiguration(reason)
}

pub(crate) fn ensure_time_slots(n_time_slots: usize) -> BasisResult<()> {
    if n_time_slots == 0 {
        return Err(invalid_configuration(
            "n_time_slots must be at least 1, got 0".to_string(),
        ));
    }
    Ok(())
}

/// 내림한 기저 수를 `usize`로 변환하고 행렬 원소 수가 `isize::MAX` 이하인지 확인
///
/// `as usize` 캐스트는 포화되므로 변환 전에 범위를 검사한다.
pub(crate) fn ensure_basis_shape(floored_count: f64, n_time_slots: usize) -> BasisResult<usize> {
    let limit = isize::MAX as usize;
    let too_large = || {
        invalid_configuration(format!(
            "basis too large: {} rows x {} time slots exceeds {} elements",
            floored_count, n_time_slots, limit
        ))
    };

    if !floored_count.is_finite() || floored_count >= limit as f64 {
        return Err(too_large());
    }
    let count = floored_count.max(0.0) as usize;
    match count.checked_mul(n_time_slots) {
        Some(elements) if elements <= limit => Ok(count),
        _ => Err(too_large()),
    }
}

/// 유한한 양수 확인
pub(crate) fn ensure_positive(name: &str, value: f64) -> BasisResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid_configuration(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )));
    }
    Ok(())
}
