//! 기저 생성기 에러 타입

use thiserror::Error;

/// 기저 생성 중 발생할 수 있는 에러
#[derive(Debug, Error)]
pub enum BasisError {
    /// 파라미터 조합으로 유효한 기저를 만들 수 없음 (기저 수 < 1, 음수/0 입력 등)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// 고유값 분해 실패 또는 NaN 발생
    #[error("Numerical failure: {0}")]
    Numerical(String),

    /// JSON 설정 파싱 실패
    #[error("Failed to parse basis configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl BasisError {
    /// 설정 에러 여부
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, BasisError::InvalidConfiguration(_))
    }
}

/// 기저 생성 결과 타입
pub type BasisResult<T> = Result<T, BasisError>;
