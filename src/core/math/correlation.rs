//! FFT 기반 자기상관

use rustfft::{num_complex::Complex, FftPlanner};

/// 플래너를 재사용하는 자기상관 계산기
pub struct Autocorrelator {
    /// FFT 플래너 재사용
    planner: FftPlanner<f64>,
}

impl Autocorrelator {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// 지연 `0..len`에 대한 `r[k] = sum_n x[n] * x[n + k]`
    ///
    /// 선형 자기상관이 되도록 `2 * len - 1` 이상으로 제로 패딩
    pub fn compute(&mut self, signal: &[f64]) -> Vec<f64> {
        let len = signal.len();
        if len == 0 {
            return Vec::new();
        }

        let fft_len = (2 * len - 1).next_power_of_two();
        let forward = self.planner.plan_fft_forward(fft_len);
        let inverse = self.planner.plan_fft_inverse(fft_len);

        let mut buffer: Vec<Complex<f64>> = signal
            .iter()
            .map(|&x| Complex::new(x, 0.0))
            .chain(std::iter::repeat(Complex::new(0.0, 0.0)))
            .take(fft_len)
            .collect();

        forward.process(&mut buffer);
        for value in buffer.iter_mut() {
            *value = Complex::new(value.norm_sqr(), 0.0);
        }
        inverse.process(&mut buffer);

        // rustfft는 역변환을 정규화하지 않음
        let scale = 1.0 / fft_len as f64;
        buffer.iter().take(len).map(|c| c.re * scale).collect()
    }
}

impl Default for Autocorrelator {
    fn default() -> Self {
        Self::new()
    }
}

/// 단발성 자기상관
pub fn autocorrelation(signal: &[f64]) -> Vec<f64> {
    Autocorrelator::new().compute(signal)
}
