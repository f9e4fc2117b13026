//! # DPSS 창 단위테스트
//!
//! 정규화, 직교성, 부호 규약, 집중도 검증

use crate::core::window::dpss::*;
use approx::assert_abs_diff_eq;
use ndarray::{s, Axis};

const LEN: usize = 64;
const NW: f64 = 4.0;
const COUNT: usize = 8;

#[test]
fn 테이퍼_형태_테스트() {
    let tapers = DpssWindow::new().tapers(LEN, NW, COUNT).unwrap();
    assert_eq!(tapers.dim(), (COUNT, LEN));
}

#[test]
fn 단위_에너지_및_직교성_테스트() {
    let tapers = DpssWindow::new().tapers(LEN, NW, COUNT).unwrap();

    for i in 0..COUNT {
        for j in 0..COUNT {
            let inner = tapers.row(i).dot(&tapers.row(j));
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(inner, expected, epsilon = 1e-9);
        }
    }
}

#[test]
fn 짝홀_대칭성_테스트() {
    let tapers = DpssWindow::new().tapers(LEN, NW, COUNT).unwrap();

    for (k, row) in tapers.axis_iter(Axis(0)).enumerate() {
        let parity = if k % 2 == 0 { 1.0 } else { -1.0 };
        for n in 0..LEN {
            assert_abs_diff_eq!(row[n], parity * row[LEN - 1 - n], epsilon = 1e-8);
        }
    }
}

#[test]
fn 부호_규약_테스트() {
    let tapers = DpssWindow::new().tapers(LEN, NW, COUNT).unwrap();

    // 0차 테이퍼는 부호 변화가 없고 양수
    assert!(tapers.row(0).iter().all(|&x| x > 0.0));

    let threshold = 1.0 / LEN as f64;
    for k in (1..COUNT).step_by(2) {
        let first_lobe = tapers
            .row(k)
            .iter()
            .copied()
            .find(|x| x * x > threshold)
            .unwrap();
        assert!(first_lobe > 0.0, "홀수 테이퍼 {}의 첫 로브가 음수", k);
    }
    for k in (0..COUNT).step_by(2) {
        assert!(tapers.row(k).sum() > 0.0, "짝수 테이퍼 {}의 합이 음수", k);
    }
}

#[test]
fn 집중도_감소_테스트() {
    let ratios = DpssWindow::new().concentration_ratios(LEN, NW, COUNT).unwrap();

    assert_eq!(ratios.len(), COUNT);
    assert!(ratios[0] > 0.999, "0차 집중도가 너무 낮음: {}", ratios[0]);
    for k in 0..COUNT {
        assert!(ratios[k] > 0.0 && ratios[k] <= 1.0 + 1e-9, "ratio[{}] = {}", k, ratios[k]);
    }
    for k in 1..COUNT {
        assert!(ratios[k] < ratios[k - 1], "집중도가 감소하지 않음: {:?}", ratios);
    }
}

#[test]
fn 주기_창은_확장_대칭창의_앞부분_테스트() {
    let periodic = DpssWindow::new()
        .with_symmetry(TaperSymmetry::Periodic)
        .tapers(LEN, NW, COUNT)
        .unwrap();
    let extended = DpssWindow::new().tapers(LEN + 1, NW, COUNT).unwrap();

    assert_eq!(periodic.dim(), (COUNT, LEN));
    assert_eq!(periodic, extended.slice(s![.., ..LEN]).to_owned());
}

#[test]
fn 근사_정규화_최댓값_테스트() {
    let window = DpssWindow::new().with_norm(TaperNorm::Approximate);

    let even = window.tapers(LEN, NW, 3).unwrap();
    let m_sq = (LEN * LEN) as f64;
    let correction = m_sq / (m_sq + NW);
    for row in even.axis_iter(Axis(0)) {
        let peak = row.iter().fold(0.0f64, |acc, x| acc.max(x.abs()));
        assert_abs_diff_eq!(peak, correction, epsilon = 1e-12);
    }

    let odd = window.tapers(LEN + 1, NW, 3).unwrap();
    for row in odd.axis_iter(Axis(0)) {
        let peak = row.iter().fold(0.0f64, |acc, x| acc.max(x.abs()));
        assert_abs_diff_eq!(peak, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn 길이_1_테스트() {
    let tapers = DpssWindow::new().tapers(1, 0.25, 1).unwrap();
    assert_eq!(tapers.dim(), (1, 1));
    assert_eq!(tapers[[0, 0]], 1.0);
}

#[test]
fn 잘못된_파라미터_거부_테스트() {
    let window = DpssWindow::new();

    assert!(window.tapers(0, 1.0, 1).unwrap_err().is_invalid_configuration());
    assert!(window.tapers(LEN, 0.0, 1).unwrap_err().is_invalid_configuration());
    assert!(window.tapers(LEN, f64::NAN, 1).unwrap_err().is_invalid_configuration());
    // NW는 len/2 미만이어야 함
    assert!(window.tapers(LEN, 32.0, 1).unwrap_err().is_invalid_configuration());
    assert!(window.tapers(LEN, NW, 0).unwrap_err().is_invalid_configuration());
    assert!(window.tapers(LEN, NW, LEN + 1).unwrap_err().is_invalid_configuration());
}

#[test]
fn 반복_호출_동일성_테스트() {
    let window = DpssWindow::new();
    let first = window.tapers(LEN, NW, COUNT).unwrap();
    let second = window.tapers(LEN, NW, COUNT).unwrap();
    assert_eq!(first, second);
}

#[test]
fn 알려진_dpss_값_테스트() {
    // 길이 8, NW = 1.5 테이퍼 3개의 첫 샘플
    let tapers = DpssWindow::new().tapers(8, 1.5, 3).unwrap();
    let expected_first = [0.0898, 0.2831, 0.5111];

    for (k, expected) in expected_first.iter().enumerate() {
        assert_abs_diff_eq!(tapers[[k, 0]], *expected, epsilon = 2e-4);
    }
}
