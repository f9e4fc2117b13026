//! # 기저 생성기 테스트
//!
//! 생성기별 기저 수 공식, 행 값, 에러 경로 검증


/// 테스트용 로거 (RUST_LOG로 진단 메시지 확인)
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
