// ==========================================
// 로그 시스템 초기화
// ==========================================
// tracing / tracing-subscriber 사용
// 환경 변수로 로그 레벨을 제어한다
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 로그 시스템을 초기화한다
///
/// # 환경 변수
/// - RUST_LOG: 로그 레벨 필터 (기본: info)
///   예: RUST_LOG=debug 또는 RUST_LOG=store_insight=trace
///
/// # 예시
/// ```no_run
/// use store_insight::logging;
/// logging::init();
/// ```
pub fn init() {
    // 환경 변수에서 로그 레벨을 읽고, 없으면 info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// 테스트 환경용 로그 초기화
///
/// 디버깅을 위해 더 상세한 레벨을 쓴다
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
