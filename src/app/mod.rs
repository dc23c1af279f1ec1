// ==========================================
// 매장 인사이트 - 애플리케이션 계층
// ==========================================

pub mod state;

pub use state::{get_default_db_path, AppState};
