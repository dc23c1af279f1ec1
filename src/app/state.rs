// ==========================================
// 매장 인사이트 - 애플리케이션 상태
// ==========================================
// 책임: 공유 연결 위에 Repository / Engine / API 를 구성
// 수명: 앱 시작 시 생성, 종료 시 함께 해제 (전역 싱글턴 없음)
// ==========================================

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::api::{RecommendationApi, SalesApi};
use crate::db;
use crate::repository::{ProductRepository, SalesRecordRepository};

/// 애플리케이션 상태
///
/// 모든 API 인스턴스와 공유 자원을 담는다
pub struct AppState {
    /// 데이터베이스 경로
    pub db_path: String,

    /// 상품 카탈로그 저장소 (카탈로그 협력자)
    pub product_repo: Arc<ProductRepository>,

    /// 판매 기록 API
    pub sales_api: Arc<SalesApi>,

    /// 추천 API
    pub recommendation_api: Arc<RecommendationApi>,
}

impl AppState {
    /// 데이터베이스를 열고 전체 계층을 구성한다
    pub fn new(db_path: String) -> anyhow::Result<Self> {
        let conn = db::open_connection(&db_path)?;
        db::init_schema(&conn)?;
        let conn = Arc::new(Mutex::new(conn));

        let record_repo = Arc::new(SalesRecordRepository::from_connection(conn.clone()));
        let product_repo = Arc::new(ProductRepository::from_connection(conn));

        let sales_api = Arc::new(SalesApi::new(record_repo.clone()));
        let recommendation_api = Arc::new(RecommendationApi::new(
            record_repo,
            product_repo.clone(),
        ));

        Ok(Self {
            db_path,
            product_repo,
            sales_api,
            recommendation_api,
        })
    }
}

/// 기본 데이터베이스 경로를 반환한다
///
/// 우선순위: 환경 변수 STORE_INSIGHT_DB_PATH → 사용자 데이터 디렉터리 → 현재 디렉터리
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var("STORE_INSIGHT_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./store_insight.db");

    if let Some(data_dir) = dirs::data_dir() {
        // 개발 환경은 별도 디렉터리를 써서 운영 데이터를 오염시키지 않는다
        #[cfg(debug_assertions)]
        let base = data_dir.join("store-insight-dev");

        #[cfg(not(debug_assertions))]
        let base = data_dir.join("store-insight");

        if std::fs::create_dir_all(&base).is_ok() {
            path = base.join("store_insight.db");
        }
    }

    path.to_string_lossy().to_string()
}
