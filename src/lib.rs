// ==========================================
// 매장 인사이트 - 핵심 라이브러리
// ==========================================
// 기술 스택: Rust + SQLite
// 시스템 정의: 매장 판매 데이터 분석 및 추천 엔진
// 엔진 원칙: 순수 함수, 동기 실행, 상태 없음
// ==========================================

// 국제화 시스템 초기화 (기본 언어: 한국어)
rust_i18n::i18n!("locales", fallback = "ko");

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 계층 - 엔티티와 타입
pub mod domain;

// 데이터 저장 계층 - 데이터 접근
pub mod repository;

// 엔진 계층 - 분석/추천 규칙
pub mod engine;

// 가져오기 계층 - 외부 데이터 (CSV)
pub mod importer;

// 데이터베이스 기반 설비 (연결 초기화 / PRAGMA / 스키마)
pub mod db;

// 로그 시스템
pub mod logging;

// 국제화
pub mod i18n;

// API 계층 - 업무 인터페이스
pub mod api;

// 애플리케이션 계층 - 상태 구성
pub mod app;

// ==========================================
// 핵심 타입 재노출
// ==========================================

// 도메인 타입
pub use domain::types::{RecommendationKind, Season, TimeSlot};

// 도메인 엔티티
pub use domain::{
    CategorySalesSummary, MonthlySummary, Product, ProductSalesSummary, Recommendation,
    RecommendationBundle, SaleRecord, TimeSlotSummary,
};

// 엔진
pub use engine::{confidence_score, RecommendationEngine, SalesAggregator};

// API
pub use api::{RecommendationApi, SalesApi};

// ==========================================
// 상수 정의
// ==========================================

// 시스템 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 시스템 이름
pub const APP_NAME: &str = "매장 인사이트";
