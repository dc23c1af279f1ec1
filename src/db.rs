// ==========================================
// 매장 인사이트 - SQLite 연결 초기화
// ==========================================
// 목표:
// - 모든 Connection::open 의 PRAGMA 동작을 통일
// - busy_timeout 을 통일해 간헐적 busy 오류를 줄인다
// - 스키마 생성을 한곳에 모은다
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 기본 busy_timeout (밀리초)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// SQLite 연결의 공통 PRAGMA 를 설정한다
///
/// foreign_keys 와 busy_timeout 은 연결마다 개별 설정이 필요하다
pub fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// SQLite 연결을 열고 공통 설정을 적용한다
pub fn open_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// 스키마를 생성한다 (존재하면 건너뜀)
///
/// - sale_records: append-only 판매 이벤트
/// - products: 상품 카탈로그 (rowid 순서 = 등록 순서)
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sale_records (
            id TEXT PRIMARY KEY,
            product_name TEXT NOT NULL,
            product_category TEXT NOT NULL,
            quantity INTEGER NOT NULL CHECK (quantity >= 0),
            unit_price REAL NOT NULL CHECK (unit_price >= 0),
            total_amount REAL NOT NULL,
            sold_at TEXT NOT NULL,
            hour_of_day INTEGER NOT NULL CHECK (hour_of_day BETWEEN 0 AND 23),
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_sale_records_sold_at
            ON sale_records (sold_at);

        CREATE TABLE IF NOT EXISTS products (
            name TEXT PRIMARY KEY,
            price REAL NOT NULL CHECK (price >= 0),
            category TEXT NOT NULL,
            stock INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
}
