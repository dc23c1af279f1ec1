// ==========================================
// SalesRecordRepository - 판매 기록 저장소
// ==========================================
// 책임: sale_records 테이블 접근 (업무 로직 없음)
// 원칙: 판매 기록은 append-only — 수정/삭제 API 를 제공하지 않는다
// 원칙: 모든 쿼리는 파라미터 바인딩을 사용한다
// ==========================================

use crate::db::open_connection;
use crate::domain::sales::SaleRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// sold_at 저장 포맷
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 판매 기록 저장소
pub struct SalesRecordRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SalesRecordRepository {
    /// 데이터베이스 경로로 새 저장소를 생성한다
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 이미 열린 연결로 저장소를 생성한다
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // 쓰기 (append-only)
    // ==========================================

    /// 판매 기록 1건을 추가한다
    pub fn insert(&self, record: &SaleRecord) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO sale_records (
                id, product_name, product_category, quantity,
                unit_price, total_amount, sold_at, hour_of_day, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                record.id.to_string(),
                record.product_name,
                record.product_category,
                record.quantity,
                record.unit_price,
                record.total_amount,
                record.sold_at.format(DATETIME_FORMAT).to_string(),
                record.hour_of_day,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// 판매 기록을 일괄 추가한다 (트랜잭션)
    ///
    /// # 반환
    /// - Ok(usize): 추가된 건수
    pub fn insert_batch(&self, records: &[SaleRecord]) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        let mut count = 0;
        for record in records {
            tx.execute(
                r#"
                INSERT INTO sale_records (
                    id, product_name, product_category, quantity,
                    unit_price, total_amount, sold_at, hour_of_day, created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                "#,
                params![
                    record.id.to_string(),
                    record.product_name,
                    record.product_category,
                    record.quantity,
                    record.unit_price,
                    record.total_amount,
                    record.sold_at.format(DATETIME_FORMAT).to_string(),
                    record.hour_of_day,
                    Utc::now().to_rfc3339(),
                ],
            )?;
            count += 1;
        }

        tx.commit()?;
        Ok(count)
    }

    // ==========================================
    // 읽기
    // ==========================================

    /// 전체 판매 기록 (판매 시각 → id 순)
    ///
    /// 이 순서가 엔진이 받는 입력 순서다
    pub fn list_all(&self) -> RepositoryResult<Vec<SaleRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, product_name, product_category, quantity,
                   unit_price, total_amount, sold_at, hour_of_day
            FROM sale_records
            ORDER BY sold_at, id
            "#,
        )?;

        let records = stmt
            .query_map([], map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    /// 특정 월("yyyy-MM")의 판매 기록
    pub fn list_by_month(&self, month_key: &str) -> RepositoryResult<Vec<SaleRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, product_name, product_category, quantity,
                   unit_price, total_amount, sold_at, hour_of_day
            FROM sale_records
            WHERE substr(sold_at, 1, 7) = ?1
            ORDER BY sold_at, id
            "#,
        )?;

        let records = stmt
            .query_map(params![month_key], map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    /// 전체 기록 건수
    pub fn count(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM sale_records", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// 행 → SaleRecord 매핑
fn map_row(row: &Row<'_>) -> rusqlite::Result<SaleRecord> {
    Ok(SaleRecord {
        id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_else(|_| Uuid::nil()),
        product_name: row.get(1)?,
        product_category: row.get(2)?,
        quantity: row.get(3)?,
        unit_price: row.get(4)?,
        total_amount: row.get(5)?,
        sold_at: NaiveDateTime::parse_from_str(&row.get::<_, String>(6)?, DATETIME_FORMAT)
            .unwrap_or_else(|_| {
                NaiveDate::from_ymd_opt(1970, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
            }),
        hour_of_day: row.get(7)?,
    })
}
