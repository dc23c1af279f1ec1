// ==========================================
// ProductRepository - 상품 카탈로그 저장소
// ==========================================
// 책임: products 테이블 접근 (업무 로직 없음)
// 제약: list_all 은 등록 순서(rowid)를 유지한다
//       — 추천 엔진의 "앞의 N개" 상한이 이 순서를 따른다
// ==========================================

use crate::db::open_connection;
use crate::domain::product::Product;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex, MutexGuard};

/// 상품 카탈로그 저장소
pub struct ProductRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ProductRepository {
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

    /// 상품을 등록하거나 갱신한다 (upsert)
    ///
    /// ON CONFLICT DO UPDATE 를 사용해 rowid(등록 순서)를 보존한다
    pub fn upsert(&self, product: &Product) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let now = Utc::now().to_rfc3339();
        conn.execute(
            r#"
            INSERT INTO products (name, price, category, stock, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            ON CONFLICT(name) DO UPDATE SET
                price = excluded.price,
                category = excluded.category,
                stock = excluded.stock,
                updated_at = excluded.updated_at
            "#,
            params![product.name, product.price, product.category, product.stock, now],
        )?;
        Ok(())
    }

    /// 여러 상품을 일괄 upsert 한다 (트랜잭션)
    pub fn upsert_batch(&self, products: &[Product]) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;
        let now = Utc::now().to_rfc3339();

        let mut count = 0;
        for product in products {
            tx.execute(
                r#"
                INSERT INTO products (name, price, category, stock, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?5)
                ON CONFLICT(name) DO UPDATE SET
                    price = excluded.price,
                    category = excluded.category,
                    stock = excluded.stock,
                    updated_at = excluded.updated_at
                "#,
                params![product.name, product.price, product.category, product.stock, now],
            )?;
            count += 1;
        }

        tx.commit()?;
        Ok(count)
    }

    /// 전체 카탈로그 (등록 순서 유지)
    pub fn list_all(&self) -> RepositoryResult<Vec<Product>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT name, price, category, stock FROM products ORDER BY rowid",
        )?;
        let products = stmt
            .query_map([], map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(products)
    }

    /// 상품명으로 조회한다
    pub fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Product>> {
        let conn = self.get_conn()?;
        let product = conn
            .query_row(
                "SELECT name, price, category, stock FROM products WHERE name = ?1",
                params![name],
                map_row,
            )
            .optional()?;
        Ok(product)
    }

    /// 재고 수량을 갱신한다
    pub fn update_stock(&self, name: &str, stock: i64) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let updated = conn.execute(
            "UPDATE products SET stock = ?2, updated_at = ?3 WHERE name = ?1",
            params![name, stock, Utc::now().to_rfc3339()],
        )?;
        if updated == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Product".to_string(),
                id: name.to_string(),
            });
        }
        Ok(())
    }
}

/// 행 → Product 매핑
fn map_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        name: row.get(0)?,
        price: row.get(1)?,
        category: row.get(2)?,
        stock: row.get(3)?,
    })
}
