// ==========================================
// 매장 인사이트 - 상품 카탈로그 엔티티
// ==========================================
// 카탈로그는 외부 협력자(상품 관리)가 공급하며
// 엔진은 읽기 전용 스냅샷으로만 소비한다
// ==========================================

use serde::{Deserialize, Serialize};

/// 카탈로그 상품
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: i64,
}

impl Product {
    pub fn new(name: String, price: f64, category: String, stock: i64) -> Self {
        Self {
            name,
            price,
            category,
            stock,
        }
    }
}
