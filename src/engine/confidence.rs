// ==========================================
// 매장 인사이트 - 신뢰도 산정
// ==========================================
// 책임: 기록 수 → 신뢰도 스칼라 [0,1]
// 원칙: 순수 함수, 기록 수에 대해 단조 비감소
// ==========================================

/// 기록 수 기반 신뢰도 점수
///
/// 구간표: [0,10) → 0.3 / [10,30) → 0.5 / [30,50) → 0.7
///         [50,100) → 0.85 / [100,∞) → 0.95
pub fn confidence_score(record_count: usize) -> f64 {
    match record_count {
        0..=9 => 0.3,
        10..=29 => 0.5,
        30..=49 => 0.7,
        50..=99 => 0.85,
        _ => 0.95,
    }
}
