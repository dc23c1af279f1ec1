// ==========================================
// 매장 인사이트 - 도메인 타입 정의
// ==========================================
// 시간대/계절/추천 유형 열거형
// 원칙: 시간대 판정은 hour_of_day 의 전함수(total function)
// ==========================================

use crate::i18n::t;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 시간대 (Time Slot)
// ==========================================
// 경계: 모닝 [07,11) / 런치 [11,14) / 애프터눈 [14,17) / 이브닝 [17,21)
// 그 외 시간은 Other 로 분류되며 시간대 분석에서 제외된다
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeSlot {
    Morning,   // 모닝
    Lunch,     // 런치
    Afternoon, // 애프터눈
    Evening,   // 이브닝
    Other,     // 기타 (분석 제외)
}

impl TimeSlot {
    /// 시각(0~23)으로부터 시간대를 판정한다
    ///
    /// 24 이상의 값은 Other 로 흡수된다 (전함수 보장)
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            7..=10 => TimeSlot::Morning,
            11..=13 => TimeSlot::Lunch,
            14..=16 => TimeSlot::Afternoon,
            17..=20 => TimeSlot::Evening,
            _ => TimeSlot::Other,
        }
    }

    /// 분석 대상 시간대 (Other 제외), 고정 순서
    ///
    /// 정렬 동점 시 이 순서가 결정적 타이브레이크가 된다
    pub fn all_active() -> [TimeSlot; 4] {
        [
            TimeSlot::Morning,
            TimeSlot::Lunch,
            TimeSlot::Afternoon,
            TimeSlot::Evening,
        ]
    }

    /// 화면 표시용 이름 (i18n)
    pub fn display_name(&self) -> String {
        match self {
            TimeSlot::Morning => t("time_slot.morning"),
            TimeSlot::Lunch => t("time_slot.lunch"),
            TimeSlot::Afternoon => t("time_slot.afternoon"),
            TimeSlot::Evening => t("time_slot.evening"),
            TimeSlot::Other => t("time_slot.other"),
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSlot::Morning => write!(f, "MORNING"),
            TimeSlot::Lunch => write!(f, "LUNCH"),
            TimeSlot::Afternoon => write!(f, "AFTERNOON"),
            TimeSlot::Evening => write!(f, "EVENING"),
            TimeSlot::Other => write!(f, "OTHER"),
        }
    }
}

// ==========================================
// 계절 (Season)
// ==========================================
// 월 → 계절 매핑: 봄 3~5 / 여름 6~8 / 가을 9~11 / 겨울 12,1,2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    Spring, // 봄
    Summer, // 여름
    Autumn, // 가을
    Winter, // 겨울
}

impl Season {
    /// 월(1~12)로부터 계절을 판정한다
    ///
    /// 범위 밖의 값은 겨울로 흡수된다
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    /// 계절별 상품명 키워드 (상품명 부분 일치로 계절 메뉴를 찾는다)
    pub fn product_keywords(&self) -> &'static [&'static str] {
        match self {
            Season::Spring => &["딸기", "레몬"],
            Season::Summer => &["에이드", "아이스"],
            Season::Autumn => &["라떼", "핫"],
            Season::Winter => &["핫", "따뜻한"],
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Spring => write!(f, "SPRING"),
            Season::Summer => write!(f, "SUMMER"),
            Season::Autumn => write!(f, "AUTUMN"),
            Season::Winter => write!(f, "WINTER"),
        }
    }
}

// ==========================================
// 추천 유형 (Recommendation Kind)
// ==========================================
// 추천을 생성한 휴리스틱 규칙의 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationKind {
    Trending,  // 인기 상승
    TimeSlot,  // 시간대 인기
    Inventory, // 재고 보충
    Margin,    // 고마진
    Seasonal,  // 계절 메뉴
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationKind::Trending => write!(f, "TRENDING"),
            RecommendationKind::TimeSlot => write!(f, "TIME_SLOT"),
            RecommendationKind::Inventory => write!(f, "INVENTORY"),
            RecommendationKind::Margin => write!(f, "MARGIN"),
            RecommendationKind::Seasonal => write!(f, "SEASONAL"),
        }
    }
}
