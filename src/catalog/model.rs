use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 상품 카테고리
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Textbooks,
    Notes,
    #[serde(rename = "Study Guides")]
    StudyGuides,
    #[serde(rename = "Lab Materials")]
    LabMaterials,
    #[serde(rename = "Research Papers")]
    ResearchPapers,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Textbooks,
        Category::Notes,
        Category::StudyGuides,
        Category::LabMaterials,
        Category::ResearchPapers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Textbooks => "Textbooks",
            Category::Notes => "Notes",
            Category::StudyGuides => "Study Guides",
            Category::LabMaterials => "Lab Materials",
            Category::ResearchPapers => "Research Papers",
        }
    }

    /// 표시 이름으로 조회 (대소문자 무시)
    pub fn from_label(text: &str) -> Option<Category> {
        let text = text.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(text))
    }
}

// 상품 상태
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Acceptable,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::VeryGood,
        Condition::Good,
        Condition::Acceptable,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::VeryGood => "Very Good",
            Condition::Good => "Good",
            Condition::Acceptable => "Acceptable",
        }
    }

    pub fn from_label(text: &str) -> Option<Condition> {
        let text = text.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(text))
    }
}

/// 상품(리스팅) 모델
/// `seller`, `reviews`, `image`, `wishlisted`, `listed_at` 은 화면 표시용이며 필터에서는 사용하지 않는다.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub category: Category,
    pub price: f64,
    pub condition: Condition,
    pub tags: Vec<String>,
    pub rating: f64,
    pub reviews: u32,
    pub seller: String,
    pub image: String,
    /// 찜 표시 (없으면 false)
    #[serde(default)]
    pub wishlisted: bool,
    pub listed_at: DateTime<Utc>,
}
