/// 시드 데이터
/// 1. 내장 시드 (최신 등록순)
/// 2. JSON 시드 파일 로드 및 검증
// region:    --- Imports
use super::model::{Category, Condition, Listing};
use crate::error::AppError;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

// endregion: --- Imports

// region:    --- Builtin Seed

fn listed(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap_or_default()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

/// 내장 시드 리스팅 (최신 등록순)
pub fn builtin_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            title: "Calculus: Early Transcendentals".to_string(),
            category: Category::Textbooks,
            price: 85.0,
            condition: Condition::LikeNew,
            tags: tags(&["Mathematics", "Engineering", "Science"]),
            rating: 4.5,
            reviews: 12,
            seller: "Sarah Wilson".to_string(),
            image: "/textbook-1.jpg".to_string(),
            wishlisted: false,
            listed_at: listed(1_718_236_800),
        },
        Listing {
            id: 2,
            title: "Physics Lab Manual".to_string(),
            category: Category::LabMaterials,
            price: 45.0,
            condition: Condition::Good,
            tags: tags(&["Physics", "Laboratory", "Science"]),
            rating: 4.0,
            reviews: 8,
            seller: "John Smith".to_string(),
            image: "/lab-manual.jpg".to_string(),
            wishlisted: true,
            listed_at: listed(1_718_150_400),
        },
        Listing {
            id: 3,
            title: "Organic Chemistry Lecture Notes".to_string(),
            category: Category::Notes,
            price: 15.0,
            condition: Condition::New,
            tags: tags(&["Chemistry", "Science"]),
            rating: 4.8,
            reviews: 21,
            seller: "Priya Patel".to_string(),
            image: "/notes-1.jpg".to_string(),
            wishlisted: false,
            listed_at: listed(1_718_064_000),
        },
        Listing {
            id: 4,
            title: "Microeconomics Final Exam Study Guide".to_string(),
            category: Category::StudyGuides,
            price: 20.0,
            condition: Condition::VeryGood,
            tags: tags(&["Economics", "Exam Prep"]),
            rating: 4.2,
            reviews: 5,
            seller: "Daniel Kim".to_string(),
            image: "/study-guide-1.jpg".to_string(),
            wishlisted: false,
            listed_at: listed(1_717_977_600),
        },
        Listing {
            id: 5,
            title: "Introduction to Algorithms".to_string(),
            category: Category::Textbooks,
            price: 120.0,
            condition: Condition::Good,
            tags: tags(&["Computer Science", "Algorithms", "Engineering"]),
            rating: 4.8,
            reviews: 17,
            seller: "Alex Chen".to_string(),
            image: "/textbook-2.jpg".to_string(),
            wishlisted: false,
            listed_at: listed(1_717_891_200),
        },
        Listing {
            id: 6,
            title: "Protein Folding Survey".to_string(),
            category: Category::ResearchPapers,
            price: 10.0,
            condition: Condition::New,
            tags: tags(&["Biology", "Biochemistry"]),
            rating: 3.9,
            reviews: 3,
            seller: "Maria Garcia".to_string(),
            image: "/paper-1.jpg".to_string(),
            wishlisted: false,
            listed_at: listed(1_717_804_800),
        },
        Listing {
            id: 7,
            title: "Dissection Kit".to_string(),
            category: Category::LabMaterials,
            price: 30.0,
            condition: Condition::Acceptable,
            tags: tags(&["Biology", "Laboratory"]),
            rating: 3.5,
            reviews: 4,
            seller: "Tom Brooks".to_string(),
            image: "/lab-kit.jpg".to_string(),
            wishlisted: false,
            listed_at: listed(1_717_718_400),
        },
        Listing {
            id: 8,
            title: "University Physics".to_string(),
            category: Category::Textbooks,
            price: 35.0,
            condition: Condition::VeryGood,
            tags: tags(&["Physics", "Science"]),
            rating: 4.0,
            reviews: 9,
            seller: "Emily Davis".to_string(),
            image: "/textbook-3.jpg".to_string(),
            wishlisted: false,
            listed_at: listed(1_717_632_000),
        },
    ]
}

// endregion: --- Builtin Seed

// region:    --- Seed File

/// JSON 시드 파일 로드
pub async fn load_seed_file(path: &Path) -> Result<Vec<Listing>, AppError> {
    info!("{:<12} --> 시드 파일 로드: {}", "Seed", path.display());
    let raw = tokio::fs::read_to_string(path).await?;
    parse_seed(&raw)
}

/// JSON 시드 파싱 및 검증
pub fn parse_seed(raw: &str) -> Result<Vec<Listing>, AppError> {
    let listings: Vec<Listing> = serde_json::from_str(raw)?;
    validate(&listings)?;
    Ok(listings)
}

/// 시드 검증: id 중복, 가격, 평점 범위
pub fn validate(listings: &[Listing]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(listings.len());
    for listing in listings {
        if !seen.insert(listing.id) {
            return Err(AppError::InvalidListing {
                id: listing.id,
                message: "duplicate id".to_string(),
            });
        }
        if !listing.price.is_finite() || listing.price < 0.0 {
            return Err(AppError::InvalidListing {
                id: listing.id,
                message: format!("price {} must be a non-negative number", listing.price),
            });
        }
        if !(0.0..=5.0).contains(&listing.rating) {
            return Err(AppError::InvalidListing {
                id: listing.id,
                message: format!("rating {} must be within 0..=5", listing.rating),
            });
        }
    }
    Ok(())
}

// endregion: --- Seed File
