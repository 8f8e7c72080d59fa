// region:    --- Imports
use super::model::Listing;
use super::seed;
use crate::error::AppError;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Listing Store Trait
/// 리스팅 저장소 트레이트
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// 전체 리스팅 (시드 순서 유지)
    async fn all(&self) -> Vec<Listing>;

    /// id 로 리스팅 조회
    async fn get(&self, id: i64) -> Option<Listing>;
}

/// 메모리 리스팅 저장소
/// 시작 시 한 번 만들어진 불변 스냅샷을 공유한다.
#[derive(Clone)]
pub struct InMemoryListingStore {
    listings: Arc<[Listing]>,
}

/// 메모리 리스팅 저장소 메서드 구현
#[async_trait]
impl ListingStore for InMemoryListingStore {
    async fn all(&self) -> Vec<Listing> {
        self.listings.to_vec()
    }

    async fn get(&self, id: i64) -> Option<Listing> {
        self.listings.iter().find(|l| l.id == id).cloned()
    }
}

/// 메모리 리스팅 저장소 생성
impl InMemoryListingStore {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: listings.into(),
        }
    }

    /// 내장 시드로 생성
    pub fn builtin() -> Self {
        Self::new(seed::builtin_listings())
    }

    /// 시드 파일이 있으면 파일에서, 없으면 내장 시드로 생성
    pub async fn load(seed_file: Option<&Path>) -> Result<Self, AppError> {
        let store = match seed_file {
            Some(path) => Self::new(seed::load_seed_file(path).await?),
            None => Self::builtin(),
        };
        info!(
            "{:<12} --> 리스팅 {}개 로드 완료",
            "Seed",
            store.len()
        );
        Ok(store)
    }

    fn len(&self) -> usize {
        self.listings.len()
    }
}
// endregion: --- Listing Store Trait
