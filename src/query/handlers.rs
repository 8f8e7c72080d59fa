// region:    --- Imports
use super::criteria::{Criteria, SortKey};
use crate::catalog::{Listing, ListingStore};
use std::cmp::Ordering;
use tracing::info;

// endregion: --- Imports

// region:    --- Filter / Sort

/// 리스팅 필터 및 정렬
///
/// 입력은 변경하지 않고 새 Vec 을 돌려준다. 결과는 항상 입력의 부분 수열이며
/// 정렬은 안정 정렬이라 동점이면 입력 순서를 유지한다. `Newest` 는 입력 순서 그대로.
/// 잘못된 조건(min > max 등)은 오류가 아니라 빈 결과가 된다.
pub fn filter_listings(listings: &[Listing], criteria: &Criteria) -> Vec<Listing> {
    let mut matched: Vec<Listing> = listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect();

    match criteria.sort {
        SortKey::Newest => {}
        SortKey::PriceAsc => matched.sort_by(|a, b| compare(a.price, b.price)),
        SortKey::PriceDesc => matched.sort_by(|a, b| compare(b.price, a.price)),
        SortKey::Rating => matched.sort_by(|a, b| compare(b.rating, a.rating)),
    }

    matched
}

fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

// endregion: --- Filter / Sort

// region:    --- Query Handlers

/// 조건에 맞는 리스팅 조회
pub async fn search_listings(store: &dyn ListingStore, criteria: &Criteria) -> Vec<Listing> {
    info!("{:<12} --> 리스팅 검색: {:?}", "Query", criteria);
    let listings = store.all().await;
    filter_listings(&listings, criteria)
}

/// 리스팅 단건 조회
pub async fn get_listing(store: &dyn ListingStore, id: i64) -> Option<Listing> {
    info!("{:<12} --> 리스팅 조회 id: {}", "Query", id);
    store.get(id).await
}

// endregion: --- Query Handlers
