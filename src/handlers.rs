// region:    --- Imports
use crate::catalog::{Category, Condition, Listing, ListingStore};
use crate::query;
use crate::query::criteria::{Criteria, ListingParams, ALL_CATEGORIES_LABEL, ALL_CONDITIONS_LABEL};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

// endregion: --- Imports

/// 핸들러 공유 상태
pub type AppState = Arc<dyn ListingStore>;

/// 리스팅 검색 응답
#[derive(Serialize)]
pub struct ListingsResponse {
    pub count: usize,
    pub listings: Vec<Listing>,
}

// region:    --- Router

/// 라우터 설정
pub fn router(store: AppState) -> Router {
    // 프론트엔드가 다른 오리진에서 호출하므로 cors 허용
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/listings", get(handle_get_listings))
        .route("/listings/:id", get(handle_get_listing))
        .route("/categories", get(handle_get_categories))
        .route("/conditions", get(handle_get_conditions))
        .layer(cors)
        .with_state(store)
}

// endregion: --- Router

// region:    --- Query Handlers

/// 헬스 체크
pub async fn handle_health() -> &'static str {
    "ok"
}

/// 리스팅 검색 (필터 + 정렬)
pub async fn handle_get_listings(
    State(store): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    // 체크박스 폼은 condition 키를 반복해서 보낸다
    let params = ListingParams::from_pairs(pairs);
    info!("{:<12} --> 리스팅 검색 params: {:?}", "HandlerQuery", params);
    let criteria = Criteria::from(params);
    let listings = query::handlers::search_listings(store.as_ref(), &criteria).await;
    Json(ListingsResponse {
        count: listings.len(),
        listings,
    })
}

/// 리스팅 단건 조회
pub async fn handle_get_listing(
    State(store): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("{:<12} --> 리스팅 조회 id: {}", "HandlerQuery", id);
    match query::handlers::get_listing(store.as_ref(), id).await {
        Some(listing) => Json(listing).into_response(),
        None => (
            axum::http::StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": format!("listing {} not found", id),
                "code": "NOT_FOUND"
            })),
        )
            .into_response(),
    }
}

/// 카테고리 목록 조회 ("All Categories" 가 맨 앞)
pub async fn handle_get_categories() -> impl IntoResponse {
    info!("{:<12} --> 카테고리 목록 조회", "HandlerQuery");
    let labels: Vec<&str> = std::iter::once(ALL_CATEGORIES_LABEL)
        .chain(Category::ALL.iter().map(|c| c.label()))
        .collect();
    Json(labels)
}

/// 상품 상태 목록 조회 ("All" 이 맨 앞)
pub async fn handle_get_conditions() -> impl IntoResponse {
    info!("{:<12} --> 상품 상태 목록 조회", "HandlerQuery");
    let labels: Vec<&str> = std::iter::once(ALL_CONDITIONS_LABEL)
        .chain(Condition::ALL.iter().map(|c| c.label()))
        .collect();
    Json(labels)
}

// endregion: --- Query Handlers
