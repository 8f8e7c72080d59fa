use campus_market::catalog::seed::builtin_listings;
use campus_market::catalog::{Condition, InMemoryListingStore};
use campus_market::handlers;
use axum::http::StatusCode;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;

/// 테스트 서버 실행 (임의 포트)
async fn spawn_server() -> String {
    let store = Arc::new(InMemoryListingStore::builtin());
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, handlers::router(store).into_make_service())
            .await
            .unwrap();
    });
    format!("http://{}", addr)
}

async fn get_json(client: &Client, url: String) -> (StatusCode, Value) {
    let response = client
        .get(url)
        .send()
        .await
        .expect("Failed to send request");
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
    let body = response.json::<Value>().await.unwrap();
    (status, body)
}

fn titles(body: &Value) -> Vec<String> {
    body["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["title"].as_str().unwrap().to_string())
        .collect()
}

/// 헬스 체크
#[tokio::test]
async fn test_health() {
    let base = spawn_server().await;
    let response = Client::new()
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "ok");
}

/// 조건 없이 검색하면 시드 전체가 순서대로 반환
#[tokio::test]
async fn test_listings_without_params_returns_seed() {
    let base = spawn_server().await;
    let (status, body) = get_json(&Client::new(), format!("{}/listings", base)).await;

    assert_eq!(status, StatusCode::OK);
    let seed = builtin_listings();
    assert_eq!(body["count"], seed.len());
    let expected: Vec<String> = seed.into_iter().map(|l| l.title).collect();
    assert_eq!(titles(&body), expected);
}

/// 검색어 + 가격 범위
#[tokio::test]
async fn test_listings_query_and_price() {
    let base = spawn_server().await;
    let client = Client::new();

    let (_, body) = get_json(
        &client,
        format!("{}/listings?q=physics&category=ALL&min_price=0&max_price=200&condition=All", base),
    )
    .await;
    assert_eq!(titles(&body), vec!["Physics Lab Manual", "University Physics"]);

    let (_, body) = get_json(&client, format!("{}/listings?q=physics&max_price=40", base)).await;
    assert_eq!(body["count"], 1);
    assert_eq!(titles(&body), vec!["University Physics"]);
}

/// 카테고리 + 상태 + 정렬
#[tokio::test]
async fn test_listings_category_condition_sort() {
    let base = spawn_server().await;
    let client = Client::new();

    let (_, body) = get_json(
        &client,
        format!("{}/listings?category=Textbooks&sort=price-asc", base),
    )
    .await;
    let prices: Vec<f64> = body["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["price"].as_f64().unwrap())
        .collect();
    assert_eq!(prices, vec![35.0, 85.0, 120.0]);

    let (_, body) = get_json(
        &client,
        format!("{}/listings?condition=Good,Very%20Good&sort=rating", base),
    )
    .await;
    let ids: Vec<i64> = body["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 4, 2, 8]);
}

/// 잘못된 조건은 오류가 아니라 빈 결과
#[tokio::test]
async fn test_listings_malformed_criteria_yield_empty() {
    let base = spawn_server().await;
    let client = Client::new();

    for query in [
        "min_price=100&max_price=10",
        "category=Electronics",
        "condition=Broken",
    ] {
        let (status, body) = get_json(&client, format!("{}/listings?{}", base, query)).await;
        assert_eq!(status, StatusCode::OK, "query: {}", query);
        assert_eq!(body["count"], 0, "query: {}", query);
    }

    let (status, body) = get_json(&client, format!("{}/listings?min_price=abc", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], builtin_listings().len());
}

/// 단건 조회
#[tokio::test]
async fn test_get_listing() {
    let base = spawn_server().await;
    let client = Client::new();

    let (status, body) = get_json(&client, format!("{}/listings/2", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Physics Lab Manual");
    assert_eq!(body["category"], "Lab Materials");
    assert_eq!(body["condition"], "Good");

    let (status, body) = get_json(&client, format!("{}/listings/999", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

/// 카테고리 / 상태 목록
#[tokio::test]
async fn test_facets() {
    let base = spawn_server().await;
    let client = Client::new();

    let (_, body) = get_json(&client, format!("{}/categories", base)).await;
    let categories = body.as_array().unwrap();
    assert_eq!(categories[0], "All Categories");
    assert_eq!(categories.len(), 6);

    let (_, body) = get_json(&client, format!("{}/conditions", base)).await;
    let conditions = body.as_array().unwrap();
    assert_eq!(conditions[0], "All");
    assert!(conditions.contains(&Value::from("Like New")));
}

/// 반복된 쿼리 키 (체크박스 폼)
#[tokio::test]
async fn test_listings_repeated_keys() {
    let base = spawn_server().await;
    let client = Client::new();

    let (status, body) = get_json(
        &client,
        format!("{}/listings?condition=Good&condition=New", base),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();
    let expected: Vec<i64> = builtin_listings()
        .into_iter()
        .filter(|l| l.condition == Condition::Good || l.condition == Condition::New)
        .map(|l| l.id)
        .collect();
    assert_eq!(ids, expected);
    assert_eq!(ids, vec![2, 3, 5, 6]);

    let (status, body) = get_json(
        &client,
        format!("{}/listings?q=calculus&q=physics&min_price=1&min_price=40", base),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Physics Lab Manual"]);
}
