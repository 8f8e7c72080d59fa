// region:    --- Imports
use campus_market::catalog::InMemoryListingStore;
use campus_market::config::Config;
use campus_market::handlers;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 설정 로드
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{:<12} --> 설정 로드 실패: {}", "Main", e);
            return Err(e.into());
        }
    };

    // 리스팅 시드 로드
    let store = match InMemoryListingStore::load(config.seed_file.as_deref()).await {
        Ok(store) => store,
        Err(e) => {
            error!("{:<12} --> 시드 로드 실패: {}", "Main", e);
            return Err(e.into());
        }
    };

    // 라우터 설정
    let routes_all = handlers::router(Arc::new(store));

    // 리스너 생성
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
