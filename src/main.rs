use std::{future::IntoFuture, time::Duration};

use reelbase::{api, client::ApiClient, config::Config, db, store::MovieStore, web};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,reelbase=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let store = MovieStore::new(db);

    let http = reqwest::Client::builder()
        .user_agent("reelbase/0.1")
        .timeout(Duration::from_secs(30))
        .build()?;
    let api_client = ApiClient::new(http, config.api_base_url.clone());

    let api_app = api::router(store);
    let web_app = web::router(api_client);

    let api_listener = tokio::net::TcpListener::bind(config.api_addr).await?;
    let web_listener = tokio::net::TcpListener::bind(config.web_addr).await?;
    tracing::info!(api = %config.api_addr, web = %config.web_addr, "listening");

    tokio::try_join!(
        axum::serve(api_listener, api_app).into_future(),
        axum::serve(web_listener, web_app).into_future(),
    )?;

    Ok(())
}
