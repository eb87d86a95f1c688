use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_addr: SocketAddr,
    pub api_addr: SocketAddr,
    pub api_base_url: String,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let web_port: u16 = std::env::var("WEB_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("WEB_PORT")?;
        let api_port: u16 = std::env::var("API_PORT")
            .unwrap_or_else(|_| "4000".to_string())
            .parse()
            .context("API_PORT")?;

        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{api_port}"));

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://reelbase.db?mode=rwc".to_string());

        Ok(Self {
            web_addr: format!("{host}:{web_port}").parse().context("HOST/WEB_PORT")?,
            api_addr: format!("{host}:{api_port}").parse().context("HOST/API_PORT")?,
            api_base_url,
            database_url,
        })
    }
}
