use std::{env, path::PathBuf, time::Duration};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage_dir: PathBuf,
    /// Artificial delay before login, registration and checkout settle.
    pub simulated_latency: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let storage_dir = env::var("APP_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".canteen"));
        let simulated_latency = match env::var("APP_SIMULATED_LATENCY_MS") {
            Ok(ms) => Duration::from_millis(ms.parse::<u64>().map_err(|e| {
                anyhow::anyhow!("APP_SIMULATED_LATENCY_MS must be a number of milliseconds: {e}")
            })?),
            Err(_) => Duration::ZERO,
        };
        Ok(Self {
            host,
            port,
            storage_dir,
            simulated_latency,
        })
    }
}
