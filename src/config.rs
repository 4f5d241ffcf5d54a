use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub alert_risk_threshold: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            alert_risk_threshold: std::env::var("ALERT_RISK_THRESHOLD")
                .unwrap_or_else(|_| "70".to_string())
                .parse()
                .map_err(|_| {
                    anyhow::anyhow!("ALERT_RISK_THRESHOLD must be a non-negative integer")
                })?,
        };

        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!("Alert risk threshold: {}", config.alert_risk_threshold);

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            alert_risk_threshold: 70,
        }
    }
}
