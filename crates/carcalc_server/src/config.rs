use axum::http::HeaderValue;
use carcalc_core::config::DEFAULT_OPPORTUNITY_RATE;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "carcalc_server")]
#[command(about = "HTTP API comparing the cost of buying, financing or renting a car")]
pub struct Args {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Comma-separated list of allowed CORS origins (empty allows any origin)
    #[arg(long, env = "FRONTEND_URL", default_value = "")]
    pub allowed_origins: String,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Annual yield the money would earn if not spent on the car
    #[arg(long, env = "OPPORTUNITY_RATE", default_value_t = DEFAULT_OPPORTUNITY_RATE)]
    pub opportunity_rate: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),

    #[error("Opportunity rate must be a finite number >= 0, got {0}")]
    InvalidOpportunityRate(f64),
}

/// Validated server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<HeaderValue>,
    pub log_level: String,
    pub opportunity_rate: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            allowed_origins: Vec::new(),
            log_level: "info".to_string(),
            opportunity_rate: DEFAULT_OPPORTUNITY_RATE,
        }
    }
}

impl TryFrom<Args> for ServerConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if !args.opportunity_rate.is_finite() || args.opportunity_rate < 0.0 {
            return Err(ConfigError::InvalidOpportunityRate(args.opportunity_rate));
        }

        Ok(Self {
            host: args.host,
            port: args.port,
            allowed_origins: parse_origins(&args.allowed_origins)?,
            log_level: args.log_level,
            opportunity_rate: args.opportunity_rate,
        })
    }
}

/// Split a comma-separated origin list, skipping blank entries
pub fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
        })
        .collect()
}
