use chrono::Duration;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the simulator service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub checkout: CheckoutConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let public_domain =
            env::var("APP_PUBLIC_DOMAIN").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let price_cents = env::var("APP_CHECKOUT_PRICE_CENTS")
            .unwrap_or_else(|_| "1000".to_string())
            .parse::<u32>()
            .ok()
            .filter(|cents| *cents > 0)
            .ok_or(ConfigError::InvalidPrice)?;
        let currency = env::var("APP_CHECKOUT_CURRENCY")
            .unwrap_or_else(|_| "eur".to_string())
            .trim()
            .to_ascii_lowercase();
        let auto_settle = parse_flag(
            "APP_CHECKOUT_AUTO_SETTLE",
            &env::var("APP_CHECKOUT_AUTO_SETTLE").unwrap_or_else(|_| "false".to_string()),
        )?;
        if auto_settle && environment == AppEnvironment::Production {
            return Err(ConfigError::AutoSettleInProduction);
        }
        let session_ttl = env::var("APP_CHECKOUT_SESSION_TTL_MINUTES")
            .unwrap_or_else(|_| "1440".to_string())
            .parse::<i64>()
            .ok()
            .filter(|minutes| *minutes > 0)
            .and_then(Duration::try_minutes)
            .ok_or(ConfigError::InvalidSessionTtl)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            checkout: CheckoutConfig {
                public_domain,
                price_cents,
                currency,
                auto_settle,
                session_ttl,
            },
        })
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name }),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Checkout pricing and the public site that hosts the result pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    pub public_domain: String,
    pub price_cents: u32,
    pub currency: String,
    /// Sandbox gateway marks sessions as paid on creation. Refused in production.
    pub auto_settle: bool,
    /// Sessions and their cached verdicts are dropped once this old.
    pub session_ttl: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPrice,
    InvalidFlag { name: &'static str },
    InvalidSessionTtl,
    AutoSettleInProduction,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidPrice => {
                write!(f, "APP_CHECKOUT_PRICE_CENTS must be a positive whole number")
            }
            ConfigError::InvalidFlag { name } => write!(f, "{name} must be true or false"),
            ConfigError::InvalidSessionTtl => {
                write!(f, "APP_CHECKOUT_SESSION_TTL_MINUTES must be a positive whole number")
            }
            ConfigError::AutoSettleInProduction => {
                write!(f, "APP_CHECKOUT_AUTO_SETTLE cannot be enabled in production")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidPrice
            | ConfigError::InvalidFlag { .. }
            | ConfigError::InvalidSessionTtl
            | ConfigError::AutoSettleInProduction => None,
        }
    }
}
