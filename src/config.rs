use ::config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 报表输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            report: ReportConfig {
                currency_symbol: "₹".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置 (WOR_SERVER__HOST, WOR_SERVER__PORT, WOR_REPORT__CURRENCY_SYMBOL)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix("WOR"))
    }

    fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", defaults.server.port as i64)?
            .set_default("report.currency_symbol", defaults.report.currency_symbol)?
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
