//! Process configuration read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use pasieka_analytics::{DashboardConfig, MonthOrder};
use pasieka_observability::LogFormat;

use crate::error::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Which entity store backs the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreBackend {
    /// Document collections held in memory.
    #[default]
    Memory,
    /// Spreadsheet-style tables (`Zamówienia`, `Produkty`, `Klienci`).
    Sheet,
}

impl core::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "sheet" => Ok(StoreBackend::Sheet),
            other => Err(format!("unknown store '{other}' (expected memory or sheet)")),
        }
    }
}

/// Chat-completion settings for the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantSettings {
    /// `None` leaves the assistant unconfigured; it then refuses every question.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreBackend,
    /// JSON file loaded into the store at startup: a `{orders, products,
    /// customers}` document for the memory store, a table-name → rows
    /// workbook for the sheet store.
    pub seed_file: Option<PathBuf>,
    pub log_format: LogFormat,
    pub dashboard: DashboardConfig,
    pub assistant: AssistantSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            store: StoreBackend::default(),
            seed_file: None,
            log_format: LogFormat::default(),
            dashboard: DashboardConfig::default(),
            assistant: AssistantSettings::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_addr = get("PASIEKA_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid("PASIEKA_BIND_ADDR", e.to_string()))?;

        let store = parse_or_default::<StoreBackend>(get("PASIEKA_STORE"), "PASIEKA_STORE")?;
        let log_format = parse_or_default::<LogFormat>(get("PASIEKA_LOG_FORMAT"), "PASIEKA_LOG_FORMAT")?;
        let month_order =
            parse_or_default::<MonthOrder>(get("PASIEKA_MONTH_ORDER"), "PASIEKA_MONTH_ORDER")?;

        let sellers = match get("PASIEKA_SELLERS") {
            Some(raw) => {
                let sellers: Vec<String> = raw
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if sellers.is_empty() {
                    return Err(ConfigError::invalid(
                        "PASIEKA_SELLERS",
                        "at least one seller name is required",
                    ));
                }
                sellers
            }
            None => DashboardConfig::default().sellers,
        };

        let assistant = AssistantSettings {
            api_key: get("OPENAI_API_KEY").map(|k| k.trim().to_string()),
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            base_url: get("OPENAI_BASE_URL")
                .map(|u| u.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
        };

        Ok(Self {
            bind_addr,
            store,
            seed_file: get("PASIEKA_SEED_FILE").map(PathBuf::from),
            log_format,
            dashboard: DashboardConfig {
                month_order,
                sellers,
            },
            assistant,
        })
    }

    /// Seller credited when an order is placed without one.
    pub fn default_seller(&self) -> &str {
        self.dashboard
            .sellers
            .first()
            .map(String::as_str)
            .unwrap_or("Kacper")
    }
}

fn parse_or_default<T>(raw: Option<String>, var: &'static str) -> Result<T, ConfigError>
where
    T: core::str::FromStr<Err = String> + Default,
{
    match raw {
        Some(value) => value.parse::<T>().map_err(|e| ConfigError::invalid(var, e)),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.default_seller(), "Kacper");
        assert!(config.assistant.api_key.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PASIEKA_BIND_ADDR", "127.0.0.1:3000"),
            ("PASIEKA_STORE", "sheet"),
            ("PASIEKA_SEED_FILE", "/tmp/pasieka.json"),
            ("PASIEKA_LOG_FORMAT", "pretty"),
            ("PASIEKA_MONTH_ORDER", "chronological"),
            ("PASIEKA_SELLERS", " Julian , Kacper,,"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENAI_BASE_URL", "http://localhost:9000/v1/"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.store, StoreBackend::Sheet);
        assert_eq!(config.seed_file, Some(PathBuf::from("/tmp/pasieka.json")));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.dashboard.month_order, MonthOrder::Chronological);
        assert_eq!(config.dashboard.sellers, vec!["Julian", "Kacper"]);
        assert_eq!(config.default_seller(), "Julian");
        assert_eq!(config.assistant.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.assistant.model, "gpt-4o-mini");
        assert_eq!(config.assistant.base_url, "http://localhost:9000/v1");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = AppConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "  ")])).unwrap();
        assert!(config.assistant.api_key.is_none());
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = AppConfig::from_lookup(lookup(&[("PASIEKA_STORE", "postgres")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PASIEKA_STORE", .. }));

        let err = AppConfig::from_lookup(lookup(&[("PASIEKA_BIND_ADDR", "nowhere")])).unwrap_err();
        assert!(err.to_string().contains("PASIEKA_BIND_ADDR"));

        let err = AppConfig::from_lookup(lookup(&[("PASIEKA_SELLERS", " , ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PASIEKA_SELLERS", .. }));
    }
}
