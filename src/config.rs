use serde::{Deserialize, Serialize};

pub const QUICKGO_SEARCH_URL: &str = "https://www.ebi.ac.uk/QuickGO/services/annotation/search";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where annotations are fetched from. There is deliberately no timeout or
/// retry setting here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    /// Prefix put in front of every identifier, e.g. `UniProtKB:P12345`
    pub namespace: String,
    /// Page size requested per identifier
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub version: String,
    pub contact_name: String,
    pub contact_email: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            service: ServiceConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: QUICKGO_SEARCH_URL.to_string(),
            namespace: "UniProtKB".to_string(),
            limit: 100,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "Gene Ontology (GO) Term Mapper".to_string(),
            version: std::env::var("VERSION").unwrap_or_else(|_| "???".to_string()),
            contact_name: "Mary Doe".to_string(),
            contact_email: "mary.doe@acme.au".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config` file and
    /// `GOTM_`-prefixed environment variables, in that order.
    ///
    /// Nested keys use a double underscore: `GOTM_SERVER__PORT=9000`,
    /// `GOTM_UPSTREAM__BASE_URL=http://localhost:9999/search`.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Some("config"), Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("GOTM")
            .prefix_separator("_")
            .separator("__")
    }

    fn load_from(file: Option<&str>, environment: config::Environment) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        if let Some(name) = file {
            config = config.add_source(config::File::with_name(name).required(false));
        }

        config = config.add_source(environment);

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
