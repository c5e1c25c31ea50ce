use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub data: DataSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Http,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub source: SourceKind,
    pub path: PathBuf,
    pub url: Option<String>,
    pub timeout_secs: u64,
}

const CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "EMPLOYEE_DASH";

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    build_config(CONFIG_FILE)
}

fn build_config(file: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("data.source", "file")?
        .set_default("data.path", "assets/data.json")?
        .set_default("data.timeout_secs", 10)?
        .add_source(config::File::with_name(file).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    let config: DashboardConfig = settings.try_deserialize()?;
    if config.data.source == SourceKind::Http && config.data.url.is_none() {
        anyhow::bail!("data.url is required when data.source is \"http\"");
    }

    Ok(config)
}
